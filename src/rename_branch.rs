use std::fmt::Display;

use miette::miette;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing::instrument;

use crate::git::GitLike;
use crate::git::LocalBranchRef;
use crate::git::RemoteBranchRef;

#[derive(Debug, Clone, Default)]
pub struct RenameBranchOpts {
    /// The branch to rename. If `None` or empty, the checked-out branch is renamed.
    pub old: Option<String>,
    /// The new name.
    pub new: String,
}

/// A plan for renaming a local branch along with its remote tracking branch.
#[derive(Debug)]
pub struct RenameBranch<'a, G> {
    git: &'a G,
    old: LocalBranchRef,
    new: LocalBranchRef,
}

impl<G> Display for RenameBranch<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Renaming {} to {}",
            self.old.if_supports_color(Stream::Stderr, |text| text.cyan()),
            self.new.if_supports_color(Stream::Stderr, |text| text.cyan()),
        )
    }
}

impl<'a, G> RenameBranch<'a, G>
where
    G: GitLike,
{
    /// Check the branch names and resolve the branch to rename.
    ///
    /// Nothing in the repository changes until [`RenameBranch::execute`].
    #[instrument(level = "trace", skip(git))]
    pub fn new(git: &'a G, opts: RenameBranchOpts) -> miette::Result<Self> {
        if opts.new.is_empty() {
            return Err(miette!("Need a non-empty target name"));
        }

        let old = match opts.old.filter(|old| !old.is_empty()) {
            Some(old) => LocalBranchRef::new(old),
            None => git.branch().current()?,
        };
        let new = LocalBranchRef::new(opts.new);

        if old == new {
            // `git branch -m` allows this. Everything below assumes the names differ.
            return Err(miette!("Old and new branch names are the same: {old}"));
        }

        Ok(Self { git, old, new })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn execute(&self) -> miette::Result<()> {
        tracing::info!("{self}");

        self.git
            .branch()
            .rename(self.old.branch_name(), self.new.branch_name())?;

        // `git branch -m` carries the tracking configuration over to the new name.
        let remote_branch = match self.git.branch().tracking(self.new.branch_name())? {
            Some(remote_branch) => remote_branch,
            None => {
                tracing::info!("{} has no remote tracking branch; done", self.new);
                return Ok(());
            }
        };

        self.rename_remote(&remote_branch)
    }

    fn rename_remote(&self, remote_branch: &RemoteBranchRef) -> miette::Result<()> {
        if remote_branch.branch_name() != self.old.branch_name() {
            return Err(miette!(
                "Renamed {} to {}, but its remote tracking branch has a different name ({})",
                self.old,
                self.new,
                remote_branch.branch_name(),
            ));
        }

        let remote = remote_branch.remote();
        let new_remote_branch = self.new.on_remote(remote);
        tracing::info!(
            "Renaming {} to {}",
            remote_branch.if_supports_color(Stream::Stderr, |text| text.cyan()),
            new_remote_branch.if_supports_color(Stream::Stderr, |text| text.cyan()),
        );

        // Neither of these is rolled back if the other fails; a failed push leaves the local
        // branch renamed and the remote in whatever state `git` left it.
        self.git
            .remote()
            .push_delete(remote, self.old.branch_name())?;
        self.git
            .remote()
            .push_set_upstream(remote, self.new.branch_name())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::git::Git;

    // None of these touch the repository, so it doesn't need to exist.
    fn git() -> Git {
        Git::from_path(Utf8PathBuf::from("/nonexistent/repo"))
    }

    fn opts(old: &str, new: &str) -> RenameBranchOpts {
        RenameBranchOpts {
            old: Some(old.to_owned()),
            new: new.to_owned(),
        }
    }

    #[test]
    fn test_rename_branch_empty_new_name() {
        let git = git();
        let err = RenameBranch::new(&git, opts("puppy", "")).unwrap_err();
        expect!["Need a non-empty target name"].assert_eq(&err.to_string());
    }

    #[test]
    fn test_rename_branch_same_name() {
        let git = git();
        let err = RenameBranch::new(&git, opts("puppy", "puppy")).unwrap_err();
        expect!["Old and new branch names are the same: puppy"].assert_eq(&err.to_string());
    }

    #[test]
    fn test_rename_branch_explicit_old() {
        let git = git();
        let plan = RenameBranch::new(&git, opts("feature/puppy", "feature/doggy")).unwrap();
        assert_eq!(plan.old.branch_name(), "feature/puppy");
        assert_eq!(plan.new.branch_name(), "feature/doggy");
    }
}
