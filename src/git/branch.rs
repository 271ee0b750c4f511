use std::fmt::Debug;

use command_error::CommandExt;
use command_error::OutputContext;
use miette::miette;
use tracing::instrument;
use utf8_command::Utf8Output;

use super::log_command;
use super::GitLike;
use super::LocalBranchRef;
use super::RemoteBranchRef;
use super::SymbolicRefFailure;
use super::UpstreamName;
use super::UpstreamSplit;

/// Git methods for dealing with branches.
#[repr(transparent)]
pub struct GitBranch<'a, G>(&'a G);

impl<G> Debug for GitBranch<'_, G>
where
    G: GitLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitBranch")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, G> GitBranch<'a, G>
where
    G: GitLike,
{
    pub fn new(git: &'a G) -> Self {
        Self(git)
    }

    /// Lists local branches.
    #[instrument(level = "trace")]
    pub fn list_local(&self) -> miette::Result<Vec<LocalBranchRef>> {
        self.0
            .refs()
            .for_each_ref(Some(&["refs/heads/**"]))?
            .into_iter()
            .map(LocalBranchRef::try_from)
            .collect()
    }

    /// Get the checked-out branch.
    ///
    /// Errors if `HEAD` is detached.
    #[instrument(level = "trace")]
    pub fn current(&self) -> miette::Result<LocalBranchRef> {
        let mut command = self.0.command();
        command.args(["symbolic-ref", "--short", "HEAD"]);
        log_command(&command);
        command.output_checked_as(|context: OutputContext<Utf8Output>| {
            if context.status().success() {
                Ok(LocalBranchRef::from(context.output().stdout.trim()))
            } else {
                match SymbolicRefFailure::classify(&context.output().stderr) {
                    SymbolicRefFailure::DetachedHead => {
                        Err(miette!("Not on a branch (detached HEAD)?"))
                    }
                    SymbolicRefFailure::Other => Err(context.error().into()),
                }
            }
        })
    }

    /// Get the branch that a given branch is tracking, like `origin/puppy`.
    ///
    /// Any failure is taken to mean that there's no upstream configured.
    #[instrument(level = "trace")]
    pub fn upstream(&self, branch: &str) -> miette::Result<Option<UpstreamName>> {
        let mut command = self.0.command();
        command.args(["rev-parse", "--abbrev-ref", &format!("{branch}@{{upstream}}")]);
        log_command(&command);
        Ok(
            command.output_checked_as(|context: OutputContext<Utf8Output>| {
                if context.status().success() {
                    Ok::<_, command_error::Error>(Some(UpstreamName::from(
                        context.output().stdout.trim().to_owned(),
                    )))
                } else {
                    tracing::debug!(
                        %branch,
                        stderr = context.output().stderr.trim(),
                        "No upstream"
                    );
                    Ok(None)
                }
            })?,
        )
    }

    /// Get the remote a branch pushes and pulls from (`branch.<name>.remote`).
    #[instrument(level = "trace")]
    pub fn remote(&self, branch: &str) -> miette::Result<String> {
        self.0
            .config()
            .get(&format!("branch.{branch}.remote"))?
            .ok_or_else(|| miette!("Branch {branch} has no remote configured"))
    }

    /// Get the remote branch that a given branch is tracking, split into its remote and branch
    /// names.
    #[instrument(level = "trace")]
    pub fn tracking(&self, branch: &str) -> miette::Result<Option<RemoteBranchRef>> {
        let upstream = match self.upstream(branch)? {
            Some(upstream) => upstream,
            None => {
                return Ok(None);
            }
        };

        match upstream.split()? {
            UpstreamSplit::Unambiguous(remote_branch) => Ok(Some(remote_branch)),
            UpstreamSplit::NeedsConfigLookup => {
                tracing::debug!(%upstream, "Disambiguating remote and branch in upstream");
                let remote = self.remote(branch)?;
                upstream.strip_remote(&remote).map(Some)
            }
        }
    }

    /// `git branch -m`.
    #[instrument(level = "trace")]
    pub fn rename(&self, from: &str, to: &str) -> miette::Result<()> {
        self.0.run(["branch", "-m", from, to])?;
        Ok(())
    }

    /// `git branch --delete`.
    ///
    /// Refuses to delete branches which aren't merged.
    #[instrument(level = "trace")]
    pub fn delete(&self, branch: &str) -> miette::Result<()> {
        self.0.run(["branch", "--delete", branch])?;
        Ok(())
    }

    /// Point a branch which isn't checked out at a different commit.
    #[instrument(level = "trace")]
    pub fn reset(&self, branch: &str, commitish: &str) -> miette::Result<()> {
        self.0.run(["branch", "--force", branch, commitish])?;
        Ok(())
    }

    /// `git switch`.
    #[instrument(level = "trace")]
    pub fn switch(&self, branch: &str) -> miette::Result<()> {
        self.0.run(["switch", branch])?;
        Ok(())
    }

    /// Rebase the checked-out branch onto `onto`.
    #[instrument(level = "trace")]
    pub fn rebase(&self, onto: &str) -> miette::Result<()> {
        self.0.run(["rebase", onto])?;
        Ok(())
    }

    /// Fast-forward the checked-out branch to `branch`.
    #[instrument(level = "trace")]
    pub fn merge_ff_only(&self, branch: &str) -> miette::Result<()> {
        self.0.run(["merge", "--ff-only", branch])?;
        Ok(())
    }
}
