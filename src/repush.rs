use std::fmt::Display;

use miette::miette;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing::instrument;

use crate::format_bulleted_list;
use crate::git::AheadBehind;
use crate::git::GitLike;
use crate::git::LocalBranchRef;

#[derive(Debug, Clone)]
pub struct RepushOpts {
    /// The branch to fast-forward, usually `main`.
    pub base: String,
    /// The branch to rebase onto `base`. If `None` or empty, the checked-out branch is used.
    pub branch: Option<String>,
    /// How many times to run the whole sequence before giving up on pushing `base`.
    pub max_attempts: u32,
    /// Delete `branch` (locally, and on the remote if it tracks a branch of the same name) once
    /// `base` has been pushed.
    pub delete_branch: bool,
}

/// A plan for rebase-merging a branch into a base branch.
#[derive(Debug)]
pub struct Repush<'a, G> {
    git: &'a G,
    base: LocalBranchRef,
    branch: LocalBranchRef,
    max_attempts: u32,
    delete_branch: bool,
}

impl<G> Display for Repush<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rebasing {} onto {} and pushing both",
            self.branch.if_supports_color(Stream::Stderr, |text| text.cyan()),
            self.base.if_supports_color(Stream::Stderr, |text| text.cyan()),
        )
    }
}

impl<'a, G> Repush<'a, G>
where
    G: GitLike,
{
    /// Resolve the branch and check that both branches are in a state the workflow can handle.
    ///
    /// If a branch is given, it's checked out first, so the checks run against it.
    #[instrument(level = "trace", skip(git))]
    pub fn new(git: &'a G, opts: RepushOpts) -> miette::Result<Self> {
        let branch = match opts.branch.filter(|branch| !branch.is_empty()) {
            Some(branch) => {
                git.branch().switch(&branch)?;
                LocalBranchRef::new(branch)
            }
            None => git.branch().current()?,
        };
        let base = LocalBranchRef::new(opts.base);

        if base == branch {
            return Err(miette!("Cannot repush {branch} into itself"));
        }

        let plan = Self {
            git,
            base,
            branch,
            max_attempts: opts.max_attempts.max(1),
            delete_branch: opts.delete_branch,
        };
        plan.check_upstreams()?;
        Ok(plan)
    }

    /// The branch must not be missing commits from its upstream, and the base must not have
    /// commits that haven't been pushed.
    #[instrument(level = "trace", skip(self))]
    fn check_upstreams(&self) -> miette::Result<()> {
        let refs = self.git.refs();

        let AheadBehind { behind, .. } = refs.ahead_behind(
            self.branch.branch_name(),
            &self.branch.upstream_rev(),
        )?;
        if behind > 0 {
            return Err(miette!(
                "Branch {} is behind its upstream by {behind} commits",
                self.branch
            ));
        }

        let AheadBehind { ahead, .. } =
            refs.ahead_behind(self.base.branch_name(), &self.base.upstream_rev())?;
        if ahead > 0 {
            return Err(miette!(
                "Base branch {} is ahead of its upstream by {ahead} commits",
                self.base
            ));
        }

        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn execute(&self) -> miette::Result<()> {
        tracing::info!("{self}");

        let mut push_failures = Vec::new();

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                tracing::info!(
                    "Retrying ({attempt}/{}): somebody else may have pushed to {}",
                    self.max_attempts,
                    self.base
                );
                self.rewind_base()?;
            }

            self.rebase_and_merge()?;

            match self.git.remote().push() {
                Ok(()) => {
                    return self.cleanup();
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Failed to push {}",
                        self.base
                    );
                    tracing::debug!("{err}");
                    push_failures.push(err);
                }
            }
        }

        Err(miette!(
            "Failed to push {} after {} attempts:\n{}",
            self.base,
            self.max_attempts,
            format_bulleted_list(push_failures)
        ))
    }

    /// Pull the base, rebase the branch onto it, push the branch, and fast-forward the base to
    /// the branch.
    ///
    /// Leaves `base` checked out.
    fn rebase_and_merge(&self) -> miette::Result<()> {
        let branch = self.git.branch();

        branch.switch(self.base.branch_name())?;
        self.git.remote().pull_ff_only()?;

        branch.switch(self.branch.branch_name())?;
        branch.rebase(self.base.branch_name())?;
        self.git.remote().push_force_with_lease()?;

        branch.switch(self.base.branch_name())?;
        branch.merge_ff_only(self.branch.branch_name())?;

        Ok(())
    }

    /// Undo the local fast-forward of the base after a failed push, so that the next attempt
    /// can pull it again.
    ///
    /// The base had no unpushed commits before we started, so resetting it to its upstream only
    /// drops the commits we merged into it, which are still on the branch.
    fn rewind_base(&self) -> miette::Result<()> {
        let branch = self.git.branch();
        branch.switch(self.branch.branch_name())?;
        self.git.remote().fetch()?;
        branch.reset(self.base.branch_name(), &self.base.upstream_rev())?;
        self.check_upstreams()
    }

    /// Delete the branch on its remote (if it has a remote branch of the same name) and
    /// locally.
    fn cleanup(&self) -> miette::Result<()> {
        if !self.delete_branch {
            tracing::info!("Pushed {}; keeping {}", self.base, self.branch);
            return Ok(());
        }

        let name = self.branch.branch_name();
        match self.git.branch().tracking(name)? {
            Some(remote_branch) if remote_branch.branch_name() == name => {
                tracing::info!("Deleting {remote_branch}");
                self.git
                    .remote()
                    .push_delete(remote_branch.remote(), name)?;
            }
            Some(remote_branch) => {
                tracing::info!(
                    "{} tracks {remote_branch}, which has a different name; not deleting it",
                    self.branch
                );
            }
            None => {}
        }

        tracing::info!("Deleting {}", self.branch);
        self.git.branch().delete(name)
    }
}
