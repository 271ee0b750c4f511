use std::fmt::Debug;

use tracing::instrument;

use super::GitLike;

/// Git methods for dealing with remotes.
#[repr(transparent)]
pub struct GitRemote<'a, G>(&'a G);

impl<G> Debug for GitRemote<'_, G>
where
    G: GitLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitRemote")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, G> GitRemote<'a, G>
where
    G: GitLike,
{
    pub fn new(git: &'a G) -> Self {
        Self(git)
    }

    /// `git fetch` from the default remote.
    #[instrument(level = "trace")]
    pub fn fetch(&self) -> miette::Result<()> {
        self.0.run(["fetch"])?;
        Ok(())
    }

    /// `git pull --ff-only` into the checked-out branch.
    #[instrument(level = "trace")]
    pub fn pull_ff_only(&self) -> miette::Result<()> {
        self.0.run(["pull", "--ff-only"])?;
        Ok(())
    }

    /// Push the checked-out branch to its upstream.
    #[instrument(level = "trace")]
    pub fn push(&self) -> miette::Result<()> {
        self.0.run(["push"])?;
        Ok(())
    }

    /// Push the checked-out branch to its upstream, overwriting it if it hasn't changed since it
    /// was last fetched.
    #[instrument(level = "trace")]
    pub fn push_force_with_lease(&self) -> miette::Result<()> {
        self.0.run(["push", "--force-with-lease"])?;
        Ok(())
    }

    /// Delete a branch on a remote.
    #[instrument(level = "trace")]
    pub fn push_delete(&self, remote: &str, branch: &str) -> miette::Result<()> {
        self.0.run(["push", remote, &format!(":{branch}")])?;
        Ok(())
    }

    /// Push a local branch to a branch of the same name on a remote and track it.
    #[instrument(level = "trace")]
    pub fn push_set_upstream(&self, remote: &str, branch: &str) -> miette::Result<()> {
        self.0
            .run(["push", "--set-upstream", remote, &format!("{branch}:{branch}")])?;
        Ok(())
    }
}
