use std::fmt::Debug;
use std::fmt::Display;

/// A branch on a remote, like `origin/puppy`.
///
/// Remote names and branch names can both contain slashes, so unlike a local branch this keeps
/// the two parts separate instead of storing `<remote>/<branch>` and splitting it later.
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct RemoteBranchRef {
    remote: String,
    branch: String,
}

impl Debug for RemoteBranchRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteBranchRef")
            .field("remote", &self.remote)
            .field("branch", &self.branch)
            .finish()
    }
}

impl RemoteBranchRef {
    pub fn new(remote: &str, branch: &str) -> Self {
        Self {
            remote: remote.to_owned(),
            branch: branch.to_owned(),
        }
    }

    /// Get the name of this remote.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Get the name of this branch on the remote.
    pub fn branch_name(&self) -> &str {
        &self.branch
    }
}

impl Display for RemoteBranchRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "refs/remotes/{}/{}", self.remote, self.branch)
        } else {
            write!(f, "{}/{}", self.remote, self.branch)
        }
    }
}
