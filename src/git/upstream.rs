use std::fmt::Display;

use derive_more::From;
use miette::miette;

use super::RemoteBranchRef;

/// An upstream branch as printed by `git rev-parse --abbrev-ref <branch>@{upstream}`, like
/// `origin/puppy`.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct UpstreamName(String);

/// The result of [`UpstreamName::split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamSplit {
    /// There was exactly one slash, so there's only one way to read it.
    Unambiguous(RemoteBranchRef),
    /// There were multiple slashes. `foo/bar/baz` could be branch `bar/baz` on remote `foo` or
    /// branch `baz` on remote `foo/bar`; the branch's `branch.<name>.remote` setting decides.
    NeedsConfigLookup,
}

impl UpstreamName {
    /// Split into a remote and a branch name, if that can be done without knowing the remote's
    /// name.
    pub fn split(&self) -> miette::Result<UpstreamSplit> {
        match self.0.split_once('/') {
            None => Err(miette!("Upstream {self} has no remote name")),
            Some((remote, branch)) => {
                if branch.contains('/') {
                    Ok(UpstreamSplit::NeedsConfigLookup)
                } else {
                    Ok(UpstreamSplit::Unambiguous(RemoteBranchRef::new(
                        remote, branch,
                    )))
                }
            }
        }
    }

    /// Split off a known remote name.
    pub fn strip_remote(&self, remote: &str) -> miette::Result<RemoteBranchRef> {
        match self
            .0
            .strip_prefix(remote)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(branch) => Ok(RemoteBranchRef::new(remote, branch)),
            None => Err(miette!(
                "Upstream {self} does not begin with the name of its remote {remote}"
            )),
        }
    }
}

impl Display for UpstreamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
