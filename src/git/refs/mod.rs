use std::fmt::Debug;
use std::str::FromStr;

use command_error::CommandExt;
use command_error::OutputContext;
use miette::miette;
use tap::Tap;
use tracing::instrument;
use utf8_command::Utf8Output;
use winnow::Parser;

use super::log_command;
use super::GitLike;

mod ahead_behind;
mod local_branch;
mod name;
mod remote_branch;

pub use ahead_behind::AheadBehind;
pub use local_branch::LocalBranchRef;
pub use name::Ref;
pub use remote_branch::RemoteBranchRef;

/// Git methods for dealing with refs.
#[repr(transparent)]
pub struct GitRefs<'a, G>(&'a G);

impl<G> Debug for GitRefs<'_, G>
where
    G: GitLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitRefs")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, G> GitRefs<'a, G>
where
    G: GitLike,
{
    pub fn new(git: &'a G) -> Self {
        Self(git)
    }

    /// Count the commits on `left` but not `right` (ahead) and on `right` but not `left`
    /// (behind).
    ///
    /// Always asks `git`; these numbers change whenever anything is committed, fetched, or
    /// pushed.
    #[instrument(level = "trace")]
    pub fn ahead_behind(&self, left: &str, right: &str) -> miette::Result<AheadBehind> {
        let mut command = self.0.command();
        command.args([
            "rev-list",
            "--left-right",
            "--count",
            &format!("{left}...{right}"),
        ]);
        log_command(&command);
        Ok(
            command.output_checked_as(|context: OutputContext<Utf8Output>| {
                if context.status().success() {
                    let parsed = AheadBehind::parser
                        .parse(context.output().stdout.trim())
                        .map_err(|err| err.to_string());
                    parsed.map_err(|err| {
                        let err = miette!("Unexpected `git rev-list --count` output:\n{err}");
                        context.error_msg(err)
                    })
                } else {
                    Err(context.error())
                }
            })?,
        )
    }

    #[instrument(level = "trace")]
    pub fn for_each_ref(&self, globs: Option<&[&str]>) -> miette::Result<Vec<Ref>> {
        let mut command = self.0.command().tap_mut(|c| {
            c.args(["for-each-ref", "--format=%(refname)"]);
            globs.map(|globs| c.args(globs));
        });
        log_command(&command);
        command
            .output_checked_utf8()?
            .stdout
            .lines()
            .map(Ref::from_str)
            .collect()
    }
}
