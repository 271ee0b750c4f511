use std::ffi::OsStr;
use std::fmt::Debug;
use std::process::Command;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use command_error::CommandExt;
use command_error::Utf8ProgramAndArgs;
use owo_colors::OwoColorize;
use owo_colors::Stream;

mod branch;
mod config;
mod git_like;
mod head_state;
mod refs;
mod remote;
mod upstream;

pub use branch::GitBranch;
pub use config::GitConfig;
pub use git_like::GitLike;
pub use head_state::SymbolicRefFailure;
pub use refs::AheadBehind;
pub use refs::GitRefs;
pub use refs::LocalBranchRef;
pub use refs::Ref;
pub use refs::RemoteBranchRef;
pub use remote::GitRemote;
pub use upstream::UpstreamName;
pub use upstream::UpstreamSplit;

use crate::current_dir::current_dir_utf8;

/// `git` CLI wrapper.
///
/// Every `git` invocation runs in the repository directory this was constructed with, never in
/// whatever the process's current directory happens to be.
#[derive(Clone)]
pub struct Git<C = Utf8PathBuf> {
    current_dir: C,
    env_variables: Vec<(String, String)>,
}

impl<C> Debug for Git<C>
where
    C: AsRef<Utf8Path>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Git")
            .field(&self.current_dir.as_ref())
            .finish()
    }
}

impl<C> AsRef<Utf8Path> for Git<C>
where
    C: AsRef<Utf8Path>,
{
    fn as_ref(&self) -> &Utf8Path {
        self.current_dir.as_ref()
    }
}

impl<C> GitLike for Git<C>
where
    C: AsRef<Utf8Path>,
{
    type CurrentDir = C;

    fn as_git(&self) -> &Git<Self::CurrentDir> {
        self
    }

    fn get_current_dir(&self) -> &Self::CurrentDir {
        &self.current_dir
    }
}

impl Git<Utf8PathBuf> {
    pub fn from_current_dir() -> miette::Result<Self> {
        Ok(Self::from_path(current_dir_utf8()?))
    }
}

impl<C> Git<C>
where
    C: AsRef<Utf8Path>,
{
    pub fn from_path(current_dir: C) -> Self {
        Self {
            current_dir,
            env_variables: Vec::new(),
        }
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(self.current_dir.as_ref());
        command.envs(self.env_variables.iter().map(|(key, value)| (key, value)));
        command
    }

    pub fn envs(&mut self, iter: impl IntoIterator<Item = (String, String)>) {
        self.env_variables.extend(iter);
    }

    /// Run `git` with the given arguments and get its trimmed standard output.
    ///
    /// A non-zero exit status is an error which includes the command line and whatever `git`
    /// printed to stderr.
    pub fn run<I, S>(&self, args: I) -> miette::Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = self.command();
        command.args(args);
        log_command(&command);
        Ok(command.output_checked_utf8()?.stdout.trim().to_owned())
    }
}

/// Log a command before it's run. Shown with `--verbose`.
pub(crate) fn log_command(command: &Command) {
    tracing::debug!(
        "{} {}",
        '$'.if_supports_color(Stream::Stderr, |text| text.green()),
        Utf8ProgramAndArgs::from(command)
    );
}
