use std::process::Command;

use camino::Utf8Path;

use super::Git;
use super::GitBranch;
use super::GitConfig;
use super::GitRefs;
use super::GitRemote;

pub trait GitLike: Sized {
    type CurrentDir: AsRef<Utf8Path>;

    fn as_git(&self) -> &Git<Self::CurrentDir>;

    #[inline]
    fn get_current_dir(&self) -> &Self::CurrentDir {
        self.as_git().get_current_dir()
    }

    /// Get a `git` command.
    #[inline]
    fn command(&self) -> Command {
        self.as_git().command()
    }

    /// Run a `git` command and get its trimmed output.
    #[inline]
    fn run<'s>(&self, args: impl IntoIterator<Item = &'s str>) -> miette::Result<String> {
        self.as_git().run(args)
    }

    /// Methods for dealing with Git remotes.
    #[inline]
    fn remote(&self) -> GitRemote<'_, Self> {
        GitRemote::new(self)
    }

    /// Methods for dealing with Git refs.
    #[inline]
    fn refs(&self) -> GitRefs<'_, Self> {
        GitRefs::new(self)
    }

    /// Methods for dealing with Git config.
    #[inline]
    fn config(&self) -> GitConfig<'_, Self> {
        GitConfig::new(self)
    }

    /// Methods for dealing with Git branches.
    #[inline]
    fn branch(&self) -> GitBranch<'_, Self> {
        GitBranch::new(self)
    }
}
