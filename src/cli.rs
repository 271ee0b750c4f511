use std::ffi::OsString;
use std::path::Path;

use camino::Utf8PathBuf;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// `git` exits with this status for usage errors.
pub const USAGE_EXIT_CODE: i32 = 129;

/// Subcommands which can also be run as `git <subcommand>` by linking `git-<subcommand>` to this
/// binary.
const GIT_SUBCOMMANDS: &[&str] = &["rename-branch", "repush"];

/// Multi-step Git workflows.
///
/// Link (or copy) this binary to `git-rename-branch` or `git-repush` somewhere in your `$PATH` to
/// run `git rename-branch` or `git repush` directly.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100, disable_help_subcommand = true)]
pub struct Cli {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GITPLUS_LOG")]
    pub log: String,

    /// Print each `git` command before running it.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The directory to read `config.toml` from.
    ///
    /// Defaults to `$XDG_CONFIG_HOME/gitplus`.
    #[arg(long, env = "GITPLUS_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the environment.
    ///
    /// Usage errors exit with status 129, like `git`.
    pub fn parse_env() -> Self {
        match Self::try_parse_from(args_for_invocation(std::env::args_os())) {
            Ok(cli) => cli,
            Err(err) => {
                if err.use_stderr() {
                    let _ = err.print();
                    std::process::exit(USAGE_EXIT_CODE);
                } else {
                    // `--help` or `--version`.
                    err.exit()
                }
            }
        }
    }

    /// The tracing filter to use.
    pub fn log_filter(&self) -> String {
        if self.verbose {
            format!("{},gitplus=debug", self.log)
        } else {
            self.log.clone()
        }
    }
}

/// If we were invoked as `git-repush`, pretend we were invoked as `gitplus repush`.
fn args_for_invocation(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter().collect::<Vec<_>>();

    let subcommand = args
        .first()
        .and_then(|program| Path::new(program).file_stem())
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_prefix("git-"))
        .filter(|name| GIT_SUBCOMMANDS.contains(name))
        .map(OsString::from);

    if let Some(subcommand) = subcommand {
        args.insert(1, subcommand);
    }

    args
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rename a local branch along with its remote tracking branch.
    ///
    /// The local branch is renamed with `git branch -m`. Then, if it tracks a remote branch with
    /// the same (old) name, the remote branch is deleted and the branch is pushed under its new
    /// name.
    #[command(override_usage = "gitplus rename-branch [OPTIONS] [OLD] <NEW>")]
    RenameBranch(RenameBranchArgs),

    /// Rebase a branch onto a base branch, fast-forward the base, and push both.
    ///
    /// This is the "rebase merge" workflow:
    ///
    /// 1. Pull the base branch.
    ///
    /// 2. Rebase the branch onto the base and push it.
    ///
    /// 3. Fast-forward the base to the branch and push it.
    ///
    /// 4. If that push fails (usually because somebody else pushed first), start over.
    ///
    /// 5. Delete the branch on its remote, if it tracks a remote branch of the same name, and
    ///    then locally.
    ///
    /// Typically the base branch is the main branch and the repushed branch is a feature branch.
    Repush(RepushArgs),

    /// Manage configuration.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::shells::Shell,
    },

    /// Generate man pages.
    #[cfg(feature = "clap_mangen")]
    Manpages {
        /// Directory to write man pages to.
        out_dir: camino::Utf8PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RenameBranchArgs {
    /// The branch to rename, or the new name for the checked-out branch if it's the only name
    /// given.
    #[arg(value_name = "OLD")]
    first: String,

    /// The new branch name.
    #[arg(value_name = "NEW")]
    second: Option<String>,
}

impl RenameBranchArgs {
    /// The branch to rename (if given) and its new name.
    pub fn old_and_new(&self) -> (Option<&str>, &str) {
        match &self.second {
            Some(new) => (Some(self.first.as_str()), new.as_str()),
            None => (None, self.first.as_str()),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RepushArgs {
    /// The branch to fast-forward and push, usually the main branch.
    pub base: String,

    /// The branch to rebase onto the base. It's checked out first.
    ///
    /// Defaults to the checked-out branch.
    pub branch: Option<String>,

    /// How many times to try before giving up on pushing the base branch.
    ///
    /// Defaults to `repush.max_attempts` in the configuration file, or 3.
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Don't delete the branch after pushing the base branch.
    #[arg(long)]
    pub keep_branch: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration file.
    Generate(ConfigGenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConfigGenerateArgs {
    /// The path to write the configuration file to, or `-` for stdout.
    ///
    /// Defaults to `$XDG_CONFIG_HOME/gitplus/config.toml`.
    pub output: Option<Utf8PathBuf>,
}
