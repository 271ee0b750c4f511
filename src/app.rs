use calm_io::stdout;
use clap::CommandFactory;
use miette::miette;
use miette::IntoDiagnostic;

use crate::cli;
use crate::cli::ConfigCommand;
use crate::cli::ConfigGenerateArgs;
use crate::cli::RepushArgs;
use crate::config::Config;
use crate::fs;
use crate::git::Git;
use crate::rename_branch::RenameBranch;
use crate::rename_branch::RenameBranchOpts;
use crate::repush::Repush;
use crate::repush::RepushOpts;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn git(&self) -> miette::Result<Git> {
        Git::from_current_dir()
    }

    pub fn run(self) -> miette::Result<()> {
        match &self.config.cli.command {
            cli::Command::RenameBranch(args) => {
                let (old, new) = args.old_and_new();
                let git = self.git()?;
                RenameBranch::new(
                    &git,
                    RenameBranchOpts {
                        old: old.map(ToOwned::to_owned),
                        new: new.to_owned(),
                    },
                )?
                .execute()?
            }
            cli::Command::Repush(args) => {
                let git = self.git()?;
                Repush::new(&git, self.repush_opts(args))?.execute()?
            }
            cli::Command::Config(ConfigCommand::Generate(args)) => {
                self.config_generate(args.to_owned())?
            }
            cli::Command::Completions { shell } => {
                let mut clap_command = cli::Cli::command();
                clap_complete::generate(*shell, &mut clap_command, "gitplus", &mut std::io::stdout());
            }
            #[cfg(feature = "clap_mangen")]
            cli::Command::Manpages { out_dir } => {
                use miette::Context;
                let clap_command = cli::Cli::command();
                clap_mangen::generate_to(clap_command, out_dir)
                    .into_diagnostic()
                    .wrap_err("Failed to generate man pages")?;
            }
        }

        Ok(())
    }

    /// Command-line flags override the configuration file.
    fn repush_opts(&self, args: &RepushArgs) -> RepushOpts {
        let config = self.config.file.repush();
        RepushOpts {
            base: args.base.clone(),
            branch: args.branch.clone(),
            max_attempts: args.attempts.unwrap_or_else(|| config.max_attempts()),
            delete_branch: !args.keep_branch && config.delete_branch(),
        }
    }

    fn config_generate(&self, args: ConfigGenerateArgs) -> miette::Result<()> {
        let path = match &args.output {
            Some(path) => {
                if path == "-" {
                    stdout!("{}", Config::DEFAULT).into_diagnostic()?;
                    return Ok(());
                } else {
                    path
                }
            }
            None => &self.config.path,
        };

        if path.exists() {
            return Err(miette!("Configuration file already exists: {path}"));
        }

        tracing::info!(%path, "Writing default configuration file");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Config::DEFAULT)?;

        Ok(())
    }
}
