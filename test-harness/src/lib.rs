use std::ffi::OsString;
use std::process::Command;

use camino::Utf8PathBuf;
use clonable_command::Command as ClonableCommand;
use command_error::CommandExt;
use fs_err as fs;
use gitplus::Git;
use gitplus::Utf8TempDir;
use itertools::Itertools;
use miette::Context;
use miette::IntoDiagnostic;

mod helpers;
mod repo_state;

pub use helpers::*;
pub use repo_state::BranchState;
pub use repo_state::RepoState;

/// `gitplus` session for integration testing.
pub struct GitPlus {
    command: ClonableCommand,
    tempdir: Utf8TempDir,
    gitplus: OsString,
    gitplus_args: Vec<String>,
}

impl GitPlus {
    pub fn new() -> miette::Result<Self> {
        let tempdir = Utf8TempDir::with_prefix("gitplus-test-")?;

        let gitconfig = tempdir.join(".gitconfig");
        fs::write(
            &gitconfig,
            "[user]\n\
            name = Puppy Doggy\n\
            email = dog@becca.ooo\n\
            \n\
            [init]\n\
            defaultBranch = main\n\
            \n\
            [advice]\n\
            detachedHead = false\n\
            ",
        )
        .into_diagnostic()?;

        let config_home = tempdir.join(".config");

        let gitplus = test_bin::get_test_bin("gitplus").get_program().to_owned();

        let log_filters = ["debug", "gitplus=debug", "gitplus::git=trace"]
            .into_iter()
            .join(",");

        let gitplus_args = vec!["--log".to_owned(), log_filters];

        let command = ClonableCommand::new("")
            .envs([
                // > Whether to skip reading settings from the system-wide $(prefix)/etc/gitconfig file.
                ("GIT_CONFIG_NOSYSTEM", "1"),
                ("GIT_CONFIG_GLOBAL", gitconfig.as_str()),
                ("GIT_AUTHOR_DATE", "2019-07-06T18:25:00-0700"),
                ("GIT_COMMITTER_DATE", "2019-07-06T18:25:00-0700"),
                ("HOME", tempdir.as_str()),
                ("XDG_CONFIG_HOME", config_home.as_str()),
            ])
            .current_dir(&tempdir);

        Ok(Self {
            gitplus,
            gitplus_args,
            command,
            tempdir,
        })
    }

    fn any_command(&self, program: &str) -> Command {
        let mut command = self.command.clone();
        command.name = program.into();
        command.to_std()
    }

    pub fn cmd(&self) -> Command {
        let mut command = self.command.clone();
        command.name = self.gitplus.clone();
        command = command.args(&self.gitplus_args);
        command.to_std()
    }

    /// Like [`GitPlus::cd_cmd`], but without the `--log` filters, so the default log level
    /// and `--verbose` apply.
    #[track_caller]
    pub fn cd_cmd_default_log(&self, current_dir: &str) -> Command {
        let path = self.path(current_dir);
        if !path.exists() {
            panic!("A test requested a command to run in a nonexistent path: {current_dir}");
        }
        let mut command = self.command.clone();
        command.name = self.gitplus.clone();
        let mut command = command.to_std();
        command.env_remove("GITPLUS_LOG").current_dir(path);
        command
    }

    #[track_caller]
    pub fn cd_cmd(&self, current_dir: &str) -> Command {
        let path = self.path(current_dir);
        if !path.exists() {
            panic!("A test requested a command to run in a nonexistent path: {current_dir}");
        }
        let mut command = self.cmd();
        command.current_dir(path);
        command
    }

    pub fn path(&self, tail: &str) -> Utf8PathBuf {
        self.tempdir.join(tail)
    }

    pub fn sh(&self, script: &str) -> miette::Result<()> {
        let tempfile = tempfile::NamedTempFile::new().into_diagnostic()?;
        fs::write(
            &tempfile,
            format!(
                "set -ex\n\
                {script}"
            ),
        )
        .into_diagnostic()?;
        self.any_command("bash")
            .arg("--norc")
            .arg(tempfile.as_ref())
            .status_checked()
            .into_diagnostic()?;
        Ok(())
    }

    #[track_caller]
    pub fn git(&self, directory: &str) -> Git {
        let path = self.path(directory);
        if !path.exists() {
            panic!("A test requested a Git interface for a nonexistent path: {directory}");
        }
        let mut git = Git::from_path(path);
        git.envs(self.command.environment.iter().filter_map(|(key, value)| {
            value.as_ref().map(|value| {
                (
                    key.to_owned().into_string().unwrap(),
                    value.to_owned().into_string().unwrap(),
                )
            })
        }));
        git
    }

    /// Set up a new repository in `path` with a single commit on `main`.
    pub fn setup_repo(&self, path: &str) -> miette::Result<Utf8PathBuf> {
        let path = self.path(path);
        let path_quoted = shell_words::quote(path.as_str());
        self.sh(&format!(
            r#"
            mkdir -p {path_quoted}
            cd {path_quoted} || exit
            git init
            echo "puppy doggy" > README.md
            git add .
            git commit -m "Initial commit"
            "#
        ))?;
        Ok(path)
    }

    /// Set up a new repository in `repo` whose `main` branch tracks `origin/main`, where
    /// `origin` is a new bare repository in `remote`.
    pub fn setup_repo_with_remote(&self, remote: &str, repo: &str) -> miette::Result<()> {
        self.setup_repo_with_named_remote(remote, repo, "origin")
    }

    /// Like [`GitPlus::setup_repo_with_remote`], but the remote is called `remote_name`.
    pub fn setup_repo_with_named_remote(
        &self,
        remote: &str,
        repo: &str,
        remote_name: &str,
    ) -> miette::Result<()> {
        let repo_path = self.setup_repo(repo)?;
        let remote_quoted = shell_words::quote(self.path(remote).as_str()).into_owned();
        let repo_quoted = shell_words::quote(repo_path.as_str()).into_owned();
        let remote_name_quoted = shell_words::quote(remote_name).into_owned();
        self.sh(&format!(
            r#"
            git init --bare {remote_quoted}
            cd {repo_quoted} || exit
            git remote add {remote_name_quoted} {remote_quoted}
            git push --set-upstream {remote_name_quoted} main
            "#
        ))
        .wrap_err_with(|| format!("Failed to set up {repo} with remote {remote}"))
    }

    /// Create `branch` in `repo` from the checked-out commit, add a commit to it, and push it
    /// to `origin` so that it tracks `origin/<branch>`.
    pub fn setup_pushed_branch(&self, repo: &str, branch: &str) -> miette::Result<()> {
        let repo_quoted = shell_words::quote(self.path(repo).as_str()).into_owned();
        let branch_quoted = shell_words::quote(branch).into_owned();
        self.sh(&format!(
            r#"
            cd {repo_quoted} || exit
            git switch --create {branch_quoted}
            echo {branch_quoted} > {branch_file}
            git add .
            git commit -m "Work on "{branch_quoted}
            git push --set-upstream origin {branch_quoted}
            "#,
            branch_file = shell_words::quote(&branch.replace('/', "-")),
        ))
        .wrap_err_with(|| format!("Failed to set up branch {branch} in {repo}"))
    }

    pub fn write_config(&self, contents: &str) -> miette::Result<()> {
        fs::create_dir_all(self.path(".config/gitplus")).into_diagnostic()?;
        fs::write(self.path(".config/gitplus/config.toml"), contents)
            .into_diagnostic()
            .wrap_err("Failed to write `gitplus` configuration")?;
        Ok(())
    }

    /// Construct a repository state which a real repository can be checked against.
    pub fn repo_state(&self, root: &str) -> RepoState {
        RepoState::new(self.git(root))
    }
}
