use camino::Utf8Path;
use camino::Utf8PathBuf;
use miette::Context;
use miette::IntoDiagnostic;
use serde::Deserialize;
use xdg::BaseDirectories;

use crate::cli::Cli;
use crate::fs;
use crate::install_tracing::install_tracing;

/// Configuration, both from the command-line and a user configuration file.
#[derive(Debug)]
pub struct Config {
    /// User configuration file.
    pub file: ConfigFile,
    /// User configuration file path.
    pub path: Utf8PathBuf,
    /// Command-line options.
    pub cli: Cli,
}

impl Config {
    /// The contents of the default configuration file.
    pub const DEFAULT: &str = include_str!("../config.toml");

    pub fn new() -> miette::Result<Self> {
        let cli = Cli::parse_env();
        install_tracing(&cli.log_filter())?;
        const CONFIG_FILE_NAME: &str = "config.toml";
        let path = match &cli.config {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => {
                let dirs = BaseDirectories::with_prefix("gitplus").into_diagnostic()?;
                Utf8PathBuf::try_from(dirs.get_config_file(CONFIG_FILE_NAME))
                    .into_diagnostic()
                    .wrap_err("Configuration file path is not valid UTF-8")?
            }
        };
        let file = ConfigFile::read(&path)?;
        Ok(Self { file, path, cli })
    }
}

/// Configuration file format.
///
/// Every key is optional. Missing keys (or a missing file) get the defaults in
/// [`Config::DEFAULT`].
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    repush: RepushConfig,
}

impl ConfigFile {
    fn read(path: &Utf8Path) -> miette::Result<Self> {
        if !path.exists() {
            tracing::trace!(%path, "No configuration file");
            return Ok(Self::default());
        }

        toml::from_str(&fs::read_to_string(path).wrap_err("Failed to read configuration file")?)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to deserialize configuration file {path}"))
    }

    pub fn repush(&self) -> &RepushConfig {
        &self.repush
    }
}

/// The `[repush]` table.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RepushConfig {
    #[serde(default)]
    max_attempts: Option<u32>,

    #[serde(default)]
    delete_branch: Option<bool>,
}

impl RepushConfig {
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.unwrap_or(3)
    }

    pub fn delete_branch(&self) -> bool {
        self.delete_branch.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_file_parse() {
        assert_eq!(
            toml::from_str::<ConfigFile>(Config::DEFAULT).unwrap(),
            ConfigFile {
                repush: RepushConfig {
                    max_attempts: Some(3),
                    delete_branch: Some(true),
                },
            }
        );
    }

    #[test]
    fn test_empty_config_file_defaults() {
        let file = toml::from_str::<ConfigFile>("").unwrap();
        assert_eq!(file.repush().max_attempts(), 3);
        assert!(file.repush().delete_branch());
    }

    #[test]
    fn test_config_file_partial() {
        let file = toml::from_str::<ConfigFile>(indoc!(
            "
            [repush]
            max_attempts = 7
            "
        ))
        .unwrap();
        assert_eq!(file.repush().max_attempts(), 7);
        assert!(file.repush().delete_branch());
    }

    #[test]
    fn test_config_file_unknown_type() {
        assert!(toml::from_str::<ConfigFile>(indoc!(
            "
            [repush]
            max_attempts = \"lots\"
            "
        ))
        .is_err());
    }
}
