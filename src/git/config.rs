use std::fmt::Debug;

use command_error::CommandExt;
use command_error::OutputContext;
use tracing::instrument;
use utf8_command::Utf8Output;

use super::log_command;
use super::GitLike;

/// Git methods for dealing with config.
#[repr(transparent)]
pub struct GitConfig<'a, G>(&'a G);

impl<G> Debug for GitConfig<'_, G>
where
    G: GitLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitConfig")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, G> GitConfig<'a, G>
where
    G: GitLike,
{
    pub fn new(git: &'a G) -> Self {
        Self(git)
    }

    /// Get a config setting by name.
    #[instrument(level = "trace")]
    pub fn get(&self, key: &str) -> miette::Result<Option<String>> {
        let mut command = self.0.command();
        command.args(["config", "--null", "--get", key]);
        log_command(&command);
        Ok(
            command.output_checked_as(|context: OutputContext<Utf8Output>| {
                if context.status().success() {
                    match context.output().stdout.as_str().split_once('\0') {
                        Some((value, rest)) => {
                            if !rest.is_empty() {
                                tracing::warn!(
                                    %key,
                                    data=rest,
                                    "Trailing data in `git config` output"
                                );
                            }
                            Ok(Some(value.to_owned()))
                        }
                        None => Err(context.error_msg("Output didn't contain any null bytes")),
                    }
                } else if let Some(1) = context.status().code() {
                    // The key isn't set.
                    Ok(None)
                } else {
                    Err(context.error())
                }
            })?,
        )
    }
}
