use camino::Utf8PathBuf;
use miette::Context;
use miette::IntoDiagnostic;

pub fn current_dir_utf8() -> miette::Result<Utf8PathBuf> {
    let current_dir = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("Failed to get current directory")?;
    Utf8PathBuf::try_from(current_dir)
        .into_diagnostic()
        .wrap_err("Current directory is not valid UTF-8")
}
