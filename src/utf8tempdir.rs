use std::ops::Deref;
use std::path::Path;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use miette::Context;
use miette::IntoDiagnostic;
use tempfile::TempDir;

/// A temporary directory with a UTF-8 path, deleted when dropped.
#[derive(Debug)]
pub struct Utf8TempDir {
    // Held so the directory isn't deleted early.
    _inner: TempDir,
    path: Utf8PathBuf,
}

impl Utf8TempDir {
    /// Create a temporary directory whose name starts with `prefix`.
    pub fn with_prefix(prefix: &str) -> miette::Result<Self> {
        let inner = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .into_diagnostic()
            .wrap_err("Failed to create temporary directory")?;
        let path = Utf8PathBuf::try_from(inner.path().to_owned())
            .into_diagnostic()
            .wrap_err("Temporary directory path is not valid UTF-8")?;
        Ok(Self {
            _inner: inner,
            path,
        })
    }
}

impl Deref for Utf8TempDir {
    type Target = Utf8Path;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl AsRef<Path> for Utf8TempDir {
    fn as_ref(&self) -> &Path {
        self.path.as_std_path()
    }
}
