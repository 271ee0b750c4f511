/// Why `git symbolic-ref HEAD` failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolicRefFailure {
    /// `HEAD` isn't a symbolic ref, so no branch is checked out.
    DetachedHead,
    /// Anything else: not a repository, a corrupt `HEAD`, etc.
    Other,
}

impl SymbolicRefFailure {
    /// Classify a failed `git symbolic-ref HEAD` by its stderr.
    ///
    /// `git-symbolic-ref(1)` says a ref which isn't symbolic exits with status 1 and other errors
    /// exit with 128, but in practice both exit with 128. The error message is all we've got.
    pub fn classify(stderr: &str) -> Self {
        if stderr.contains("not a symbolic ref") {
            Self::DetachedHead
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_classify_detached() {
        assert_eq!(
            SymbolicRefFailure::classify("fatal: ref HEAD is not a symbolic ref\n"),
            SymbolicRefFailure::DetachedHead
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(
            SymbolicRefFailure::classify(
                "fatal: not a git repository (or any of the parent directories): .git\n"
            ),
            SymbolicRefFailure::Other
        );
        assert_eq!(SymbolicRefFailure::classify(""), SymbolicRefFailure::Other);
    }
}
