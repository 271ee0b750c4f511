use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use miette::miette;
use winnow::combinator::rest;
use winnow::token::take_till;
use winnow::PResult;
use winnow::Parser;

/// A fully-qualified Git reference, like `refs/heads/puppy` or `refs/remotes/origin/puppy`.
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Ref {
    /// The ref kind; usually `heads`, `remotes`, or `tags`.
    kind: String,
    /// The ref name; everything after the kind.
    ///
    /// For remote-tracking branches this is `<remote>/<branch>`, and both of those may contain
    /// slashes, so it can't be split without asking `git config`.
    name: String,
}

impl Debug for Ref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", format!("{self:#}"))
    }
}

impl Ref {
    /// The `kind` indicating a branch reference.
    pub const HEADS: &str = "heads";

    pub fn new(kind: String, name: String) -> Self {
        Self { kind, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Determine if this is a local branch, i.e. its kind is [`Self::HEADS`].
    pub fn is_local_branch(&self) -> bool {
        self.kind == Self::HEADS
    }

    /// Parse a ref name like `refs/puppy/doggy`.
    ///
    /// Needs at least one slash after `refs/`; this does not treat `refs/puppy` as a valid ref
    /// name.
    pub fn parser(input: &mut &str) -> PResult<Self> {
        let _refs_prefix = "refs/".parse_next(input)?;

        let kind = take_till(1.., '/').parse_next(input)?;
        let _ = '/'.parse_next(input)?;
        let name = rest.parse_next(input)?;

        Ok(Self {
            kind: kind.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl FromStr for Ref {
    type Err = miette::Report;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parser.parse(input).map_err(|err| miette!("{err}"))
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "refs/{}/{}", self.kind, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ref_parse_no_slash() {
        assert!(Ref::from_str("refs/puppy").is_err());
        assert!(Ref::from_str("heads/puppy").is_err());
    }

    #[test]
    fn test_ref_parse_multiple_slashes() {
        assert_eq!(
            Ref::from_str("refs/remotes/foo/bar/more/slashes").unwrap(),
            Ref {
                kind: "remotes".into(),
                name: "foo/bar/more/slashes".into()
            }
        );
    }

    #[test]
    fn test_ref_is_local_branch() {
        assert!(Ref::from_str("refs/heads/foo/bar").unwrap().is_local_branch());
        assert!(!Ref::from_str("refs/remotes/foo/bar")
            .unwrap()
            .is_local_branch());
        assert!(!Ref::from_str("refs/tags/v1.0").unwrap().is_local_branch());
    }

    #[test]
    fn test_ref_display() {
        let ref_name = Ref::from_str("refs/heads/puppy/doggy").unwrap();
        assert_eq!(format!("{ref_name}"), "puppy/doggy");
        assert_eq!(format!("{ref_name:#}"), "refs/heads/puppy/doggy");
    }
}
