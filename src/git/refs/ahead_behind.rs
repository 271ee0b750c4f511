use winnow::ascii::dec_uint;
use winnow::combinator::separated_pair;
use winnow::PResult;
use winnow::Parser;

/// How far two refs have diverged from their merge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AheadBehind {
    /// Commits only on the left ref.
    pub ahead: u32,
    /// Commits only on the right ref.
    pub behind: u32,
}

impl AheadBehind {
    /// Parse `git rev-list --left-right --count` output, like `3\t0`.
    pub fn parser(input: &mut &str) -> PResult<Self> {
        separated_pair(dec_uint, '\t', dec_uint)
            .map(|(ahead, behind)| Self { ahead, behind })
            .parse_next(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_ahead_behind() {
        assert_eq!(
            AheadBehind::parser.parse("3\t0").unwrap(),
            AheadBehind {
                ahead: 3,
                behind: 0
            }
        );
        assert_eq!(
            AheadBehind::parser.parse("0\t12").unwrap(),
            AheadBehind {
                ahead: 0,
                behind: 12
            }
        );
    }

    #[test]
    fn test_parse_ahead_behind_no_tab() {
        assert!(AheadBehind::parser.parse("3 0").is_err());
        assert!(AheadBehind::parser.parse("3").is_err());
    }

    #[test]
    fn test_parse_ahead_behind_not_numbers() {
        assert!(AheadBehind::parser.parse("three\t0").is_err());
        assert!(AheadBehind::parser.parse("3\t-1").is_err());
        assert!(AheadBehind::parser.parse("\t").is_err());
    }

    #[test]
    fn test_parse_ahead_behind_trailing_data() {
        assert!(AheadBehind::parser.parse("3\t0\t1").is_err());
    }
}
