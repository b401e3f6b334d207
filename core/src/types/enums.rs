use crate::error::FeretError;
use std::fmt;
use std::str::FromStr;

/// Tri-state inclusion rule for a boolean image attribute
///
/// `Any` ignores the attribute, `Yes` requires it, `No` excludes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Inclusion {
    #[default]
    Any,
    Yes,
    No,
}

impl Inclusion {
    /// Checks whether an attribute value passes this rule
    pub fn accepts(&self, value: bool) -> bool {
        match self {
            Inclusion::Any => true,
            Inclusion::Yes => value,
            Inclusion::No => !value,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Inclusion::Any => "any",
            Inclusion::Yes => "yes",
            Inclusion::No => "no",
        }
    }
}

/// Parses `any`, `yes` or `no`; matching is case-sensitive
impl FromStr for Inclusion {
    type Err = FeretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Inclusion::Any),
            "yes" => Ok(Inclusion::Yes),
            "no" => Ok(Inclusion::No),
            other => Err(FeretError::InvalidInclusion(other.to_string())),
        }
    }
}

impl fmt::Display for Inclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_accepts() {
        assert!(Inclusion::Any.accepts(true));
        assert!(Inclusion::Any.accepts(false));
        assert!(Inclusion::Yes.accepts(true));
        assert!(!Inclusion::Yes.accepts(false));
        assert!(!Inclusion::No.accepts(true));
        assert!(Inclusion::No.accepts(false));
    }

    #[rstest]
    #[case("any", Inclusion::Any)]
    #[case("yes", Inclusion::Yes)]
    #[case("no", Inclusion::No)]
    fn test_parse_valid(#[case] text: &str, #[case] expected: Inclusion) {
        assert_eq!(text.parse::<Inclusion>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[rstest]
    #[case("maybe")]
    #[case("Yes")]
    #[case("ANY")]
    #[case("")]
    fn test_parse_invalid(#[case] text: &str) {
        assert!(matches!(
            text.parse::<Inclusion>(),
            Err(FeretError::InvalidInclusion(_))
        ));
    }

    #[test]
    fn test_default_is_any() {
        assert_eq!(Inclusion::default(), Inclusion::Any);
    }
}
