use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Placeholders recognised inside a command argument template.
///
/// Converter adapters bind `FORMAT`, `INPUT` and `OUTPUT`; comparator adapters bind
/// `FORMAT1`, `FORMAT2`, `FILE1` and `FILE2`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Token {
    Format,
    Input,
    Output,
    Format1,
    Format2,
    File1,
    File2,
}

impl Token {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Recognises a template element as a token. Anything else is a literal.
    #[must_use]
    pub fn parse(element: &str) -> Option<Self> {
        element.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn token_names_round_trip() {
        for token in Token::iter() {
            assert_eq!(Token::parse(token.as_str()), Some(token));
        }
        assert_eq!(Token::File2.as_str(), "FILE2");
        assert_eq!(Token::parse("input"), None);
        assert_eq!(Token::parse("-f"), None);
    }
}
