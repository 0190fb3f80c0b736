//! Delimiter pairs used by the wrapper operations

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed pair of opening and closing delimiters
///
/// Wrapped text is never escaped: a value containing the closing delimiter
/// is emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enclosure {
    /// `'value'`
    SingleQuote,
    /// `"value"`
    DoubleQuote,
    /// `[value]`
    SquareBracket,
    /// `{value}`
    CurlyBracket,
    /// `(value)`
    Parenthesis,
    /// `<value>`
    AngleBracket,
}

impl Enclosure {
    /// Every enclosure, in table order
    pub const ALL: [Enclosure; 6] = [
        Enclosure::SingleQuote,
        Enclosure::DoubleQuote,
        Enclosure::SquareBracket,
        Enclosure::CurlyBracket,
        Enclosure::Parenthesis,
        Enclosure::AngleBracket,
    ];

    /// Opening delimiter
    pub const fn open(self) -> char {
        match self {
            Self::SingleQuote => '\'',
            Self::DoubleQuote => '"',
            Self::SquareBracket => '[',
            Self::CurlyBracket => '{',
            Self::Parenthesis => '(',
            Self::AngleBracket => '<',
        }
    }

    /// Closing delimiter
    pub const fn close(self) -> char {
        match self {
            Self::SingleQuote => '\'',
            Self::DoubleQuote => '"',
            Self::SquareBracket => ']',
            Self::CurlyBracket => '}',
            Self::Parenthesis => ')',
            Self::AngleBracket => '>',
        }
    }

    /// Canonical snake_case name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleQuote => "single_quote",
            Self::DoubleQuote => "double_quote",
            Self::SquareBracket => "square_bracket",
            Self::CurlyBracket => "curly_bracket",
            Self::Parenthesis => "parenthesis",
            Self::AngleBracket => "angle_bracket",
        }
    }

    /// Short alias, as used by the two-letter builder methods
    pub const fn alias(self) -> &'static str {
        match self {
            Self::SingleQuote => "sq",
            Self::DoubleQuote => "dq",
            Self::SquareBracket => "sb",
            Self::CurlyBracket => "cb",
            Self::Parenthesis => "p",
            Self::AngleBracket => "ab",
        }
    }
}

impl fmt::Display for Enclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Enclosure {
    type Err = Error;

    /// Accepts the snake_case name, its kebab-case spelling, or the short alias
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");

        Self::ALL
            .into_iter()
            .find(|e| e.name() == normalized || e.alias() == normalized)
            .ok_or_else(|| Error::unknown_enclosure(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_pairs() {
        let pairs: Vec<(char, char)> = Enclosure::ALL.iter().map(|e| (e.open(), e.close())).collect();
        assert_eq!(
            pairs,
            vec![('\'', '\''), ('"', '"'), ('[', ']'), ('{', '}'), ('(', ')'), ('<', '>')]
        );
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("double_quote".parse::<Enclosure>().unwrap(), Enclosure::DoubleQuote);
        assert_eq!("square-bracket".parse::<Enclosure>().unwrap(), Enclosure::SquareBracket);
        assert_eq!("AB".parse::<Enclosure>().unwrap(), Enclosure::AngleBracket);
        assert_eq!("p".parse::<Enclosure>().unwrap(), Enclosure::Parenthesis);
        assert!("backtick".parse::<Enclosure>().is_err());
    }

    #[test]
    fn test_serialization_matches_name() {
        for enclosure in Enclosure::ALL {
            let json = serde_json::to_string(&enclosure).unwrap();
            assert_eq!(json, format!("\"{}\"", enclosure.name()));
        }
    }
}
