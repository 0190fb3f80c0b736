//! Error types for the SBB core library
//!
//! The builder itself never fails: absent values are skipped and everything
//! else is converted through its `Display` implementation. These errors only
//! surface through the `try_*` operations and through parsing of
//! [`Enclosure`](crate::Enclosure) names.

use std::fmt;
use thiserror::Error;

/// Main error type for SBB operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value's `Display` implementation reported an error
    #[error("Formatting failed: {message}")]
    Format {
        message: String,
        #[source]
        source: fmt::Error,
    },

    /// An enclosure name did not match any known delimiter pair
    #[error("Unknown enclosure: '{name}' (expected one of: {expected})")]
    UnknownEnclosure {
        name: String,
        expected: String,
    },
}

/// Result type alias for SBB operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a formatting error
    pub fn format(message: impl Into<String>, source: fmt::Error) -> Self {
        Self::Format {
            message: message.into(),
            source,
        }
    }

    /// Create an unknown-enclosure error listing the accepted names
    pub fn unknown_enclosure(name: impl Into<String>) -> Self {
        let expected = crate::Enclosure::ALL
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ");

        Self::UnknownEnclosure {
            name: name.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_format_error_display() {
        let err = Error::format("value could not be rendered", fmt::Error);
        assert_eq!(err.to_string(), "Formatting failed: value could not be rendered");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_enclosure_lists_names() {
        let err = Error::unknown_enclosure("backtick");
        let message = err.to_string();
        assert!(message.contains("'backtick'"));
        assert!(message.contains("double_quote"));
        assert!(message.contains("angle_bracket"));
    }
}
