//! Error types for host address parsing.

use std::fmt;

/// Errors that can occur when parsing a host address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddressError {
    /// The complete text handed to the parser
    pub input: String,
    /// The specific error that occurred
    pub kind: HostAddressErrorKind,
}

/// Specific host address error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAddressErrorKind {
    /// Host exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Character not permitted by any interpretation
    InvalidCharacter {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Numeric value out of range (octet above 255, group with 5+ digits)
    InvalidValue {
        /// Position in the input where the value starts
        position: usize,
    },
    /// A label or digit run exceeds 63 characters
    InvalidLength {
        /// Position in the input where the run starts
        position: usize,
    },
    /// Input ended in the middle of an address
    Incomplete,
    /// Input resembles an IPv4 address but is not one
    ///
    /// Only reported when no interpretation got further; parsing a host
    /// currently always yields a more precise kind.
    ProbablyIp4,
    /// Input resembles an IPv6 address but is not one
    ///
    /// Reserved in the same way as [`Self::ProbablyIp4`].
    ProbablyIp6,
    /// Opening bracket without closing bracket
    MissingClosingBracket,
    /// Brackets around a host that may not be bracketed in this context
    UnexpectedBrackets,
    /// Offset lies outside the input or inside a multi-byte character
    InvalidOffset {
        /// The requested offset
        offset: usize,
    },
    /// Host parsed, but as a different kind than required
    UnexpectedKind {
        /// Description of the required kind
        expected: &'static str,
    },
}

impl HostAddressError {
    pub(crate) fn new(input: &str, kind: HostAddressErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the input position the error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self.kind {
            HostAddressErrorKind::InvalidCharacter { position, .. }
            | HostAddressErrorKind::InvalidValue { position }
            | HostAddressErrorKind::InvalidLength { position } => Some(position),
            _ => None,
        }
    }
}

impl fmt::Display for HostAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = &self.input;
        match &self.kind {
            HostAddressErrorKind::TooLong { .. } => write!(f, "Host is too long={input:?}"),
            HostAddressErrorKind::InvalidCharacter { char, position } => write!(
                f,
                "Host contains invalid character '{}' at {position}",
                char.escape_debug()
            ),
            HostAddressErrorKind::InvalidValue { position } => {
                write!(f, "Host contains invalid value at {position}")
            }
            HostAddressErrorKind::InvalidLength { .. } => {
                write!(f, "Host label is too long={input:?}")
            }
            HostAddressErrorKind::Incomplete => write!(f, "Host is incomplete={input:?}"),
            HostAddressErrorKind::ProbablyIp4 => {
                write!(f, "Host is not a valid IPv4 address={input:?}")
            }
            HostAddressErrorKind::ProbablyIp6 => {
                write!(f, "Host is not a valid IPv6 address={input:?}")
            }
            HostAddressErrorKind::MissingClosingBracket => {
                write!(f, "Host is missing closing bracket={input:?}")
            }
            HostAddressErrorKind::UnexpectedBrackets => {
                write!(f, "Host must not be enclosed in brackets={input:?}")
            }
            HostAddressErrorKind::InvalidOffset { offset } => {
                write!(f, "Host offset {offset} is out of range={input:?}")
            }
            HostAddressErrorKind::UnexpectedKind { expected } => {
                write!(f, "Host is not {expected}={input:?}")
            }
        }
    }
}

impl std::error::Error for HostAddressError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_message() {
        let err = HostAddressError::new(
            "good--",
            HostAddressErrorKind::InvalidCharacter {
                char: '-',
                position: 5,
            },
        );
        assert_eq!(err.to_string(), "Host contains invalid character '-' at 5");
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn control_character_is_escaped() {
        let err = HostAddressError::new(
            "a\nb",
            HostAddressErrorKind::InvalidCharacter {
                char: '\n',
                position: 1,
            },
        );
        assert_eq!(err.to_string(), "Host contains invalid character '\\n' at 1");
    }

    #[test]
    fn incomplete_message_quotes_input() {
        let err = HostAddressError::new("1.2.3", HostAddressErrorKind::Incomplete);
        assert_eq!(err.to_string(), "Host is incomplete=\"1.2.3\"");
        assert_eq!(err.position(), None);
    }

    #[test]
    fn quoted_input_is_escaped() {
        let err = HostAddressError::new("a\"b", HostAddressErrorKind::ProbablyIp6);
        assert_eq!(err.to_string(), "Host is not a valid IPv6 address=\"a\\\"b\"");
    }

    #[test]
    fn invalid_value_message() {
        let err =
            HostAddressError::new("1.2.3.256", HostAddressErrorKind::InvalidValue { position: 6 });
        assert_eq!(err.to_string(), "Host contains invalid value at 6");
    }
}
