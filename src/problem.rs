//! Scan problems produced while trying one host interpretation.
//!
//! A problem is transient: each scanner returns at most one, and the
//! orchestrator either discards it (another interpretation succeeded) or
//! turns the winning one into a [`HostAddressError`].

use crate::error::{HostAddressError, HostAddressErrorKind};

/// Why one interpretation of a host failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostAddressProblem {
    /// Character at the position is not allowed here.
    InvalidCharacter(usize),
    /// Label or digit run starting at the position is too long.
    InvalidLength(usize),
    /// Numeric value starting at the position is out of range.
    InvalidValue(usize),
    /// Input ended before the structure was complete.
    Incomplete,
    /// Looks like an IPv4 address rather than this interpretation.
    ProbablyIp4,
    /// Looks like an IPv6 address rather than this interpretation.
    ProbablyIp6,
}

impl HostAddressProblem {
    /// Whether the orchestrator must report this problem without trying
    /// the remaining interpretations.
    pub(crate) const fn stop_trying(self) -> bool {
        matches!(self, Self::InvalidLength(_))
    }

    /// Rank used to pick one problem when every interpretation failed.
    ///
    /// Positional problems rank by how far the scanner got, running out of
    /// input outranks them all, and the soft signals rank lowest.
    pub(crate) fn priority(self) -> i64 {
        match self {
            Self::InvalidCharacter(at) | Self::InvalidLength(at) | Self::InvalidValue(at) => {
                i64::try_from(at).unwrap_or(i64::MAX - 1)
            }
            Self::Incomplete => i64::MAX,
            Self::ProbablyIp4 | Self::ProbablyIp6 => i64::MIN,
        }
    }

    /// Selects the problem to report: highest priority, earliest on ties.
    pub(crate) fn select(problems: [Self; 3]) -> Self {
        let [first, rest @ ..] = problems;
        rest.into_iter().fold(first, |best, candidate| {
            if candidate.priority() > best.priority() {
                candidate
            } else {
                best
            }
        })
    }

    /// Converts the problem into the public error for `input`.
    pub(crate) fn into_error(self, input: &str) -> HostAddressError {
        let kind = match self {
            Self::InvalidCharacter(position) => HostAddressErrorKind::InvalidCharacter {
                char: input
                    .get(position..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                position,
            },
            Self::InvalidLength(position) => HostAddressErrorKind::InvalidLength { position },
            Self::InvalidValue(position) => HostAddressErrorKind::InvalidValue { position },
            Self::Incomplete => HostAddressErrorKind::Incomplete,
            Self::ProbablyIp4 => HostAddressErrorKind::ProbablyIp4,
            Self::ProbablyIp6 => HostAddressErrorKind::ProbablyIp6,
        };
        HostAddressError::new(input, kind)
    }
}

/// Fails with [`HostAddressProblem::InvalidLength`] once the run
/// `start..end` exceeds the label limit.
pub(crate) fn check_length(start: usize, end: usize) -> Result<(), HostAddressProblem> {
    if end - start > crate::constants::MAX_LABEL_LENGTH {
        Err(HostAddressProblem::InvalidLength(start))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_length_stops() {
        assert!(HostAddressProblem::InvalidLength(0).stop_trying());
        assert!(!HostAddressProblem::InvalidCharacter(0).stop_trying());
        assert!(!HostAddressProblem::InvalidValue(0).stop_trying());
        assert!(!HostAddressProblem::Incomplete.stop_trying());
        assert!(!HostAddressProblem::ProbablyIp4.stop_trying());
        assert!(!HostAddressProblem::ProbablyIp6.stop_trying());
    }

    #[test]
    fn select_prefers_furthest_position() {
        let chosen = HostAddressProblem::select([
            HostAddressProblem::ProbablyIp4,
            HostAddressProblem::InvalidValue(6),
            HostAddressProblem::InvalidCharacter(1),
        ]);
        assert_eq!(chosen, HostAddressProblem::InvalidValue(6));
    }

    #[test]
    fn select_breaks_ties_by_scan_order() {
        let chosen = HostAddressProblem::select([
            HostAddressProblem::InvalidCharacter(5),
            HostAddressProblem::InvalidValue(5),
            HostAddressProblem::InvalidCharacter(0),
        ]);
        assert_eq!(chosen, HostAddressProblem::InvalidCharacter(5));
    }

    #[test]
    fn incomplete_beats_positions() {
        let chosen = HostAddressProblem::select([
            HostAddressProblem::ProbablyIp4,
            HostAddressProblem::InvalidCharacter(40),
            HostAddressProblem::Incomplete,
        ]);
        assert_eq!(chosen, HostAddressProblem::Incomplete);
    }

    #[test]
    fn soft_signals_survive_only_alone() {
        let chosen = HostAddressProblem::select([
            HostAddressProblem::ProbablyIp6,
            HostAddressProblem::ProbablyIp6,
            HostAddressProblem::ProbablyIp4,
        ]);
        assert_eq!(chosen, HostAddressProblem::ProbablyIp6);
    }

    #[test]
    fn soft_signals_convert_to_errors() {
        let err = HostAddressProblem::ProbablyIp4.into_error("1.2");
        assert_eq!(err.kind, HostAddressErrorKind::ProbablyIp4);
        assert_eq!(err.to_string(), "Host is not a valid IPv4 address=\"1.2\"");
        assert_eq!(err.position(), None);

        let err = HostAddressProblem::ProbablyIp6.into_error("fe80:");
        assert_eq!(err.kind, HostAddressErrorKind::ProbablyIp6);
        assert_eq!(err.to_string(), "Host is not a valid IPv6 address=\"fe80:\"");
    }

    #[test]
    fn invalid_character_decodes_offending_char() {
        let err = HostAddressProblem::InvalidCharacter(2).into_error("ab\u{e9}");
        assert_eq!(
            err.kind,
            HostAddressErrorKind::InvalidCharacter {
                char: '\u{e9}',
                position: 2
            }
        );
    }

    #[test]
    fn check_length_boundary() {
        assert!(check_length(0, 63).is_ok());
        assert_eq!(check_length(3, 67), Err(HostAddressProblem::InvalidLength(3)));
    }
}
