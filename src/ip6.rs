//! IPv6 scanner.
//!
//! Accepts the RFC 4291 text forms: eight colon-separated groups of up to
//! four hex digits, a single `::` standing for one or more zero groups, and
//! an optional dotted-quad tail in place of the last two groups.
//!
//! Groups after `::` are written flush against the end of the address;
//! each new group shifts the ones already written after the gap one slot
//! to the left, so the gap keeps its zeros.

use crate::constants::{IP6_GROUP_COUNT, IP6_LENGTH, MAX_GROUP_DIGITS, MAX_GROUPS_BEFORE_IP4};
use crate::ip4::try_parse_ip4;
use crate::problem::HostAddressProblem;

struct Groups {
    values: [u8; IP6_LENGTH],
    /// Completed groups.
    count: usize,
    /// Group index where `::` occurred.
    empty_group_at: Option<usize>,
}

impl Groups {
    const fn new() -> Self {
        Self {
            values: [0; IP6_LENGTH],
            count: 0,
            empty_group_at: None,
        }
    }

    /// Most groups that may be written explicitly.
    const fn capacity(&self) -> usize {
        if self.empty_group_at.is_some() {
            IP6_GROUP_COUNT - 1
        } else {
            IP6_GROUP_COUNT
        }
    }

    fn push(&mut self, group: u16) {
        let at = match self.empty_group_at {
            None => self.count * 2,
            Some(empty_at) => {
                let tail = (self.count - empty_at) * 2;
                self.values
                    .copy_within(IP6_LENGTH - tail..IP6_LENGTH, IP6_LENGTH - tail - 2);
                IP6_LENGTH - 2
            }
        };
        self.values[at..at + 2].copy_from_slice(&group.to_be_bytes());
        self.count += 1;
    }
}

/// Scans `text[start..end]` as an IPv6 address in network byte order.
pub(crate) fn try_parse_ip6(
    text: &[u8],
    start: usize,
    end: usize,
) -> Result<[u8; IP6_LENGTH], HostAddressProblem> {
    if start >= end {
        return Err(HostAddressProblem::Incomplete);
    }

    let last = end - 1;
    let mut groups = Groups::new();
    let mut group_digits = 0;
    let mut group_value: u16 = 0;

    for (i, &c) in text.iter().enumerate().take(end).skip(start) {
        match c {
            b':' if i == start => {
                if i == last || text[i + 1] != b':' {
                    return Err(HostAddressProblem::InvalidCharacter(i));
                }
            }
            b':' if group_digits == 0 => {
                if groups.empty_group_at.is_some() {
                    return Err(HostAddressProblem::InvalidCharacter(i));
                }
                groups.empty_group_at = Some(groups.count);
            }
            b':' => {
                if i == last {
                    return Err(HostAddressProblem::Incomplete);
                }
                // Another group must follow this one.
                if groups.count + 2 > groups.capacity() {
                    return Err(HostAddressProblem::InvalidCharacter(i));
                }
                groups.push(group_value);
                group_digits = 0;
                group_value = 0;
            }
            b'.' => {
                let allowed = match groups.empty_group_at {
                    None => groups.count == MAX_GROUPS_BEFORE_IP4,
                    Some(_) => groups.count + 2 <= groups.capacity(),
                };
                if !allowed {
                    return Err(HostAddressProblem::InvalidCharacter(i));
                }
                let ip4 = try_parse_ip4(text, i - group_digits, end, true)?;
                let [a, b, c, d] = ip4.to_be_bytes();
                groups.push(u16::from_be_bytes([a, b]));
                groups.push(u16::from_be_bytes([c, d]));
                return Ok(groups.values);
            }
            _ => {
                let digit = char::from(c)
                    .to_digit(16)
                    .ok_or(HostAddressProblem::InvalidCharacter(i))?;
                if group_digits == MAX_GROUP_DIGITS {
                    return Err(HostAddressProblem::InvalidValue(i - MAX_GROUP_DIGITS));
                }
                // At most four hex digits, so the value always fits.
                group_value = (group_value << 4) | u16::try_from(digit).unwrap_or(0);
                group_digits += 1;

                if i == last {
                    if groups.empty_group_at.is_none() && groups.count + 1 != IP6_GROUP_COUNT {
                        return Err(HostAddressProblem::Incomplete);
                    }
                    if groups.count + 1 > groups.capacity() {
                        return Err(HostAddressProblem::InvalidCharacter(i + 1 - group_digits));
                    }
                    groups.push(group_value);
                }
            }
        }
    }

    Ok(groups.values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip6(s: &str) -> Result<[u8; IP6_LENGTH], HostAddressProblem> {
        try_parse_ip6(s.as_bytes(), 0, s.len())
    }

    fn groups(g: [u16; 8]) -> [u8; IP6_LENGTH] {
        let mut out = [0; IP6_LENGTH];
        for (i, v) in g.iter().enumerate() {
            out[i * 2..i * 2 + 2].copy_from_slice(&v.to_be_bytes());
        }
        out
    }

    #[test]
    fn full_form() {
        assert_eq!(ip6("1:2:3:4:5:6:7:8"), Ok(groups([1, 2, 3, 4, 5, 6, 7, 8])));
        assert_eq!(
            ip6("2001:0DB8:85a3:0000:0000:8A2E:0370:7334"),
            Ok(groups([0x2001, 0xdb8, 0x85a3, 0, 0, 0x8a2e, 0x370, 0x7334]))
        );
    }

    #[test]
    fn compression_positions() {
        assert_eq!(ip6("::"), Ok([0; 16]));
        assert_eq!(ip6("::1"), Ok(groups([0, 0, 0, 0, 0, 0, 0, 1])));
        assert_eq!(ip6("1::"), Ok(groups([1, 0, 0, 0, 0, 0, 0, 0])));
        assert_eq!(ip6("1:2::3:4"), Ok(groups([1, 2, 0, 0, 0, 0, 3, 4])));
        assert_eq!(ip6("1::2:3:4:5:6:7"), Ok(groups([1, 0, 2, 3, 4, 5, 6, 7])));
        assert_eq!(ip6("1:2:3:4:5:6:7::"), Ok(groups([1, 2, 3, 4, 5, 6, 7, 0])));
        assert_eq!(ip6("::2:3:4:5:6:7:8"), Ok(groups([0, 2, 3, 4, 5, 6, 7, 8])));
    }

    #[test]
    fn embedded_ip4() {
        assert_eq!(
            ip6("::ffff:1.2.3.4"),
            Ok(groups([0, 0, 0, 0, 0, 0xffff, 0x0102, 0x0304]))
        );
        assert_eq!(
            ip6("1:2:3:4:5:6:1.2.3.4"),
            Ok(groups([1, 2, 3, 4, 5, 6, 0x0102, 0x0304]))
        );
        assert_eq!(ip6("::1.2.3.4"), Ok(groups([0, 0, 0, 0, 0, 0, 0x0102, 0x0304])));
        assert_eq!(
            ip6("1:2:3:4:5::1.2.3.4"),
            Ok(groups([1, 2, 3, 4, 5, 0, 0x0102, 0x0304]))
        );
    }

    #[test]
    fn embedded_ip4_group_count() {
        assert_eq!(
            ip6("1:2:3:4:5:1.2.3.4"),
            Err(HostAddressProblem::InvalidCharacter(11))
        );
        assert_eq!(
            ip6("1:2:3:4:5:6::1.2.3.4"),
            Err(HostAddressProblem::InvalidCharacter(14))
        );
        assert_eq!(ip6("1.2.3.4"), Err(HostAddressProblem::InvalidCharacter(1)));
    }

    #[test]
    fn embedded_ip4_errors_propagate() {
        assert_eq!(ip6("::1.2.3.256"), Err(HostAddressProblem::InvalidValue(8)));
        assert_eq!(ip6("::1.2.3"), Err(HostAddressProblem::Incomplete));
        assert_eq!(ip6("::a.2.3.4"), Err(HostAddressProblem::InvalidCharacter(2)));
    }

    #[test]
    fn double_compression_fails() {
        assert_eq!(ip6("1::2::3"), Err(HostAddressProblem::InvalidCharacter(5)));
        assert_eq!(ip6("1:::2"), Err(HostAddressProblem::InvalidCharacter(3)));
    }

    #[test]
    fn too_many_groups() {
        assert_eq!(
            ip6("1:2:3:4:5:6:7:8:9"),
            Err(HostAddressProblem::InvalidCharacter(15))
        );
        assert_eq!(
            ip6("1::2:3:4:5:6:7:8"),
            Err(HostAddressProblem::InvalidCharacter(14))
        );
        assert_eq!(
            ip6("1:2:3:4:5:6:7::8"),
            Err(HostAddressProblem::InvalidCharacter(15))
        );
        assert_eq!(
            ip6("1:2:3:4:5:6:7:8::"),
            Err(HostAddressProblem::InvalidCharacter(15))
        );
    }

    #[test]
    fn too_few_groups() {
        assert_eq!(ip6("1:2:3"), Err(HostAddressProblem::Incomplete));
        assert_eq!(ip6("1:2:"), Err(HostAddressProblem::Incomplete));
    }

    #[test]
    fn lone_leading_colon() {
        assert_eq!(ip6(":1"), Err(HostAddressProblem::InvalidCharacter(0)));
        assert_eq!(ip6(":"), Err(HostAddressProblem::InvalidCharacter(0)));
    }

    #[test]
    fn five_digit_group() {
        assert_eq!(ip6("12345::"), Err(HostAddressProblem::InvalidValue(0)));
    }

    #[test]
    fn non_hex_character() {
        assert_eq!(ip6("::g"), Err(HostAddressProblem::InvalidCharacter(2)));
        assert_eq!(ip6("example.com"), Err(HostAddressProblem::InvalidCharacter(1)));
    }
}
