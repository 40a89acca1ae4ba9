//! IPv4 dotted-quad scanner.
//!
//! ```abnf
//! ipv4 = octet "." octet "." octet "." octet
//! octet = 1*DIGIT                ; value 0-255, leading zeros allowed
//! ```

use crate::constants::IP4_OCTET_COUNT;
use crate::problem::{HostAddressProblem, check_length};

const MAX_OCTET_VALUE: u32 = 255;

/// Scans `text[start..end]` as an IPv4 address, returning it big-endian
/// packed into a `u32`.
///
/// With `inside_ip6` set the window is the tail of an IPv6 address, so
/// colons and hex letters are plain invalid characters instead of a hint
/// that the whole host is IPv6.
pub(crate) fn try_parse_ip4(
    text: &[u8],
    start: usize,
    end: usize,
    inside_ip6: bool,
) -> Result<u32, HostAddressProblem> {
    if start >= end {
        return Err(HostAddressProblem::Incomplete);
    }

    let last = end - 1;
    let mut value: u32 = 0;
    let mut octet_start = start;
    let mut octet_counter = 0;
    let mut octet_value: u32 = 0;

    for (i, &c) in text.iter().enumerate().take(end).skip(start) {
        check_length(octet_start, i)?;

        if c == b'.' {
            if i == octet_start {
                return Err(HostAddressProblem::InvalidCharacter(i));
            }
            if octet_value > MAX_OCTET_VALUE {
                return Err(HostAddressProblem::InvalidValue(octet_start));
            }
            if octet_counter == IP4_OCTET_COUNT - 1 {
                return Err(HostAddressProblem::InvalidCharacter(i));
            }
            if i == last {
                return Err(HostAddressProblem::Incomplete);
            }
            value = (value << 8) | octet_value;
            octet_counter += 1;
            octet_start = i + 1;
            octet_value = 0;
            continue;
        }

        if !inside_ip6 && (c == b':' || matches!(c, b'a'..=b'f' | b'A'..=b'F')) {
            return Err(HostAddressProblem::ProbablyIp6);
        }

        let digit = char::from(c)
            .to_digit(10)
            .ok_or(HostAddressProblem::InvalidCharacter(i))?;
        octet_value = octet_value.saturating_mul(10).saturating_add(digit);

        if i == last {
            if octet_value > MAX_OCTET_VALUE {
                return Err(HostAddressProblem::InvalidValue(octet_start));
            }
            if octet_counter != IP4_OCTET_COUNT - 1 {
                return Err(HostAddressProblem::Incomplete);
            }
            value = (value << 8) | octet_value;
        }
    }

    Ok(value)
}
