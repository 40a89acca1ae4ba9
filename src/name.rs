//! DNS name scanner.
//!
//! ```abnf
//! name  = label *( "." label )
//! label = ( ALPHA / DIGIT ) *62( ALPHA / DIGIT / "-" )   ; no trailing "-"
//! ```
//!
//! A name made only of digits and dots is reported as
//! [`HostAddressProblem::ProbablyIp4`] so the IPv4 interpretation wins.

use crate::problem::{HostAddressProblem, check_length};

/// Scans `text[start..end]` as a DNS name.
///
/// Returns `None` when the window is a valid name.
pub(crate) fn try_parse_name(text: &[u8], start: usize, end: usize) -> Option<HostAddressProblem> {
    scan(text, start, end).err()
}

fn scan(text: &[u8], start: usize, end: usize) -> Result<(), HostAddressProblem> {
    if start >= end {
        return Err(HostAddressProblem::Incomplete);
    }

    let last = end - 1;
    let mut label_start = start;
    let mut could_be_ip4 = true;

    for (i, &c) in text.iter().enumerate().take(end).skip(start) {
        if i == label_start {
            match c {
                b'0'..=b'9' => {}
                b'a'..=b'z' | b'A'..=b'Z' => could_be_ip4 = false,
                _ => return Err(HostAddressProblem::InvalidCharacter(i)),
            }
            if i == last {
                check_length(label_start, i + 1)?;
            }
        } else if i == last {
            match c {
                b'.' => return Err(HostAddressProblem::Incomplete),
                b'0'..=b'9' => check_length(label_start, i + 1)?,
                b'a'..=b'z' | b'A'..=b'Z' => {
                    could_be_ip4 = false;
                    check_length(label_start, i + 1)?;
                }
                _ => return Err(HostAddressProblem::InvalidCharacter(i)),
            }
        } else {
            match c {
                b'.' => {
                    if text[i - 1] == b'-' {
                        return Err(HostAddressProblem::InvalidCharacter(i - 1));
                    }
                    check_length(label_start, i)?;
                    label_start = i + 1;
                }
                b'0'..=b'9' => {}
                b'a'..=b'z' | b'A'..=b'Z' | b'-' => could_be_ip4 = false,
                b':' => return Err(HostAddressProblem::ProbablyIp6),
                _ => return Err(HostAddressProblem::InvalidCharacter(i)),
            }
        }
    }

    if could_be_ip4 {
        Err(HostAddressProblem::ProbablyIp4)
    } else {
        Ok(())
    }
}
