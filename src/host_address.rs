//! Host address type and the parser that picks its interpretation.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host         = [ "[" [ ip6-tag ] ] ( name / ipv4 / ipv6 ) [ "]" ]
//! ip6-tag      = "IPv6:"            ; email context only
//! ```
//!
//! The same character window is scanned as a DNS name, then as IPv4, then
//! as IPv6. The first scanner to succeed decides the result. When all three
//! fail, the problem that got furthest into the input is reported.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::constants::{IP6_TAG, MAX_HOST_LENGTH};
use crate::error::{HostAddressError, HostAddressErrorKind};
use crate::ip4::try_parse_ip4;
use crate::ip6::try_parse_ip6;
use crate::ip_address::{Ip4Address, Ip6Address, IpAddress};
use crate::name::try_parse_name;
use crate::options::HostParseOptions;
use crate::problem::HostAddressProblem;

/// Interpretation of a parsed host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A DNS name (e.g., "example.com")
    Name,
    /// An IPv4 address (e.g., "192.168.1.1")
    V4(Ip4Address),
    /// An IPv6 address (e.g., `::1`)
    V6(Ip6Address),
}

/// A validated host address.
///
/// Holds the text it was parsed from and, for IP literals, the decoded
/// address. Equality, hashing and ordering ignore ASCII case.
///
/// # Examples
///
/// ```
/// use host_address::HostAddress;
///
/// let host = HostAddress::parse("example.com").unwrap();
/// assert!(host.is_name());
/// assert!(host.values().is_empty());
///
/// let host = HostAddress::parse("1.2.3.4").unwrap();
/// assert_eq!(host.values(), vec![1, 2, 3, 4]);
///
/// let err = HostAddress::parse("1.2.3.256").unwrap_err();
/// assert_eq!(err.to_string(), "Host contains invalid value at 6");
/// ```
#[derive(Debug, Clone)]
pub struct HostAddress {
    /// Text from the parse offset to the end, brackets included
    address: String,
    /// Byte range of the host inside `address`, without brackets or tag
    host_start: usize,
    host_end: usize,
    kind: HostKind,
}

impl HostAddress {
    /// Parses a plain host: a name, IPv4 or IPv6 address without brackets.
    ///
    /// # Errors
    ///
    /// Returns `HostAddressError` if:
    /// - The host exceeds 253 characters
    /// - No interpretation accepts the host
    /// - The host is enclosed in brackets
    pub fn parse(input: &str) -> Result<Self, HostAddressError> {
        Self::parse_with(input, 0, HostParseOptions::new())
    }

    /// Parses the host found in `text` from byte `offset` to the end.
    ///
    /// Error positions are byte offsets into the whole of `text`; the
    /// length limit counts characters.
    ///
    /// # Errors
    ///
    /// Returns `HostAddressError` if:
    /// - `offset` is past the end of `text` or inside a character
    /// - The host exceeds 253 characters
    /// - No interpretation accepts the host
    /// - The brackets are not closed, or not permitted by `options`
    /// - An `IPv6:` tagged literal holds something other than IPv6
    pub fn parse_with(
        text: &str,
        offset: usize,
        options: HostParseOptions,
    ) -> Result<Self, HostAddressError> {
        let Some(address) = text.get(offset..) else {
            return Err(HostAddressError::new(
                text,
                HostAddressErrorKind::InvalidOffset { offset },
            ));
        };

        let length = address.chars().count();
        if length > MAX_HOST_LENGTH {
            return Err(HostAddressError::new(
                text,
                HostAddressErrorKind::TooLong {
                    max: MAX_HOST_LENGTH,
                    actual: length,
                },
            ));
        }

        let bytes = text.as_bytes();
        let mut start = offset;
        let mut end = text.len();
        let bracketed = bytes.get(start) == Some(&b'[');
        let mut missing_close = false;
        let mut tagged = false;

        if bracketed {
            start += 1;
            if end > start && bytes[end - 1] == b']' {
                end -= 1;
            } else {
                missing_close = true;
            }
            let tag = IP6_TAG.as_bytes();
            if options.email
                && bytes[start..end]
                    .get(..tag.len())
                    .is_some_and(|found| found.eq_ignore_ascii_case(tag))
            {
                start += tag.len();
                tagged = true;
            }
        }

        let kind = resolve(text, start, end)?;

        if missing_close {
            return Err(HostAddressError::new(
                text,
                HostAddressErrorKind::MissingClosingBracket,
            ));
        }

        if tagged && !matches!(kind, HostKind::V6(_)) {
            return Err(HostAddressError::new(
                text,
                HostAddressErrorKind::UnexpectedKind {
                    expected: "an IPv6 address",
                },
            ));
        }

        if bracketed {
            let allowed = match kind {
                HostKind::Name => false,
                HostKind::V4(_) => options.allow_ip4_in_brackets,
                HostKind::V6(_) => options.allow_brackets,
            };
            if !allowed {
                return Err(HostAddressError::new(
                    text,
                    HostAddressErrorKind::UnexpectedBrackets,
                ));
            }
        }

        Ok(Self {
            address: address.to_string(),
            host_start: start - offset,
            host_end: end - offset,
            kind,
        })
    }

    /// Returns the parsed text, brackets and tag included.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the host without brackets or `IPv6:` tag.
    #[must_use]
    pub fn host_str(&self) -> &str {
        &self.address[self.host_start..self.host_end]
    }

    /// Returns the interpretation of the host.
    #[must_use]
    pub const fn classify(&self) -> HostKind {
        self.kind
    }

    /// Returns true if the host is a DNS name.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self.kind, HostKind::Name)
    }

    /// Returns true if the host is an IP literal.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        !self.is_name()
    }

    /// Returns true if the host is an IPv4 literal.
    #[must_use]
    pub const fn is_ip4(&self) -> bool {
        matches!(self.kind, HostKind::V4(_))
    }

    /// Returns true if the host is an IPv6 literal.
    #[must_use]
    pub const fn is_ip6(&self) -> bool {
        matches!(self.kind, HostKind::V6(_))
    }

    /// Returns the IP address, if the host is an IP literal.
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddress> {
        match self.kind {
            HostKind::Name => None,
            HostKind::V4(ip) => Some(IpAddress::V4(ip)),
            HostKind::V6(ip) => Some(IpAddress::V6(ip)),
        }
    }

    /// Returns a copy of the address bytes: empty for a name, 4 bytes for
    /// IPv4, 16 bytes for IPv6, in network byte order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.ip().as_ref().map_or_else(Vec::new, IpAddress::value)
    }

    /// Returns true if this is `localhost` or a loopback address.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        match self.ip() {
            None => self.host_str().eq_ignore_ascii_case("localhost"),
            Some(ip) => ip.is_loopback(),
        }
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.address.bytes().map(|b| b.to_ascii_lowercase())
    }
}

/// Scans the window with each interpretation in turn.
fn resolve(text: &str, start: usize, end: usize) -> Result<HostKind, HostAddressError> {
    let bytes = text.as_bytes();

    let name = match try_parse_name(bytes, start, end) {
        None => {
            debug!(host = &text[start..end], "resolved host as name");
            return Ok(HostKind::Name);
        }
        Some(problem) => rejected(text, "name", problem)?,
    };

    let ip4 = match try_parse_ip4(bytes, start, end, false) {
        Ok(value) => {
            debug!(host = &text[start..end], "resolved host as IPv4");
            return Ok(HostKind::V4(Ip4Address::from_u32(value)));
        }
        Err(problem) => rejected(text, "ipv4", problem)?,
    };

    let ip6 = match try_parse_ip6(bytes, start, end) {
        Ok(values) => {
            debug!(host = &text[start..end], "resolved host as IPv6");
            return Ok(HostKind::V6(Ip6Address::new(values)));
        }
        Err(problem) => rejected(text, "ipv6", problem)?,
    };

    let problem = HostAddressProblem::select([name, ip4, ip6]);
    debug!(input = text, ?problem, "no interpretation accepted host");
    Err(problem.into_error(text))
}

fn rejected(
    text: &str,
    scanner: &'static str,
    problem: HostAddressProblem,
) -> Result<HostAddressProblem, HostAddressError> {
    trace!(scanner, ?problem, "interpretation rejected");
    if problem.stop_trying() {
        debug!(input = text, scanner, ?problem, "aborting host parse");
        return Err(problem.into_error(text));
    }
    Ok(problem)
}

/// Parses a plain host: a name, IPv4 or IPv6 address without brackets.
///
/// # Errors
///
/// Returns `HostAddressError` if the host is invalid.
///
/// # Examples
///
/// ```
/// let host = host_address::parse_host("::1").unwrap();
/// assert!(host.is_ip6());
/// assert_eq!(host.values().len(), 16);
/// assert_eq!(host.values()[15], 1);
/// ```
pub fn parse_host(text: &str) -> Result<HostAddress, HostAddressError> {
    HostAddress::parse(text)
}

/// Parses the domain of an email address starting at `offset`, usually
/// just past the `@`.
///
/// Accepts `[a.b.c.d]` and `[IPv6:...]` address literals.
///
/// # Errors
///
/// Returns `HostAddressError` if the domain is invalid.
///
/// # Examples
///
/// ```
/// let email = "user@[IPv6:2001:db8::1]";
/// let host = host_address::parse_host_in_email(email, 5).unwrap();
/// assert!(host.is_ip6());
/// assert_eq!(host.host_str(), "2001:db8::1");
/// ```
pub fn parse_host_in_email(text: &str, offset: usize) -> Result<HostAddress, HostAddressError> {
    HostAddress::parse_with(text, offset, HostParseOptions::email())
}

/// Parses the host of a URL authority, where IPv6 is written in brackets.
///
/// # Errors
///
/// Returns `HostAddressError` if the host is invalid.
pub fn parse_host_in_url(text: &str) -> Result<HostAddress, HostAddressError> {
    HostAddress::parse_with(text, 0, HostParseOptions::url())
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl FromStr for HostAddress {
    type Err = HostAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for HostAddress {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl TryFrom<&str> for HostAddress {
    type Error = HostAddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialEq for HostAddress {
    fn eq(&self, other: &Self) -> bool {
        self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for HostAddress {}

impl Hash for HostAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
        state.write_usize(self.address.len());
    }
}

impl PartialOrd for HostAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HostAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.address)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HostAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_with(&s, 0, HostParseOptions::email()).map_err(serde::de::Error::custom)
    }
}
