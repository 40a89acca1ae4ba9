//! IP address value types.
//!
//! Each type wraps a fixed-size byte array in network byte order. Accessors
//! hand out copies, so a caller can never reach the stored bytes.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::constants::{IP4_LENGTH, IP6_LENGTH};
use crate::error::{HostAddressError, HostAddressErrorKind};
use crate::host_address::{HostAddress, HostKind};
use crate::options::HostParseOptions;

const IP4_BITS: u8 = 32;
const IP6_BITS: u8 = 128;

/// An IPv4 address.
///
/// # Examples
///
/// ```
/// use host_address::Ip4Address;
///
/// let ip: Ip4Address = "192.168.17.5".parse().unwrap();
/// assert_eq!(ip.value(), [192, 168, 17, 5]);
/// assert_eq!(ip.subnet(24).to_string(), "192.168.17.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ip4Address([u8; IP4_LENGTH]);

impl Ip4Address {
    /// Creates an address from its four octets.
    #[must_use]
    pub const fn new(octets: [u8; IP4_LENGTH]) -> Self {
        Self(octets)
    }

    /// Creates an address from its big-endian integer form.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns a copy of the four octets.
    #[must_use]
    pub const fn value(self) -> [u8; IP4_LENGTH] {
        self.0
    }

    /// Returns the big-endian integer form.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Keeps the `significant_bits` high-order bits and clears the rest.
    ///
    /// `subnet(32)` is the identity and `subnet(0)` clears every bit.
    /// Values above 32 behave like 32.
    #[must_use]
    pub fn subnet(self, significant_bits: u8) -> Self {
        let bits = significant_bits.min(IP4_BITS);
        if bits == IP4_BITS {
            return self;
        }
        let mask = u32::MAX
            .checked_shl(u32::from(IP4_BITS - bits))
            .unwrap_or(0);
        Self::from_u32(self.to_u32() & mask)
    }

    /// Returns true for `127.0.0.0/8`.
    #[must_use]
    pub const fn is_loopback(self) -> bool {
        self.0[0] == 127
    }
}

/// An IPv6 address.
///
/// # Examples
///
/// ```
/// use host_address::Ip6Address;
///
/// let ip: Ip6Address = "2001:db8:0:0:0:0:0:1".parse().unwrap();
/// assert_eq!(ip.to_string(), "2001:db8::1");
/// assert!("::1".parse::<Ip6Address>().unwrap().is_loopback());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ip6Address([u8; IP6_LENGTH]);

impl Ip6Address {
    /// Creates an address from its sixteen bytes.
    #[must_use]
    pub const fn new(bytes: [u8; IP6_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an address from its big-endian integer form.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns a copy of the sixteen bytes.
    #[must_use]
    pub const fn value(&self) -> [u8; IP6_LENGTH] {
        self.0
    }

    /// Returns the big-endian integer form.
    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Keeps the `significant_bits` high-order bits and clears the rest.
    ///
    /// Values above 128 behave like 128.
    #[must_use]
    pub fn subnet(self, significant_bits: u8) -> Self {
        let bits = significant_bits.min(IP6_BITS);
        if bits == IP6_BITS {
            return self;
        }
        let mask = u128::MAX
            .checked_shl(u32::from(IP6_BITS - bits))
            .unwrap_or(0);
        Self::from_u128(self.to_u128() & mask)
    }

    /// Returns true for `::1`.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        self.to_u128() == 1
    }

    /// Returns the embedded address of an IPv4-mapped address (`::ffff:a.b.c.d`).
    #[must_use]
    pub fn to_ip4_mapped(&self) -> Option<Ip4Address> {
        Ipv6Addr::from(self.0).to_ipv4_mapped().map(Ip4Address::from)
    }
}

/// An IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpAddress {
    /// An IPv4 address
    V4(Ip4Address),
    /// An IPv6 address
    V6(Ip6Address),
}

impl IpAddress {
    /// Returns a copy of the address bytes: 4 for IPv4, 16 for IPv6.
    #[must_use]
    pub fn value(&self) -> Vec<u8> {
        match self {
            Self::V4(ip) => ip.value().to_vec(),
            Self::V6(ip) => ip.value().to_vec(),
        }
    }

    /// Returns true for an IPv4 address.
    #[must_use]
    pub const fn is_ip4(&self) -> bool {
        matches!(self, Self::V4(_))
    }

    /// Returns true for an IPv6 address.
    #[must_use]
    pub const fn is_ip6(&self) -> bool {
        matches!(self, Self::V6(_))
    }

    /// Returns true for a loopback address of either family.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        match self {
            Self::V4(ip) => ip.is_loopback(),
            Self::V6(ip) => ip.is_loopback(),
        }
    }
}

fn parse_ip(input: &str, expected: &'static str) -> Result<IpAddress, HostAddressError> {
    let options = HostParseOptions::url().with_ip4_in_brackets(true);
    let host = HostAddress::parse_with(input, 0, options)?;
    match host.classify() {
        HostKind::V4(ip) => Ok(IpAddress::V4(ip)),
        HostKind::V6(ip) => Ok(IpAddress::V6(ip)),
        HostKind::Name => Err(HostAddressError::new(
            input,
            HostAddressErrorKind::UnexpectedKind { expected },
        )),
    }
}

impl FromStr for IpAddress {
    type Err = HostAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ip(s, "an IP address")
    }
}

impl FromStr for Ip4Address {
    type Err = HostAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "an IPv4 address";
        match parse_ip(s, EXPECTED)? {
            IpAddress::V4(ip) => Ok(ip),
            IpAddress::V6(_) => Err(HostAddressError::new(
                s,
                HostAddressErrorKind::UnexpectedKind { expected: EXPECTED },
            )),
        }
    }
}

impl FromStr for Ip6Address {
    type Err = HostAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "an IPv6 address";
        match parse_ip(s, EXPECTED)? {
            IpAddress::V6(ip) => Ok(ip),
            IpAddress::V4(_) => Err(HostAddressError::new(
                s,
                HostAddressErrorKind::UnexpectedKind { expected: EXPECTED },
            )),
        }
    }
}

impl fmt::Display for Ip4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl fmt::Display for Ip6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv6Addr::from(self.0))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(ip) => write!(f, "{ip}"),
            Self::V6(ip) => write!(f, "{ip}"),
        }
    }
}

impl From<Ipv4Addr> for Ip4Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip.octets())
    }
}

impl From<Ip4Address> for Ipv4Addr {
    fn from(ip: Ip4Address) -> Self {
        Self::from(ip.0)
    }
}

impl From<Ipv6Addr> for Ip6Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self(ip.octets())
    }
}

impl From<Ip6Address> for Ipv6Addr {
    fn from(ip: Ip6Address) -> Self {
        Self::from(ip.0)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => Self::V4(ip.into()),
            IpAddr::V6(ip) => Self::V6(ip.into()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(ip: IpAddress) -> Self {
        match ip {
            IpAddress::V4(ip) => Self::V4(ip.into()),
            IpAddress::V6(ip) => Self::V6(ip.into()),
        }
    }
}

impl From<Ip4Address> for IpAddress {
    fn from(ip: Ip4Address) -> Self {
        Self::V4(ip)
    }
}

impl From<Ip6Address> for IpAddress {
    fn from(ip: Ip6Address) -> Self {
        Self::V6(ip)
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_serde_via_str {
    ($($ty:ty),*) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

#[cfg(feature = "serde")]
impl_serde_via_str!(Ip4Address, Ip6Address, IpAddress);
