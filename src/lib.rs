//! Strict parser and validator for network host addresses.
//!
//! This crate decides whether a piece of text is a DNS name, an IPv4
//! address or an IPv6 address, following the host grammar of RFC 3986
//! (with the email address literals of RFC 5321 as an option). It is purely
//! syntactic: no DNS lookup or other I/O ever happens.
//!
//! # Quick Start
//!
//! ```rust
//! use host_address::{parse_host, HostKind};
//!
//! let host = parse_host("example.com").unwrap();
//! assert!(host.is_name());
//!
//! let host = parse_host("10.0.0.1").unwrap();
//! match host.classify() {
//!     HostKind::V4(ip) => assert_eq!(ip.value(), [10, 0, 0, 1]),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! let host = parse_host("2001:db8::ff00:42:8329").unwrap();
//! assert!(host.is_ip6());
//! ```
//!
//! # Contexts
//!
//! | Entry point | Accepts |
//! |-------------|---------|
//! | [`parse_host`] | names, IPv4, IPv6; no brackets |
//! | [`parse_host_in_url`] | as above, plus IPv6 as a `[...]` literal |
//! | [`parse_host_in_email`] | `[a.b.c.d]` and `[IPv6:...]` literals, from an offset |
//!
//! # Errors
//!
//! When no interpretation fits, the error names the character position
//! where the most promising interpretation failed:
//!
//! ```rust
//! let err = host_address::parse_host("good--").unwrap_err();
//! assert_eq!(err.to_string(), "Host contains invalid character '-' at 5");
//! ```
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Host | 253 chars |
//! | DNS label | 63 chars |
//! | IPv6 group | 4 hex digits |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
mod host_address;
mod ip4;
mod ip6;
mod ip_address;
#[cfg(kani)]
mod kani_impls;
mod name;
mod options;
pub mod prelude;
mod problem;

pub use constants::{
    IP4_LENGTH, IP4_OCTET_COUNT, IP6_GROUP_COUNT, IP6_LENGTH, IP6_TAG, MAX_GROUP_DIGITS,
    MAX_GROUPS_BEFORE_IP4, MAX_HOST_LENGTH, MAX_LABEL_LENGTH,
};
pub use error::{HostAddressError, HostAddressErrorKind};
pub use host_address::{HostAddress, HostKind, parse_host, parse_host_in_email, parse_host_in_url};
pub use ip_address::{Ip4Address, Ip6Address, IpAddress};
pub use options::HostParseOptions;
