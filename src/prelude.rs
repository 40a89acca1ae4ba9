//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use host_address::prelude::*;
//!
//! let host = parse_host_in_url("[::1]").unwrap();
//! assert!(matches!(host.classify(), HostKind::V6(_)));
//! ```

pub use crate::{
    // Core types
    HostAddress, HostKind, HostParseOptions, Ip4Address, Ip6Address, IpAddress,
    // Entry points
    parse_host, parse_host_in_email, parse_host_in_url,
    // Errors
    HostAddressError, HostAddressErrorKind,
    // Constants
    MAX_HOST_LENGTH, MAX_LABEL_LENGTH,
};
