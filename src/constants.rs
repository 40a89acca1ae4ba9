//! Constants for host address validation.

/// Maximum host length in characters (after any email offset).
pub const MAX_HOST_LENGTH: usize = 253;

/// Maximum length of a DNS label, and of any digit run inside an IPv4 octet.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Number of octets in an IPv4 address.
pub const IP4_OCTET_COUNT: usize = 4;

/// Number of 16-bit groups in an IPv6 address.
pub const IP6_GROUP_COUNT: usize = 8;

/// Groups that may precede an embedded IPv4 tail when no `::` is present.
pub const MAX_GROUPS_BEFORE_IP4: usize = 6;

/// Maximum hex digits in one IPv6 group.
pub const MAX_GROUP_DIGITS: usize = 4;

/// Address literal tag used for IPv6 inside email brackets (RFC 5321).
pub const IP6_TAG: &str = "IPv6:";

/// Byte length of an IPv4 address.
pub const IP4_LENGTH: usize = 4;

/// Byte length of an IPv6 address.
pub const IP6_LENGTH: usize = 16;
