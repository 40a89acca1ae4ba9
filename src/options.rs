//! Parsing context for host addresses.

/// Controls which bracketed forms a host may take.
///
/// Brackets are always recognized; the options decide afterwards whether
/// the bracketed result is acceptable. A missing closing bracket is an
/// error in every context.
///
/// # Examples
///
/// ```
/// use host_address::{HostAddress, HostParseOptions};
///
/// let options = HostParseOptions::new().with_brackets(true);
/// let host = HostAddress::parse_with("[::1]", 0, options).unwrap();
/// assert!(host.is_ip6());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostParseOptions {
    /// Recognize the `IPv6:` address literal tag inside brackets.
    ///
    /// Default: false
    pub email: bool,

    /// Accept brackets around an IPv6 address.
    ///
    /// Default: false
    pub allow_brackets: bool,

    /// Accept brackets around an IPv4 address as well.
    ///
    /// Default: false
    pub allow_ip4_in_brackets: bool,
}

impl HostParseOptions {
    /// Plain host context: no brackets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            email: false,
            allow_brackets: false,
            allow_ip4_in_brackets: false,
        }
    }

    /// URL authority context: IPv6 may appear as a bracketed literal (`[::1]`).
    #[must_use]
    pub const fn url() -> Self {
        Self::new().with_brackets(true)
    }

    /// Email domain context: `[1.2.3.4]` and `[IPv6:::1]` address literals.
    #[must_use]
    pub const fn email() -> Self {
        Self::new()
            .with_email(true)
            .with_brackets(true)
            .with_ip4_in_brackets(true)
    }

    /// Sets whether the `IPv6:` tag is recognized.
    #[must_use]
    pub const fn with_email(mut self, email: bool) -> Self {
        self.email = email;
        self
    }

    /// Sets whether brackets around IPv6 are accepted.
    #[must_use]
    pub const fn with_brackets(mut self, allow: bool) -> Self {
        self.allow_brackets = allow;
        self
    }

    /// Sets whether brackets around IPv4 are accepted.
    #[must_use]
    pub const fn with_ip4_in_brackets(mut self, allow: bool) -> Self {
        self.allow_ip4_in_brackets = allow;
        self
    }
}
