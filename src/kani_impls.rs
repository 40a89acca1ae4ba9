//! Kani proof harnesses for the host scanners and address values.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::ip4::try_parse_ip4;
use crate::ip6::try_parse_ip6;
use crate::name::try_parse_name;
use crate::{HostAddress, HostParseOptions, Ip4Address, Ip6Address};

/// Characters that exercise every branch of the scanners.
const HOST_CHARS: &[u8] = b"09afAFgz.:-[]_";

/// Longest input explored; keeps the unwinding bound small.
const MAX_INPUT: usize = 8;

fn arbitrary_host_char() -> u8 {
    let idx: usize = kani::any();
    HOST_CHARS[idx % HOST_CHARS.len()]
}

fn arbitrary_input() -> Vec<u8> {
    let len: usize = kani::any();
    let len = len % (MAX_INPUT + 1);
    (0..len).map(|_| arbitrary_host_char()).collect()
}

impl kani::Arbitrary for Ip4Address {
    fn any() -> Self {
        Self::new(kani::any())
    }
}

impl kani::Arbitrary for Ip6Address {
    fn any() -> Self {
        Self::new(kani::any())
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: no scanner panics, whatever the window contents
#[kani::proof]
#[kani::unwind(10)]
fn proof_scanners_never_panic() {
    let input = arbitrary_input();
    let end = input.len();
    let _ = try_parse_name(&input, 0, end);
    let _ = try_parse_ip4(&input, 0, end, false);
    let _ = try_parse_ip4(&input, 0, end, true);
    let _ = try_parse_ip6(&input, 0, end);
}

/// Proof: reported positions stay inside the scanned window
#[kani::proof]
#[kani::unwind(10)]
fn proof_problem_positions_in_window() {
    use crate::problem::HostAddressProblem;

    let input = arbitrary_input();
    let end = input.len();
    let problems = [
        try_parse_name(&input, 0, end),
        try_parse_ip4(&input, 0, end, false).err(),
        try_parse_ip6(&input, 0, end).err(),
    ];
    for problem in problems.into_iter().flatten() {
        if let HostAddressProblem::InvalidCharacter(at)
        | HostAddressProblem::InvalidValue(at)
        | HostAddressProblem::InvalidLength(at) = problem
        {
            assert!(at < end);
        }
    }
}

/// Proof: the orchestrator never panics in any context
#[kani::proof]
#[kani::unwind(10)]
fn proof_parse_never_panics() {
    let input = arbitrary_input();
    if let Ok(text) = std::str::from_utf8(&input) {
        let _ = HostAddress::parse_with(text, 0, HostParseOptions::new());
        let _ = HostAddress::parse_with(text, 0, HostParseOptions::email());
    }
}

/// Proof: subnet(32) is the identity and subnet(0) clears every bit
#[kani::proof]
fn proof_ip4_subnet_bounds() {
    let ip: Ip4Address = kani::any();
    assert_eq!(ip.subnet(32), ip);
    assert_eq!(ip.subnet(0).to_u32(), 0);
}

/// Proof: subnet never sets a bit that was clear
#[kani::proof]
fn proof_ip4_subnet_is_mask() {
    let ip: Ip4Address = kani::any();
    let bits: u8 = kani::any();
    let masked = ip.subnet(bits);
    assert_eq!(masked.to_u32() & !ip.to_u32(), 0);
}

/// Proof: subnet(128) is the identity for IPv6
#[kani::proof]
fn proof_ip6_subnet_identity() {
    let ip: Ip6Address = kani::any();
    assert_eq!(ip.subnet(128), ip);
}
