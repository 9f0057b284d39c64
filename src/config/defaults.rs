//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

use crate::prefix::FamilySelection;

/// Default registry endpoint.
pub const REGISTRY_URL: &str = crate::registry::DEFAULT_REGISTRY_URL;

/// Default families to collect.
pub const FAMILY: FamilySelection = FamilySelection::Both;

/// Default per-request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default delay between registry requests in milliseconds.
pub const INTERVAL_MS: u64 = 1500;

/// Default IPv4 output path.
pub const IPV4_OUTPUT: &str = "output/vpn-ipv4.txt";

/// Default IPv6 output path.
pub const IPV6_OUTPUT: &str = "output/vpn-ipv6.txt";

/// Default `User-Agent` sent to the registry.
pub const USER_AGENT: &str = concat!("vpn-prefixes/", env!("CARGO_PKG_VERSION"));

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Default pacing interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_millis(INTERVAL_MS)
}
