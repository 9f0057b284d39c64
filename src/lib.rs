//! vpn-prefixes: VPN ASN prefix collector
//!
//! A library for collecting the address prefixes announced by a list of
//! autonomous systems and persisting them as sorted, deduplicated
//! per-family lists.

pub mod config;
pub mod http;
pub mod pipeline;
pub mod prefix;
pub mod registry;
pub mod store;
pub mod time;
