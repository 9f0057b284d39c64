//! Registry layer: per-ASN lookups of announced prefixes.
//!
//! This module provides:
//! - The ASN identifier type ([`Asn`])
//! - Raw prefix records as announced by the registry ([`PrefixRecord`])
//! - The lookup abstraction the pipeline is written against ([`RegistryClient`])
//! - The RIPEstat implementation over any [`HttpClient`](crate::http::HttpClient) ([`RipeStatClient`])

mod asn;
mod client;
mod error;
mod record;


pub use asn::Asn;
pub use client::{DEFAULT_REGISTRY_URL, RegistryClient, RipeStatClient};
pub use error::RegistryError;
pub use record::{PrefixRecord, parse_announced_prefixes};
