//! Address families, prefix classification and aggregation.
//!
//! This module provides:
//! - The address family of a run ([`AddressFamily`], [`FamilySelection`])
//! - Strict classification of raw CIDR strings ([`is_member`], [`classify`])
//! - The deduplicating, ordered accumulator ([`PrefixSet`])

mod classifier;
mod family;
mod set;


pub use classifier::{Prefix, classify, detect_family, is_member};
pub use family::{AddressFamily, FamilySelection};
pub use set::PrefixSet;
