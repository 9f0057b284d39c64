//! Strict CIDR classification.
//!
//! A raw string belongs to a family if and only if it parses as a network
//! block of that family. Host bits may be set (`10.1.2.3/8` is accepted as
//! written); anything else the parser rejects (truncated addresses, missing
//! prefix length, out-of-range length, surrounding whitespace) is not a
//! member. IPv4 octets with a leading zero (`010.0.0.0/8`) are rejected as
//! ambiguous. The registry's own AFI tag and character heuristics such as
//! "contains a colon" play no part.
//!
//! Bare addresses and dotted-mask forms (`10.0.0.0/255.0.0.0`) are
//! deliberately not members, even though they denote a network: every
//! output line must already be in `address/length` form.

use std::fmt;

use ipnet::{Ipv4Net, Ipv6Net};

use super::AddressFamily;

/// A raw prefix string that passed classification for its family.
///
/// The original text is kept verbatim; deduplication and output both work
/// on the exact string the registry announced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
    raw: String,
    family: AddressFamily,
}

impl Prefix {
    /// Returns the prefix exactly as announced.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the family this prefix was classified under.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        self.family
    }

    /// Consumes the prefix, returning the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns true if `raw` parses as a network block of `family`.
#[must_use]
pub fn is_member(raw: &str, family: AddressFamily) -> bool {
    match family {
        AddressFamily::V4 => !has_leading_zero_octet(raw) && raw.parse::<Ipv4Net>().is_ok(),
        AddressFamily::V6 => raw.parse::<Ipv6Net>().is_ok(),
    }
}

/// Returns true if any dotted octet of the address part is zero-padded.
///
/// The prefix length is not checked; `10.0.0.0/08` stays valid.
fn has_leading_zero_octet(raw: &str) -> bool {
    let address = raw.split_once('/').map_or(raw, |(address, _)| address);
    address
        .split('.')
        .any(|octet| octet.len() > 1 && octet.starts_with('0'))
}

/// Classifies `raw` for `family`, returning `None` if it is not a member.
#[must_use]
pub fn classify(raw: impl Into<String>, family: AddressFamily) -> Option<Prefix> {
    let raw = raw.into();
    is_member(&raw, family).then_some(Prefix { raw, family })
}

/// Returns the family `raw` parses under, if any.
#[must_use]
pub fn detect_family(raw: &str) -> Option<AddressFamily> {
    AddressFamily::ALL
        .into_iter()
        .find(|&family| is_member(raw, family))
}
