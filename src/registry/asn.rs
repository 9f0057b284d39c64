//! Autonomous system identifiers.

use std::fmt;

/// An autonomous system identifier as configured, e.g. `AS9009`.
///
/// Treated as an opaque token: it is passed to the registry unmodified and
/// only required to be non-empty. Lists may contain duplicates; fetching
/// the same ASN twice is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Asn(String);

impl Asn {
    /// Creates an ASN from a configured token, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing remains after trimming.
    #[must_use]
    pub fn new(token: &str) -> Option<Self> {
        let token = token.trim();
        (!token.is_empty()).then(|| Self(token.to_string()))
    }

    /// Returns the token as passed to the registry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token has the canonical `AS<digits>` form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0
            .strip_prefix("AS")
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
