//! Raw prefix records and announced-prefixes response parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::prefix::AddressFamily;

use super::RegistryError;

/// One announced range as reported by the registry.
///
/// Nothing here is validated: `prefix` may be malformed and `afi` may be
/// missing or disagree with the prefix itself. Classification happens in
/// [`crate::prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    /// The announced CIDR string, verbatim.
    pub prefix: String,
    /// The registry's address family tag, if present.
    pub afi: Option<String>,
}

impl PrefixRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(prefix: impl Into<String>, afi: Option<&str>) -> Self {
        Self {
            prefix: prefix.into(),
            afi: afi.map(ToString::to_string),
        }
    }

    /// Returns the family the registry claims, if the tag is recognised.
    #[must_use]
    pub fn reported_family(&self) -> Option<AddressFamily> {
        self.afi.as_deref().and_then(AddressFamily::from_afi_tag)
    }

    /// Extracts a record from one entry of `data.prefixes`.
    ///
    /// Entries without a string `prefix` field yield `None`.
    fn from_entry(entry: &Value) -> Option<Self> {
        let prefix = entry.get("prefix")?.as_str()?;
        let afi = entry.get("afi").and_then(Value::as_str);
        Some(Self::new(prefix, afi))
    }
}

/// Response envelope of the announced-prefixes endpoint.
///
/// Entries are kept as loose JSON so one odd entry does not discard the
/// rest of the ASN's prefixes.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: Option<String>,
    data: Option<Data>,
}

#[derive(Debug, Deserialize)]
struct Data {
    prefixes: Option<Vec<Value>>,
}

/// Parses an announced-prefixes response body.
///
/// A missing `data` object or `prefixes` array is an empty announcement,
/// not an error.
///
/// # Errors
///
/// Returns [`RegistryError::Decode`] if the body is not JSON or its
/// envelope has the wrong shape, and [`RegistryError::Rejected`] if the
/// envelope's `status` is present and not `ok`.
pub fn parse_announced_prefixes(body: &[u8]) -> Result<Vec<PrefixRecord>, RegistryError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(RegistryError::Decode)?;

    if let Some(status) = envelope.status {
        if !status.eq_ignore_ascii_case("ok") {
            return Err(RegistryError::Rejected { status });
        }
    }

    let entries = envelope
        .data
        .and_then(|data| data.prefixes)
        .unwrap_or_default();

    Ok(entries.iter().filter_map(PrefixRecord::from_entry).collect())
}
