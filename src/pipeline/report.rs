//! Results of a pipeline run.

use crate::prefix::{AddressFamily, PrefixSet};
use crate::registry::Asn;

/// What happened to a single ASN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsnStatus {
    /// The registry answered.
    Fetched {
        /// Records the registry returned.
        announced: usize,
        /// Records that classified into the run's family.
        accepted: usize,
        /// Accepted prefixes not already in the set.
        added: usize,
    },
    /// The lookup failed; the ASN contributed nothing.
    Failed {
        /// Error message, for the summary.
        reason: String,
    },
}

/// Per-ASN entry of a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsnOutcome {
    /// The ASN as configured.
    pub asn: Asn,
    /// Fetch result.
    pub status: AsnStatus,
}

impl AsnOutcome {
    /// Returns true if the lookup failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, AsnStatus::Failed { .. })
    }

    /// Returns the number of accepted prefixes (0 for failures).
    #[must_use]
    pub const fn accepted(&self) -> usize {
        match self.status {
            AsnStatus::Fetched { accepted, .. } => accepted,
            AsnStatus::Failed { .. } => 0,
        }
    }
}

/// Summary of one run, in ASN list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Family the run collected.
    pub family: AddressFamily,
    /// One entry per configured ASN, duplicates included.
    pub outcomes: Vec<AsnOutcome>,
    /// Unique prefixes in the final set.
    pub total: usize,
    /// Where the set was written; `None` if it was only collected.
    pub destination: Option<String>,
}

impl RunReport {
    /// Number of ASNs whose lookup failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Number of ASNs the registry answered for.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.len() - self.failed()
    }
}

/// The aggregate of a run before persistence.
#[derive(Debug, Clone)]
pub struct Collection {
    /// The deduplicated prefixes.
    pub set: PrefixSet,
    /// Per-ASN outcomes; `destination` is `None`.
    pub report: RunReport,
}
