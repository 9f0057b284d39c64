//! Progress reporting for pipeline runs.

use crate::prefix::{AddressFamily, detect_family};
use crate::registry::{Asn, PrefixRecord, RegistryError};

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;

/// Hooks called by the [`Pipeline`](super::Pipeline) as a run progresses.
///
/// Every method has a no-op default, so implementations only override
/// what they care about. The production implementation is
/// [`TracingObserver`].
#[allow(unused_variables)]
pub trait PipelineObserver: Send + Sync {
    /// A run is about to fetch `asn_count` ASNs.
    fn run_started(&self, family: AddressFamily, asn_count: usize) {}

    /// A lookup is about to be issued.
    fn asn_started(&self, asn: &Asn) {}

    /// The registry answered for `asn`.
    fn asn_fetched(&self, asn: &Asn, family: AddressFamily, accepted: usize, rejected: usize) {}

    /// The lookup for `asn` failed; it contributes nothing.
    fn asn_failed(&self, asn: &Asn, error: &RegistryError) {}

    /// A record did not classify into the run's family.
    ///
    /// Routine filtering, not an error.
    fn prefix_rejected(&self, asn: &Asn, record: &PrefixRecord, family: AddressFamily) {}

    /// All ASNs have been processed.
    fn run_collected(&self, family: AddressFamily, total: usize) {}

    /// The set was persisted.
    fn run_finished(&self, family: AddressFamily, total: usize, destination: &str) {}
}

/// Observer that reports through `tracing`.
///
/// Progress goes to INFO, per-ASN failures to WARN and per-prefix
/// rejections to DEBUG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn run_started(&self, family: AddressFamily, asn_count: usize) {
        tracing::info!("Starting {family} prefix collection for {asn_count} ASN(s)");
    }

    fn asn_started(&self, asn: &Asn) {
        tracing::info!("Processing {asn}...");
    }

    fn asn_fetched(&self, asn: &Asn, family: AddressFamily, accepted: usize, rejected: usize) {
        tracing::info!("Found {accepted} valid {family} prefixes for {asn}");
        if rejected > 0 {
            tracing::debug!("{rejected} record(s) from {asn} are not {family} prefixes");
        }
    }

    fn asn_failed(&self, asn: &Asn, error: &RegistryError) {
        tracing::warn!("Error fetching {asn}: {error}");
    }

    fn prefix_rejected(&self, asn: &Asn, record: &PrefixRecord, family: AddressFamily) {
        if let Some(detail) = mistag_detail(record, family) {
            tracing::debug!("{asn}: '{}' is tagged {family} but {detail}", record.prefix);
        }
    }

    fn run_collected(&self, family: AddressFamily, total: usize) {
        tracing::debug!("Collected {total} unique {family} prefixes");
    }

    fn run_finished(&self, family: AddressFamily, total: usize, destination: &str) {
        tracing::info!("Saved {total} unique {family} prefixes to {destination}");
    }
}

/// Describes a rejected record whose registry tag claims `family`.
///
/// Returns `None` when the tag names another family or is absent, since
/// those rejections are routine.
fn mistag_detail(record: &PrefixRecord, family: AddressFamily) -> Option<String> {
    if record.reported_family() != Some(family) {
        return None;
    }

    Some(match detect_family(&record.prefix) {
        Some(actual) => format!("parses as {actual}"),
        None => "does not parse as any family".to_string(),
    })
}
