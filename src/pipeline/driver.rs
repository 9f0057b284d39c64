//! Sequential pipeline driver.

use std::time::Duration;

use thiserror::Error;

use crate::prefix::{AddressFamily, Prefix, PrefixSet, classify};
use crate::registry::{Asn, PrefixRecord, RegistryClient};
use crate::store::{PrefixStore, StoreError};
use crate::time::{Sleeper, TokioSleeper};

use super::{AsnOutcome, AsnStatus, Collection, PipelineObserver, RunReport, TracingObserver};

/// Error type for a pipeline run.
///
/// Registry failures never appear here; they are absorbed per ASN.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The collected set could not be persisted.
    #[error("Failed to persist prefix list: {0}")]
    Persist(#[from] StoreError),
}

/// Drives ASNs through fetch, classification and aggregation, one at a time.
///
/// # Type Parameters
///
/// - `R`: The registry client
/// - `S`: The sleeper used for pacing (defaults to [`TokioSleeper`])
/// - `O`: The progress observer (defaults to [`TracingObserver`])
///
/// # Pacing
///
/// After every ASN, whether its lookup succeeded or not, the driver waits
/// `interval` before moving on. This is the only rate limiting applied to
/// the registry.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use vpn_prefixes::http::ReqwestClient;
/// use vpn_prefixes::pipeline::Pipeline;
/// use vpn_prefixes::prefix::AddressFamily;
/// use vpn_prefixes::registry::{Asn, RipeStatClient};
/// use vpn_prefixes::store::FilePrefixStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = RipeStatClient::new(ReqwestClient::with_timeout(
///     Duration::from_secs(30),
///     "vpn-prefixes",
/// )?);
/// let pipeline = Pipeline::new(registry, Duration::from_millis(1500));
/// let asns: Vec<Asn> = ["AS9009", "AS209854"].into_iter().filter_map(Asn::new).collect();
///
/// let report = pipeline
///     .run(&asns, AddressFamily::V4, &FilePrefixStore::new("output/vpn-ipv4.txt"))
///     .await?;
/// println!("{} unique prefixes", report.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Pipeline<R, S = TokioSleeper, O = TracingObserver> {
    registry: R,
    sleeper: S,
    observer: O,
    interval: Duration,
}

impl<R> Pipeline<R> {
    /// Creates a pipeline pacing requests `interval` apart, reporting
    /// through [`TracingObserver`].
    #[must_use]
    pub const fn new(registry: R, interval: Duration) -> Self {
        Self {
            registry,
            sleeper: TokioSleeper,
            observer: TracingObserver,
            interval,
        }
    }
}

impl<R, S, O> Pipeline<R, S, O> {
    /// Sets a custom sleeper for pacing.
    ///
    /// Primarily useful for tests to avoid real delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Pipeline<R, S2, O> {
        Pipeline {
            registry: self.registry,
            sleeper,
            observer: self.observer,
            interval: self.interval,
        }
    }

    /// Sets a custom progress observer.
    #[must_use]
    pub fn with_observer<O2>(self, observer: O2) -> Pipeline<R, S, O2> {
        Pipeline {
            registry: self.registry,
            sleeper: self.sleeper,
            observer,
            interval: self.interval,
        }
    }

    /// Returns the registry client.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }
}

impl<R: RegistryClient, S: Sleeper, O: PipelineObserver> Pipeline<R, S, O> {
    /// Collects and persists the prefixes of `family` announced by `asns`.
    ///
    /// The store is written even if every lookup failed, in which case the
    /// output is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Persist`] if the store fails. Registry
    /// failures are reported in the [`RunReport`] instead.
    pub async fn run<P: PrefixStore>(
        &self,
        asns: &[Asn],
        family: AddressFamily,
        store: &P,
    ) -> Result<RunReport, PipelineError> {
        let Collection { set, mut report } = self.collect(asns, family).await;

        store.save(&set).await?;

        let destination = store.destination();
        self.observer.run_finished(family, set.len(), &destination);
        report.destination = Some(destination);

        Ok(report)
    }

    /// Fetches, classifies and aggregates without persisting.
    pub async fn collect(&self, asns: &[Asn], family: AddressFamily) -> Collection {
        self.observer.run_started(family, asns.len());

        let mut set = PrefixSet::new(family);
        let mut outcomes = Vec::with_capacity(asns.len());

        for asn in asns {
            let status = self.process_asn(asn, &mut set).await;
            outcomes.push(AsnOutcome {
                asn: asn.clone(),
                status,
            });

            self.sleeper.sleep(self.interval).await;
        }

        self.observer.run_collected(family, set.len());

        let report = RunReport {
            family,
            outcomes,
            total: set.len(),
            destination: None,
        };

        Collection { set, report }
    }

    /// Fetches one ASN and folds its members into `set`.
    async fn process_asn(&self, asn: &Asn, set: &mut PrefixSet) -> AsnStatus {
        let family = set.family();
        self.observer.asn_started(asn);

        let records = match self.registry.announced_prefixes(asn).await {
            Ok(records) => records,
            Err(e) => {
                self.observer.asn_failed(asn, &e);
                return AsnStatus::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let announced = records.len();
        let accepted = self.classify_records(asn, records, family);
        let accepted_count = accepted.len();
        self.observer
            .asn_fetched(asn, family, accepted_count, announced - accepted_count);

        let added = set.merge(accepted);

        AsnStatus::Fetched {
            announced,
            accepted: accepted_count,
            added,
        }
    }

    /// Keeps the records that classify into `family`.
    fn classify_records(
        &self,
        asn: &Asn,
        records: Vec<PrefixRecord>,
        family: AddressFamily,
    ) -> Vec<Prefix> {
        records
            .into_iter()
            .filter_map(|record| {
                let prefix = classify(record.prefix.as_str(), family);
                if prefix.is_none() {
                    self.observer.prefix_rejected(asn, &record, family);
                }
                prefix
            })
            .collect()
    }
}
