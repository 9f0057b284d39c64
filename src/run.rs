//! Application execution logic.
//!
//! Builds the registry client from the validated config and runs one
//! collection pass per selected address family.

use std::path::Path;

use thiserror::Error;

use vpn_prefixes::config::ValidatedConfig;
use vpn_prefixes::http::ReqwestClient;
use vpn_prefixes::pipeline::{Collection, Pipeline, PipelineError, PipelineObserver, RunReport};
use vpn_prefixes::prefix::AddressFamily;
use vpn_prefixes::registry::{Asn, RegistryClient, RipeStatClient};
use vpn_prefixes::store::FilePrefixStore;
use vpn_prefixes::time::Sleeper;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A collection pass failed to persist its output.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Executes every configured collection pass in order.
///
/// With `family = both` the IPv4 pass runs first, then the IPv6 pass,
/// each writing its own file. A persistence failure stops the remaining
/// passes.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - An output file cannot be written
///
/// # Coverage Note
///
/// This function is excluded from coverage because it performs real
/// network requests.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let registry = create_registry(&config)?;
    let pipeline = Pipeline::new(registry, config.interval);

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - prefixes will be collected but not written");
    }

    for token in non_canonical_asns(&config.asns) {
        tracing::warn!("'{token}' is not of the form AS<digits>; querying it as written");
    }

    for (family, output) in config.jobs() {
        let report = run_job(&pipeline, &config.asns, family, output, config.dry_run).await?;
        log_summary(&report);
    }

    Ok(())
}

/// Builds the RIPEstat client for the configured endpoint.
fn create_registry(config: &ValidatedConfig) -> Result<RipeStatClient<ReqwestClient>, RunError> {
    let http = ReqwestClient::with_timeout(config.timeout, &config.user_agent)
        .map_err(RunError::HttpClient)?;

    Ok(RipeStatClient::with_base_url(http, config.registry_url.clone()))
}

/// Runs one family's pass, writing to `output` unless `dry_run` is set.
async fn run_job<R, S, O>(
    pipeline: &Pipeline<R, S, O>,
    asns: &[Asn],
    family: AddressFamily,
    output: &Path,
    dry_run: bool,
) -> Result<RunReport, RunError>
where
    R: RegistryClient,
    S: Sleeper,
    O: PipelineObserver,
{
    if dry_run {
        let Collection { set, report } = pipeline.collect(asns, family).await;
        tracing::info!(
            "Dry-run: would write {} unique {family} prefixes to {}",
            set.len(),
            output.display()
        );
        for prefix in set.iter() {
            tracing::debug!("Dry-run: {prefix}");
        }
        return Ok(report);
    }

    let store = FilePrefixStore::new(output);
    Ok(pipeline.run(asns, family, &store).await?)
}

/// Logs the end-of-pass summary.
fn log_summary(report: &RunReport) {
    tracing::info!(
        "{} pass complete: {}/{} ASN(s) answered, {} unique prefixes",
        report.family,
        report.succeeded(),
        report.outcomes.len(),
        report.total,
    );

    let failed = failed_asns(report);
    if !failed.is_empty() {
        tracing::warn!(
            "{} ASN(s) contributed nothing due to errors: {}",
            failed.len(),
            failed.join(", ")
        );
    }
}

/// Returns the configured tokens that do not look like `AS<digits>`.
fn non_canonical_asns(asns: &[Asn]) -> Vec<&str> {
    asns.iter()
        .filter(|asn| !asn.is_canonical())
        .map(Asn::as_str)
        .collect()
}

/// Returns the ASNs whose lookup failed, in list order.
fn failed_asns(report: &RunReport) -> Vec<&str> {
    report
        .outcomes
        .iter()
        .filter(|o| o.is_failed())
        .map(|o| o.asn.as_str())
        .collect()
}
