//! The fetch → classify → aggregate → persist pipeline.
//!
//! This module provides:
//! - The sequential driver ([`Pipeline`])
//! - Per-ASN and per-run results ([`AsnOutcome`], [`RunReport`], [`Collection`])
//! - Progress reporting hooks ([`PipelineObserver`], [`TracingObserver`])
//!
//! # Flow
//!
//! For each configured ASN, in order:
//!
//! ```text
//! Fetching(asn) -> Classifying(asn) -> Aggregating(asn) -> Pacing -> next asn | Done
//! ```
//!
//! A failed fetch skips straight to `Pacing` with the aggregate unchanged,
//! so one bad ASN never aborts the run. `Done` hands the aggregate to a
//! [`PrefixStore`](crate::store::PrefixStore); only a store failure is fatal.

mod driver;
mod observer;
mod report;


pub use driver::{Pipeline, PipelineError};
pub use observer::{PipelineObserver, TracingObserver};
pub use report::{AsnOutcome, AsnStatus, Collection, RunReport};
