//! Error types for registry lookups.

use thiserror::Error;

use crate::http::HttpError;

/// Error type for a single registry lookup.
///
/// None of these abort a run: the pipeline logs the error and counts the
/// ASN as having announced nothing.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure (connection, timeout, bad URL).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The registry answered with a non-2xx status.
    #[error("Registry returned HTTP {status}")]
    Status {
        /// Response status code
        status: http::StatusCode,
    },

    /// The body was not JSON, or not shaped like an announced-prefixes response.
    #[error("Malformed registry response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The registry envelope carried a status other than `ok`.
    #[error("Registry rejected the query with status '{status}'")]
    Rejected {
        /// The envelope's `status` field
        status: String,
    },
}
