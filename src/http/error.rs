//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong on the wire. Whether a failure is fatal
/// is decided by the caller; the pipeline treats all of them as an
/// empty result for the ASN being fetched.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, refused connections, TLS errors
    /// and bodies that could not be read to completion.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
