//! Output persistence for collected prefix sets.
//!
//! A run's result is written as plain text: one prefix per line, sorted
//! ascending, no header and no trailing newline. Each save replaces the
//! previous file wholesale.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FilePrefixStore;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::prefix::PrefixSet;

/// Errors that can occur while persisting a prefix set.
///
/// All of them are fatal for the run: without the file, the run produced
/// nothing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to create the destination's parent directory.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write the temporary output file.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to move the temporary file over the destination.
    #[error("Failed to replace '{}': {source}", path.display())]
    Rename {
        /// Destination that could not be replaced
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Abstraction for persisting the final prefix set of a run.
///
/// Implementations should replace any previous output atomically, so that
/// readers never observe a partially written list.
pub trait PrefixStore: Send + Sync {
    /// Returns a human-readable description of where output goes (for logs).
    fn destination(&self) -> String;

    /// Persists the set, replacing any previous output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn save(
        &self,
        set: &PrefixSet,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

/// Renders a set as the output file body.
///
/// Members are joined by a single `\n` in ascending byte-wise order; an
/// empty set renders as an empty string.
#[must_use]
pub fn render(set: &PrefixSet) -> String {
    set.iter().collect::<Vec<_>>().join("\n")
}
