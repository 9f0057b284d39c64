//! File-based prefix list persistence.

use std::path::{Path, PathBuf};

use crate::prefix::PrefixSet;

use super::{PrefixStore, StoreError, render};

/// File-based implementation of [`PrefixStore`].
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
///
/// The destination is either the previous list or the new one, never a
/// mix. Missing parent directories are created first.
#[derive(Debug, Clone)]
pub struct FilePrefixStore {
    path: PathBuf,
}

impl FilePrefixStore {
    /// Creates a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Performs the blocking save.
    ///
    /// Separated out so it can be wrapped in `spawn_blocking`.
    fn save_blocking(path: &Path, content: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        // Append rather than replace the extension: vpn-ipv4.txt -> vpn-ipv4.txt.tmp
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

        std::fs::write(&temp_path, content).map_err(|source| StoreError::Write {
            path: temp_path.clone(),
            source,
        })?;

        if let Err(source) = std::fs::rename(&temp_path, path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(StoreError::Rename {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(())
    }
}

impl PrefixStore for FilePrefixStore {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    async fn save(&self, set: &PrefixSet) -> Result<(), StoreError> {
        let path = self.path.clone();
        let content = render(set);

        tokio::task::spawn_blocking(move || Self::save_blocking(&path, &content))
            .await
            .expect("spawn_blocking task panicked")
    }
}
