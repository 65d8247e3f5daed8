//! Checksum manifest for a single digest algorithm

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Checksums from one `manifest-<alg>.txt` or `tagmanifest-<alg>.txt` file
///
/// Keys are absolute paths resolved against the bag root. Checksums are kept
/// exactly as written; comparing them against file content is left to the
/// verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    algorithm: String,
    entries: BTreeMap<PathBuf, String>,
}

impl Manifest {
    /// Create a manifest from parsed entries
    pub fn new<S: Into<String>>(algorithm: S, entries: BTreeMap<PathBuf, String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            entries,
        }
    }

    /// Digest algorithm taken from the manifest file name (e.g. `sha256`)
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn entries(&self) -> &BTreeMap<PathBuf, String> {
        &self.entries
    }

    /// Look up the recorded checksum for an absolute path
    pub fn checksum_for(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }
}
