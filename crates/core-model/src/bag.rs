//! Assembled package descriptor
//!
//! A [`Bag`] is never modified in place. Each `with_*` method consumes the
//! bag and returns a new one carrying the added fragment, which lets the
//! reader build it step by step while keeping partial values private.

use crate::fetch::{FetchItem, FetchLength};
use crate::manifest::Manifest;
use crate::metadata::Metadata;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default tag file encoding until `bagit.txt` says otherwise
pub const DEFAULT_TAG_FILE_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    root_directory: PathBuf,
    version: Version,
    file_encoding: String,
    payload_manifests: Vec<Manifest>,
    tag_manifests: Vec<Manifest>,
    metadata: Metadata,
    fetch_items: Vec<FetchItem>,
}

impl Bag {
    /// Start an empty bag rooted at `root_directory`
    pub fn new<P: Into<PathBuf>>(root_directory: P) -> Self {
        Self {
            root_directory: root_directory.into(),
            version: Version::new(0, 0),
            file_encoding: DEFAULT_TAG_FILE_ENCODING.to_string(),
            payload_manifests: Vec::new(),
            tag_manifests: Vec::new(),
            metadata: Metadata::new(),
            fetch_items: Vec::new(),
        }
    }

    /// Apply the `bagit.txt` declaration
    pub fn with_declaration<S: Into<String>>(self, version: Version, file_encoding: S) -> Self {
        Self {
            version,
            file_encoding: file_encoding.into(),
            ..self
        }
    }

    /// Replace payload and tag manifests; each list is ordered by algorithm
    pub fn with_manifests(self, mut payload: Vec<Manifest>, mut tag: Vec<Manifest>) -> Self {
        payload.sort_by(|a, b| a.algorithm().cmp(b.algorithm()));
        tag.sort_by(|a, b| a.algorithm().cmp(b.algorithm()));

        Self {
            payload_manifests: payload,
            tag_manifests: tag,
            ..self
        }
    }

    pub fn with_metadata(self, metadata: Metadata) -> Self {
        Self { metadata, ..self }
    }

    pub fn with_fetch_items(self, fetch_items: Vec<FetchItem>) -> Self {
        Self {
            fetch_items,
            ..self
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Value of `Tag-File-Character-Encoding`
    pub fn file_encoding(&self) -> &str {
        &self.file_encoding
    }

    pub fn payload_manifests(&self) -> &[Manifest] {
        &self.payload_manifests
    }

    pub fn tag_manifests(&self) -> &[Manifest] {
        &self.tag_manifests
    }

    pub fn payload_manifest(&self, algorithm: &str) -> Option<&Manifest> {
        self.payload_manifests
            .iter()
            .find(|m| m.algorithm() == algorithm)
    }

    pub fn tag_manifest(&self, algorithm: &str) -> Option<&Manifest> {
        self.tag_manifests.iter().find(|m| m.algorithm() == algorithm)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn fetch_items(&self) -> &[FetchItem] {
        &self.fetch_items
    }

    /// True when nothing is waiting to be fetched
    pub fn is_complete(&self) -> bool {
        self.fetch_items.is_empty()
    }

    /// Sum of the fetch lengths that are known; `-` entries are skipped
    ///
    /// Saturates at `u64::MAX` rather than overflowing.
    pub fn total_fetch_bytes(&self) -> u64 {
        self.fetch_items
            .iter()
            .filter_map(|item| item.length().bytes())
            .fold(0u64, u64::saturating_add)
    }

    /// Number of fetch items whose size is `-`
    pub fn unknown_fetch_lengths(&self) -> usize {
        self.fetch_items
            .iter()
            .filter(|item| item.length() == FetchLength::Unknown)
            .count()
    }
}
