/*!
 * Payload and tag manifest parsing
 *
 * Each line is `<checksum><whitespace><relative path>`. Paths are resolved
 * against the bag root, never against the directory holding the manifest,
 * so manifests under `.bagit/` still describe files relative to the bag.
 */

use super::text::{content_lines, read_tag_file};
use crate::error::{BagError, LineContext, Result};
use bagit_core_model::Manifest;
use encoding_rs::Encoding;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// `(tag)manifest-<alg>.<ext>`; the algorithm stops at the next `-` or `.`
static MANIFEST_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(tag)?manifest-([^-.]+)\.[^.]+$").expect("manifest name pattern is valid")
});

/// Loose shape used when listing the control directory
static MANIFEST_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(tag)?manifest-.*\.txt$").expect("manifest candidate pattern is valid")
});

/// Which set a manifest belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `manifest-<alg>.txt`: checksums of payload files
    Payload,
    /// `tagmanifest-<alg>.txt`: checksums of tag files
    Tag,
}

impl ManifestKind {
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.starts_with("tag") {
            ManifestKind::Tag
        } else {
            ManifestKind::Payload
        }
    }
}

/// True when a directory entry should be treated as a manifest
pub fn is_manifest_candidate(file_name: &str) -> bool {
    MANIFEST_CANDIDATE.is_match(file_name)
}

/// Digest algorithm named by a manifest file (`manifest-sha256.txt` -> `sha256`)
pub fn manifest_algorithm(file_name: &str) -> Result<&str> {
    MANIFEST_NAME
        .captures(file_name)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .ok_or_else(|| BagError::UnrecognizedManifestName(file_name.to_string()))
}

/// Resolve a manifest-relative path inside `root`
///
/// Leading separators are dropped so an absolute-looking entry cannot
/// point outside the bag.
pub fn resolve_entry_path(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.trim_start_matches('/'))
}

/// Parse manifest lines
///
/// The algorithm comes from the file name of `manifest_file`; entries are
/// keyed by `resolution_root` joined with each relative path. A relative
/// `resolution_root` is first made absolute against the current directory,
/// so keys are always absolute. A repeated path keeps the checksum from its
/// last line.
pub fn parse_manifest<'a, I>(
    manifest_file: &Path,
    lines: I,
    resolution_root: &Path,
) -> Result<Manifest>
where
    I: IntoIterator<Item = &'a str>,
{
    let file_name = manifest_file
        .file_name()
        .map(|name| name.to_string_lossy())
        .ok_or_else(|| BagError::UnrecognizedManifestName(manifest_file.display().to_string()))?;
    let algorithm = manifest_algorithm(&file_name)?;
    let resolution_root = std::path::absolute(resolution_root)
        .map_err(|e| BagError::unreadable(resolution_root, e))?;

    let mut entries = BTreeMap::new();

    for (line_number, line) in content_lines(lines) {
        let (checksum, relative) = split_manifest_line(line).ok_or_else(|| {
            BagError::MalformedManifestLine(LineContext::new(manifest_file, line_number, line))
        })?;

        let path = resolve_entry_path(&resolution_root, relative);
        debug!(
            "Read checksum [{}] and file [{}] from manifest [{}]",
            checksum,
            path.display(),
            manifest_file.display()
        );
        entries.insert(path, checksum.to_string());
    }

    Ok(Manifest::new(algorithm, entries))
}

/// Read a manifest file stored in `encoding`, resolving its entries against `bag_root`
pub fn read_manifest(
    manifest_file: &Path,
    bag_root: &Path,
    encoding: &'static Encoding,
) -> Result<Manifest> {
    debug!("Reading manifest [{}]", manifest_file.display());
    // Check the name before touching the file
    if let Some(name) = manifest_file.file_name() {
        manifest_algorithm(&name.to_string_lossy())?;
    }

    let contents = read_tag_file(manifest_file, encoding)?;
    parse_manifest(manifest_file, contents.lines(), bag_root)
}

fn split_manifest_line(line: &str) -> Option<(&str, &str)> {
    let (checksum, rest) = line.split_once(char::is_whitespace)?;
    let relative = rest.trim_start();

    if checksum.is_empty() || relative.is_empty() {
        return None;
    }

    Some((checksum, relative))
}
