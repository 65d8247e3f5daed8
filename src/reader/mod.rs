/*!
 * Bag reading
 *
 * `read_bag` locates the control files of a bag and folds each parsed file
 * into a [`Bag`]. Every step takes the bag built so far by value and returns
 * a new one, so a partially read bag never leaves this module and the
 * finished value can be handed to other threads as-is.
 */

pub mod declaration;
pub mod fetch;
pub mod key_value;
pub mod manifest;
pub mod text;

use crate::error::{BagError, Result};
use bagit_core_model::{
    Bag, Metadata, BAGIT_FILE_NAME, BAG_INFO_FILE_NAME, DOT_BAGIT_DIR_NAME, FETCH_FILE_NAME,
    LEGACY_PACKAGE_INFO_FILE_NAME,
};
use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use declaration::{parse_version, read_declaration, Declaration};
pub use fetch::{parse_fetch, read_fetch_file};
pub use key_value::{parse_key_value, read_key_value_file, TAG_DELIMITER};
pub use manifest::{manifest_algorithm, parse_manifest, read_manifest, ManifestKind};
pub use text::tag_file_encoding;

/// Read the bag rooted at `root_directory`
///
/// Either the whole bag is returned or the first failure is; there is no
/// partial result.
pub fn read_bag(root_directory: &Path) -> Result<Bag> {
    assemble(root_directory).inspect_err(|e| {
        warn!(
            "Failed to read bag [{}] ({}): {}",
            root_directory.display(),
            e.category(),
            e
        );
    })
}

fn assemble(root_directory: &Path) -> Result<Bag> {
    let root = std::path::absolute(root_directory)
        .map_err(|e| BagError::unreadable(root_directory, e))?;
    let control_dir = locate_control_dir(&root);
    debug!("Control files for [{}] are in [{}]", root.display(), control_dir.display());

    let bagit_file = control_dir.join(BAGIT_FILE_NAME);
    if !bagit_file.exists() {
        return Err(BagError::MissingRequiredFile(bagit_file));
    }

    let bag = read_bagit_text_file(&bagit_file, Bag::new(&root))?;
    let bag = read_all_manifests(&control_dir, bag)?;
    let bag = read_bag_metadata(&control_dir, bag)?;

    let fetch_file = control_dir.join(FETCH_FILE_NAME);
    let bag = if fetch_file.exists() {
        read_fetch(&fetch_file, bag)?
    } else {
        bag
    };

    info!(
        "Read bag [{}]: version {}, {} payload manifest(s), {} tag manifest(s), \
         {} metadata field(s), {} fetch item(s)",
        bag.root_directory().display(),
        bag.version(),
        bag.payload_manifests().len(),
        bag.tag_manifests().len(),
        bag.metadata().len(),
        bag.fetch_items().len()
    );

    Ok(bag)
}

/// Directory holding the control files: `<root>/.bagit` if present, else `root`
pub fn locate_control_dir(root_directory: &Path) -> PathBuf {
    let dot_bagit = root_directory.join(DOT_BAGIT_DIR_NAME);
    if dot_bagit.is_dir() {
        dot_bagit
    } else {
        root_directory.to_path_buf()
    }
}

/// Apply `bagit.txt` to `bag`
///
/// Fails with `UnsupportedEncoding` when the declared tag file encoding is
/// not a known label, before any other tag file is opened.
pub fn read_bagit_text_file(bagit_file: &Path, bag: Bag) -> Result<Bag> {
    let declaration = read_declaration(bagit_file)?;
    if tag_file_encoding(&declaration.file_encoding).is_none() {
        return Err(BagError::UnsupportedEncoding {
            path: bagit_file.to_path_buf(),
            label: declaration.file_encoding,
        });
    }
    Ok(bag.with_declaration(declaration.version, declaration.file_encoding))
}

/// Encoding the remaining tag files of `bag` are stored in
fn declared_encoding(bag: &Bag) -> Result<&'static Encoding> {
    tag_file_encoding(bag.file_encoding()).ok_or_else(|| BagError::UnsupportedEncoding {
        path: bag.root_directory().to_path_buf(),
        label: bag.file_encoding().to_string(),
    })
}

/// Find and parse every manifest in `control_dir`
///
/// Entries are resolved against the bag's root directory, not `control_dir`.
/// Having no manifests at all is not an error here.
pub fn read_all_manifests(control_dir: &Path, bag: Bag) -> Result<Bag> {
    let encoding = declared_encoding(&bag)?;
    let mut payload = Vec::new();
    let mut tag = Vec::new();

    for manifest_file in manifest_files(control_dir)? {
        let name = manifest_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let manifest = read_manifest(&manifest_file, bag.root_directory(), encoding)?;

        match ManifestKind::from_file_name(&name) {
            ManifestKind::Tag => tag.push(manifest),
            ManifestKind::Payload => payload.push(manifest),
        }
    }

    Ok(bag.with_manifests(payload, tag))
}

/// Manifest files in `control_dir`, sorted by name
pub fn manifest_files(control_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(control_dir).map_err(|e| BagError::unreadable(control_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BagError::unreadable(control_dir, e))?;
        let path = entry.path();

        let is_candidate = entry
            .file_name()
            .to_str()
            .is_some_and(manifest::is_manifest_candidate);
        if is_candidate && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Apply `bag-info.txt`, or the legacy `package-info.txt` when it is absent
pub fn read_bag_metadata(control_dir: &Path, bag: Bag) -> Result<Bag> {
    let encoding = declared_encoding(&bag)?;
    let bag_info = control_dir.join(BAG_INFO_FILE_NAME);
    let package_info = control_dir.join(LEGACY_PACKAGE_INFO_FILE_NAME);

    let metadata = if bag_info.exists() {
        debug!("Reading bag metadata from [{}]", bag_info.display());
        read_key_value_file(&bag_info, TAG_DELIMITER, encoding)?
    } else if package_info.exists() {
        debug!("Reading legacy bag metadata from [{}]", package_info.display());
        read_key_value_file(&package_info, TAG_DELIMITER, encoding)?
    } else {
        Metadata::new()
    };

    Ok(bag.with_metadata(metadata))
}

/// Apply `fetch.txt` to `bag`
pub fn read_fetch(fetch_file: &Path, bag: Bag) -> Result<Bag> {
    let items = read_fetch_file(fetch_file, declared_encoding(&bag)?)?;
    Ok(bag.with_fetch_items(items))
}
