/*!
 * BagIt - reader for BagIt archival packages
 *
 * Parses the control files of a bag into an immutable `Bag` value:
 * - `bagit.txt` version and tag file encoding
 * - payload and tag manifests (`manifest-<alg>.txt`, `tagmanifest-<alg>.txt`)
 * - `bag-info.txt` metadata, falling back to the legacy `package-info.txt`
 * - `fetch.txt` download list
 *
 * Control files are read from `<root>/.bagit/` when that directory exists.
 * Each sub-parser is public so verification tooling can reuse it on its own.
 */

pub mod config;
pub mod error;
pub mod logging;
pub mod reader;

// Re-export commonly used types
pub use bagit_core_model::{Bag, FetchItem, FetchLength, Manifest, Metadata, Version};
pub use config::{LogLevel, ReaderConfig};
pub use error::{BagError, ErrorCategory, LineContext, Result};
pub use reader::{
    manifest_algorithm, parse_fetch, parse_key_value, parse_manifest, parse_version, read_bag,
    tag_file_encoding,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
