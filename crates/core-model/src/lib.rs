//! Core data model for parsed BagIt packages
//!
//! This crate holds the values produced by the `bagit` reader. Every type here
//! is an immutable value: a [`Bag`] is assembled by chaining consuming
//! `with_*` transformations, so a half-built bag never escapes the reader and
//! a finished one can be shared freely between threads.
//!
//! # Key Concepts
//!
//! - **Version**: the `MAJOR.MINOR` BagIt version declared in `bagit.txt`
//! - **Manifest**: checksums for one digest algorithm, keyed by absolute path
//! - **Metadata**: ordered `bag-info.txt` fields, folded lines included
//! - **Fetch Item**: a file that still has to be downloaded into the bag
//!
//! # Example
//!
//! ```
//! use bagit_core_model::{Bag, Version};
//!
//! let version: Version = "0.97".parse().unwrap();
//! let bag = Bag::new("/data/bag").with_declaration(version, "UTF-8");
//!
//! assert_eq!(bag.version(), Version::new(0, 97));
//! assert!(bag.is_complete());
//! ```

pub mod bag;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod metadata;
pub mod version;

// Re-export main types for convenience
pub use bag::{Bag, DEFAULT_TAG_FILE_ENCODING};
pub use error::{Error, Result};
pub use fetch::{FetchItem, FetchLength};
pub use manifest::Manifest;
pub use metadata::Metadata;
pub use version::Version;

/// Name of the required bag declaration file
pub const BAGIT_FILE_NAME: &str = "bagit.txt";

/// Name of the optional fetch list
pub const FETCH_FILE_NAME: &str = "fetch.txt";

/// Current name of the bag metadata file
pub const BAG_INFO_FILE_NAME: &str = "bag-info.txt";

/// Metadata file name used by BagIt 0.93 - 0.95
pub const LEGACY_PACKAGE_INFO_FILE_NAME: &str = "package-info.txt";

/// Directory that may hold the control files instead of the bag root
pub const DOT_BAGIT_DIR_NAME: &str = ".bagit";
