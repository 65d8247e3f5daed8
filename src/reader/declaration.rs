/*!
 * `bagit.txt` declaration: version and tag file encoding
 */

use super::key_value::{read_key_value_file, TAG_DELIMITER};
use crate::error::{BagError, Result};
use bagit_core_model::{Metadata, Version};
use encoding_rs::UTF_8;
use std::path::Path;
use tracing::debug;

pub const VERSION_KEY: &str = "BagIt-Version";
pub const ENCODING_KEY: &str = "Tag-File-Character-Encoding";

/// Parsed contents of `bagit.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub version: Version,
    pub file_encoding: String,
}

/// Parse a `MAJOR.MINOR` version token
pub fn parse_version(token: &str) -> Result<Version> {
    Ok(Version::parse(token)?)
}

/// Pull the declaration fields out of parsed `bagit.txt` lines
pub fn declaration_from_fields(path: &Path, fields: &Metadata) -> Result<Declaration> {
    let field = |name: &str| {
        fields.get(name).ok_or_else(|| BagError::MissingRequiredField {
            path: path.to_path_buf(),
            field: name.to_string(),
        })
    };

    let version = field(VERSION_KEY)?;
    debug!("BagIt-Version is [{}]", version);
    let encoding = field(ENCODING_KEY)?;
    debug!("Tag-File-Character-Encoding is [{}]", encoding);

    Ok(Declaration {
        version: parse_version(version).map_err(|e| e.with_version_path(path))?,
        file_encoding: encoding.to_string(),
    })
}

/// Read and parse `bagit.txt`
pub fn read_declaration(path: &Path) -> Result<Declaration> {
    debug!("Reading bagit.txt file");
    let fields = read_key_value_file(path, TAG_DELIMITER, UTF_8)?;
    declaration_from_fields(path, &fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::key_value::parse_key_value;
    use std::fs;
    use tempfile::tempdir;

    fn fields(text: &str) -> Metadata {
        parse_key_value(Path::new("bagit.txt"), text.lines(), TAG_DELIMITER).unwrap()
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("0.97").unwrap(), Version::new(0, 97));
        assert!(matches!(
            parse_version("97"),
            Err(BagError::MalformedVersion { path: None, .. })
        ));
    }

    #[test]
    fn test_declaration() {
        let decl = declaration_from_fields(
            Path::new("bagit.txt"),
            &fields("BagIt-Version: 1.0\nTag-File-Character-Encoding: UTF-8\n"),
        )
        .unwrap();

        assert_eq!(decl.version, Version::new(1, 0));
        assert_eq!(decl.file_encoding, "UTF-8");
    }

    #[test]
    fn test_missing_version_field() {
        let err = declaration_from_fields(
            Path::new("bagit.txt"),
            &fields("Tag-File-Character-Encoding: UTF-8\n"),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BagError::MissingRequiredField { ref field, .. } if field == VERSION_KEY
        ));
    }

    #[test]
    fn test_missing_encoding_field() {
        let err = declaration_from_fields(Path::new("bagit.txt"), &fields("BagIt-Version: 0.97\n"))
            .unwrap_err();

        assert!(matches!(
            err,
            BagError::MissingRequiredField { ref field, .. } if field == ENCODING_KEY
        ));
    }

    #[test]
    fn test_bad_version_carries_path() {
        let err = declaration_from_fields(
            Path::new("/bag/bagit.txt"),
            &fields("BagIt-Version: one.two\nTag-File-Character-Encoding: UTF-8\n"),
        )
        .unwrap_err();

        match err {
            BagError::MalformedVersion { path, token, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("/bag/bagit.txt")));
                assert_eq!(token, "one.two");
            }
            other => panic!("expected MalformedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_read_declaration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bagit.txt");
        fs::write(
            &path,
            "BagIt-Version: 0.97\nTag-File-Character-Encoding: ISO-8859-1\n",
        )
        .unwrap();

        let decl = read_declaration(&path).unwrap();
        assert_eq!(decl.version, Version::new(0, 97));
        assert_eq!(decl.file_encoding, "ISO-8859-1");
    }
}
