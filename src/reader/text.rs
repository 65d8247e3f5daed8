/*!
 * Tag file loading and line iteration
 *
 * `bagit.txt` is always UTF-8. Every other tag file is decoded with the
 * encoding named by its `Tag-File-Character-Encoding`.
 */

use crate::error::{BagError, Result};
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Look up a `Tag-File-Character-Encoding` label such as `UTF-8` or `ISO-8859-1`
///
/// Labels are matched case-insensitively. Labels that only map to the
/// replacement decoder are treated as unknown.
pub fn tag_file_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label_no_replacement(label.trim().as_bytes())
}

/// Read a whole tag file into memory, decoding it with `encoding`
///
/// A byte order mark for `encoding` is dropped. Byte sequences that are not
/// valid in `encoding` fail the read instead of being replaced. The handle is
/// released before returning, on success or failure.
pub fn read_tag_file(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| BagError::unreadable(path, e))?;

    let body = match Encoding::for_bom(&bytes) {
        Some((bom_encoding, bom_length)) if bom_encoding == encoding => &bytes[bom_length..],
        _ => &bytes[..],
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(Cow::into_owned)
        .ok_or_else(|| {
            let detail = format!("stream did not contain valid {}", encoding.name());
            BagError::unreadable(path, io::Error::new(io::ErrorKind::InvalidData, detail))
        })
}

/// Non-empty lines with their 1-based line numbers
pub fn content_lines<'a, I>(lines: I) -> impl Iterator<Item = (usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use std::io::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_read_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bagit.txt");
        fs::write(&path, "\u{feff}BagIt-Version: 1.0\n").unwrap();

        let contents = read_tag_file(&path, UTF_8).unwrap();
        assert_eq!(contents, "BagIt-Version: 1.0\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match read_tag_file(&path, UTF_8) {
            Err(BagError::FileUnreadable { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected FileUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bag-info.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        match read_tag_file(&path, UTF_8) {
            Err(BagError::FileUnreadable { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::InvalidData);
            }
            other => panic!("expected FileUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_read_latin1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bag-info.txt");
        fs::write(&path, b"Contact-Name: Jos\xE9\n").unwrap();

        let encoding = tag_file_encoding("ISO-8859-1").unwrap();
        assert_eq!(encoding, WINDOWS_1252);
        assert_eq!(read_tag_file(&path, encoding).unwrap(), "Contact-Name: Jos\u{e9}\n");
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!(tag_file_encoding("UTF-8"), Some(UTF_8));
        assert_eq!(tag_file_encoding(" utf-8 "), Some(UTF_8));
        assert_eq!(tag_file_encoding("latin1"), Some(WINDOWS_1252));
        assert!(tag_file_encoding("EBCDIC-XYZ").is_none());
        assert!(tag_file_encoding("iso-2022-kr").is_none());
    }

    #[test]
    fn test_content_lines_numbering() {
        let text = "a\r\n\nb\n";
        let lines: Vec<_> = content_lines(text.lines()).collect();
        assert_eq!(lines, vec![(1, "a"), (3, "b")]);
    }
}
