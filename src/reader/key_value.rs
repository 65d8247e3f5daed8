/*!
 * Folded key-value tag files (`bagit.txt`, `bag-info.txt`, `package-info.txt`)
 *
 * A line starting with whitespace continues the value of the most recent key;
 * its full text, indentation included, is appended after a newline. Any other
 * line is split on the first delimiter only, so values may contain further
 * delimiter characters (`Contact-Phone: +1 555 0100 ext: 12`).
 */

use super::text::{content_lines, read_tag_file};
use crate::error::{BagError, LineContext, Result};
use bagit_core_model::Metadata;
use encoding_rs::Encoding;
use std::path::Path;
use tracing::debug;

/// Delimiter used by every BagIt key-value tag file
pub const TAG_DELIMITER: &str = ":";

/// Parse folded key-value lines into an ordered map
///
/// `source` is only used to label errors and log records.
pub fn parse_key_value<'a, I>(source: &Path, lines: I, delimiter: &str) -> Result<Metadata>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = Metadata::new();
    let mut last_key: Option<String> = None;

    for (line_number, line) in content_lines(lines) {
        let malformed =
            || BagError::MalformedKeyValueLine(LineContext::new(source, line_number, line));

        if line.starts_with(char::is_whitespace) {
            let key = last_key.as_deref().ok_or_else(malformed)?;
            debug!("Found an indented line - merging it to key [{}]", key);
            let appended = map.append_line(key, line);
            debug_assert!(appended, "folded line for unknown key [{}]", key);
            continue;
        }

        let (key, value) = line.split_once(delimiter).ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }
        let value = value.trim();

        debug!(
            "Found key [{}] value [{}] in file [{}]",
            key,
            value,
            source.display()
        );
        map.insert(key, value);
        last_key = Some(key.to_string());
    }

    Ok(map)
}

/// Read and parse a key-value tag file stored in `encoding`
pub fn read_key_value_file(
    path: &Path,
    delimiter: &str,
    encoding: &'static Encoding,
) -> Result<Metadata> {
    let contents = read_tag_file(path, encoding)?;
    parse_key_value(path, contents.lines(), delimiter)
}
