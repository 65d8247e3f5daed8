/*!
 * `fetch.txt` parsing
 *
 * Each line is `<url> <length|-> <path>`. Only the first two whitespace runs
 * separate fields, so the destination path may itself contain spaces.
 */

use super::text::{content_lines, read_tag_file};
use crate::error::{BagError, LineContext, Result};
use bagit_core_model::{FetchItem, FetchLength};
use encoding_rs::Encoding;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Length token meaning the size is not known in advance
pub const UNKNOWN_LENGTH: &str = "-";

/// Parse fetch lines in file order; duplicates are kept
pub fn parse_fetch<'a, I>(source: &Path, lines: I) -> Result<Vec<FetchItem>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items = Vec::new();

    for (line_number, line) in content_lines(lines) {
        let item = parse_fetch_line(line).map_err(|reason| BagError::MalformedFetchLine {
            context: LineContext::new(source, line_number, line),
            reason,
        })?;

        debug!(
            "Read URL [{}] length [{}] path [{}] from fetch file [{}]",
            item.url(),
            item.length(),
            item.path(),
            source.display()
        );
        items.push(item);
    }

    Ok(items)
}

/// Read and parse a fetch file stored in `encoding`
pub fn read_fetch_file(path: &Path, encoding: &'static Encoding) -> Result<Vec<FetchItem>> {
    let contents = read_tag_file(path, encoding)?;
    parse_fetch(path, contents.lines())
}

/// Parse a length field: a decimal byte count or `-`
pub fn parse_length(token: &str) -> std::result::Result<FetchLength, String> {
    if token == UNKNOWN_LENGTH {
        return Ok(FetchLength::Unknown);
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("length '{}' is neither a byte count nor '-'", token));
    }

    token
        .parse::<u64>()
        .map(FetchLength::Known)
        .map_err(|e| format!("length '{}': {}", token, e))
}

fn parse_fetch_line(line: &str) -> std::result::Result<FetchItem, String> {
    let (url, rest) = next_field(line).ok_or("expected URL, length and path")?;
    let (length, path) = next_field(rest).ok_or("expected URL, length and path")?;
    let path = path.trim_start();
    if path.is_empty() {
        return Err("missing destination path".to_string());
    }

    let url = Url::parse(url).map_err(|e| format!("invalid URL '{}': {}", url, e))?;
    let length = parse_length(length)?;

    Ok(FetchItem::new(url, length, path))
}

/// Split off one whitespace-delimited field, returning it and the remainder
fn next_field(text: &str) -> Option<(&str, &str)> {
    let (field, rest) = text.split_once(char::is_whitespace)?;
    if field.is_empty() {
        return None;
    }
    Some((field, rest.trim_start()))
}
