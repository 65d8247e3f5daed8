//! Fetch list entries

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Expected size of a fetch item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchLength {
    /// Size in bytes
    Known(u64),
    /// Written as `-` in `fetch.txt`
    Unknown,
}

impl FetchLength {
    /// Byte count, if one was given
    pub fn bytes(&self) -> Option<u64> {
        match self {
            FetchLength::Known(n) => Some(*n),
            FetchLength::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, FetchLength::Unknown)
    }
}

impl fmt::Display for FetchLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchLength::Known(n) => write!(f, "{}", n),
            FetchLength::Unknown => write!(f, "-"),
        }
    }
}

/// One line of `fetch.txt`: where to download a file and where it goes
///
/// `path` is kept exactly as written, relative to the bag root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchItem {
    url: Url,
    length: FetchLength,
    path: String,
}

impl FetchItem {
    pub fn new<S: Into<String>>(url: Url, length: FetchLength, path: S) -> Self {
        Self {
            url,
            length,
            path: path.into(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn length(&self) -> FetchLength {
        self.length
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
