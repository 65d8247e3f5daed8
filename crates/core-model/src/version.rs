//! BagIt version declaration
//!
//! `bagit.txt` declares the version as `MAJOR.MINOR`. Only the first two
//! dot-separated segments are read; anything after a second `.` is ignored.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `MAJOR.MINOR` BagIt version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Parse a version token such as `0.97`
    pub fn parse(token: &str) -> Result<Self> {
        let (major, rest) = token
            .split_once('.')
            .ok_or_else(|| Error::malformed_version(token, "expected MAJOR.MINOR"))?;

        // "1.0.2" reads as 1.0
        let minor = rest.split_once('.').map_or(rest, |(minor, _)| minor);

        Ok(Self {
            major: parse_component(token, "major", major)?,
            minor: parse_component(token, "minor", minor)?,
        })
    }
}

fn parse_component(token: &str, name: &str, segment: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+', which is not a base-10 digit run
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_version(
            token,
            format!("{} component '{}' is not a non-negative integer", name, segment),
        ));
    }

    segment.parse::<u64>().map_err(|e| {
        Error::malformed_version(token, format!("{} component '{}': {}", name, segment, e))
    })
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
