//! Error types for the bag data model

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Version token is not `MAJOR.MINOR`
    #[error("Malformed version '{token}': {reason}")]
    MalformedVersion { token: String, reason: String },
}

impl Error {
    /// Create a malformed version error
    pub fn malformed_version<S: Into<String>, R: Into<String>>(token: S, reason: R) -> Self {
        Error::MalformedVersion {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
