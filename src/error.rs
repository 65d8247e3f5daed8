/*!
 * Error types for bag reading
 */

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, BagError>;

/// Location of a rejected line, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    /// File the line came from
    pub path: PathBuf,
    /// 1-based line number
    pub line_number: usize,
    /// Line text without its terminator
    pub line: String,
}

impl LineContext {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, line_number: usize, line: S) -> Self {
        Self {
            path: path.into(),
            line_number,
            line: line.into(),
        }
    }
}

impl fmt::Display for LineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: '{}'",
            self.path.display(),
            self.line_number,
            self.line
        )
    }
}

#[derive(Debug)]
pub enum BagError {
    /// A control file exists but could not be opened or read
    FileUnreadable { path: PathBuf, source: io::Error },

    /// `bagit.txt` is absent
    MissingRequiredFile(PathBuf),

    /// `bagit.txt` lacks a mandatory field
    MissingRequiredField { path: PathBuf, field: String },

    /// Version token is not `MAJOR.MINOR`
    MalformedVersion {
        path: Option<PathBuf>,
        token: String,
        reason: String,
    },

    /// Key line without a delimiter, empty key, or folded line with no key before it
    MalformedKeyValueLine(LineContext),

    /// Manifest line without both a checksum and a path
    MalformedManifestLine(LineContext),

    /// Fetch line with bad field count, length or URL
    MalformedFetchLine { context: LineContext, reason: String },

    /// `Tag-File-Character-Encoding` names an encoding that is not known
    UnsupportedEncoding { path: PathBuf, label: String },

    /// File name does not look like `(tag)manifest-<alg>.<ext>`
    UnrecognizedManifestName(String),

    /// Configuration error
    Config(String),
}

impl BagError {
    pub(crate) fn unreadable(path: &Path, source: io::Error) -> Self {
        BagError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the file a version token came from
    pub fn with_version_path(self, path: &Path) -> Self {
        match self {
            BagError::MalformedVersion { token, reason, .. } => BagError::MalformedVersion {
                path: Some(path.to_path_buf()),
                token,
                reason,
            },
            other => other,
        }
    }

    /// Path of the file that caused the failure, when known
    pub fn path(&self) -> Option<&Path> {
        match self {
            BagError::FileUnreadable { path, .. }
            | BagError::MissingRequiredFile(path)
            | BagError::MissingRequiredField { path, .. }
            | BagError::UnsupportedEncoding { path, .. } => Some(path),
            BagError::MalformedVersion { path, .. } => path.as_deref(),
            BagError::MalformedKeyValueLine(ctx) | BagError::MalformedManifestLine(ctx) => {
                Some(&ctx.path)
            }
            BagError::MalformedFetchLine { context, .. } => Some(&context.path),
            BagError::UnrecognizedManifestName(_) | BagError::Config(_) => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            BagError::FileUnreadable { .. } => ErrorCategory::Io,
            BagError::MissingRequiredFile(_) | BagError::MissingRequiredField { .. } => {
                ErrorCategory::Structure
            }
            BagError::MalformedVersion { .. }
            | BagError::MalformedKeyValueLine(_)
            | BagError::MalformedManifestLine(_)
            | BagError::MalformedFetchLine { .. }
            | BagError::UnsupportedEncoding { .. }
            | BagError::UnrecognizedManifestName(_) => ErrorCategory::Syntax,
            BagError::Config(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error category for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Opening or reading a file failed
    Io,
    /// Required files or fields are missing
    Structure,
    /// A tag file has content that does not parse
    Syntax,
    /// Reader configuration could not be loaded
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Structure => write!(f, "structure"),
            ErrorCategory::Syntax => write!(f, "syntax"),
            ErrorCategory::Configuration => write!(f, "configuration"),
        }
    }
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagError::FileUnreadable { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            BagError::MissingRequiredFile(path) => {
                write!(f, "Required file not found: {}", path.display())
            }
            BagError::MissingRequiredField { path, field } => {
                write!(f, "{} is missing required field '{}'", path.display(), field)
            }
            BagError::MalformedVersion {
                path: Some(path),
                token,
                reason,
            } => {
                write!(
                    f,
                    "Malformed version '{}' in {}: {}",
                    token,
                    path.display(),
                    reason
                )
            }
            BagError::MalformedVersion {
                path: None,
                token,
                reason,
            } => {
                write!(f, "Malformed version '{}': {}", token, reason)
            }
            BagError::MalformedKeyValueLine(ctx) => {
                write!(f, "Malformed key-value line at {}", ctx)
            }
            BagError::MalformedManifestLine(ctx) => {
                write!(f, "Malformed manifest line at {}", ctx)
            }
            BagError::MalformedFetchLine { context, reason } => {
                write!(f, "Malformed fetch line at {}: {}", context, reason)
            }
            BagError::UnsupportedEncoding { path, label } => {
                write!(
                    f,
                    "Unsupported tag file encoding '{}' declared in {}",
                    label,
                    path.display()
                )
            }
            BagError::UnrecognizedManifestName(name) => {
                write!(f, "Unrecognized manifest file name: {}", name)
            }
            BagError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BagError::FileUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<bagit_core_model::Error> for BagError {
    fn from(err: bagit_core_model::Error) -> Self {
        match err {
            bagit_core_model::Error::MalformedVersion { token, reason } => {
                BagError::MalformedVersion {
                    path: None,
                    token,
                    reason,
                }
            }
        }
    }
}
