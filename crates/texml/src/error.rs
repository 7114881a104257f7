//! Error types for texml

use std::fmt;
use std::io;
use thiserror::Error;

/// Why a document could not be encoded
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Element or attribute name that is not an XML `Name`
    InvalidName { name: String },
    /// Character outside the XML 1.0 `Char` production
    InvalidChar { ch: char },
    /// Indentation wider than the writer supports
    InvalidIndent { indent: usize },
    /// The output sink refused the bytes
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name } => write!(f, "invalid name: {name:?}"),
            Self::InvalidChar { ch } => {
                write!(f, "invalid character: U+{:04X}", u32::from(*ch))
            }
            Self::InvalidIndent { indent } => write!(f, "indent too wide: {indent}"),
            Self::Io => write!(f, "write failed"),
        }
    }
}

/// Encoding error raised while rendering a document
///
/// This is the only failure texml reports. Building verbs and attaching
/// them to a document never fails.
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    path: String,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, path: impl Into<String>) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            path: path.into(),
            message,
        }
    }

    pub fn with_message(
        kind: ErrorKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Slash separated element path, e.g. `Response/Dial/Number`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn io(err: &io::Error, path: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Io, path, format!("write failed: {err}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "encoding error: {}", self.message)
        } else {
            write!(f, "encoding error at {}: {}", self.path, self.message)
        }
    }
}

/// Result type alias for texml
pub type Result<T> = std::result::Result<T, Error>;
