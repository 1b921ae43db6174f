//! The library error type and its machine-checkable codes.
//!
//! Every fallible operation in this crate returns [`Error`]. Callers that need
//! to branch on the failure class (for example "not found" versus a rejected
//! assignment) match on [`Error::code`] rather than on the message text.

use std::path::PathBuf;

/// Stable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A lookup by index, identity or display id found nothing.
    NotFound,
    /// A value, kind or cardinality does not fit the target slot.
    TypeMismatch,
    /// An argument is malformed or outside the allowed value set.
    InvalidArgument,
    /// An identity already exists in the target collection.
    UriNotUnique,
    /// The serialized graph could not be parsed or mapped onto SBOL objects.
    Serialization,
    /// The input file does not exist.
    FileNotFound,
    /// Any other I/O failure.
    Io,
}

impl ErrorCode {
    /// Returns the conventional upper-case name of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::UriNotUnique => "URI_NOT_UNIQUE",
            ErrorCode::Serialization => "SERIALIZATION",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::Io => "IO",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the SBOL object model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing matched `key` in `collection`.
    #[error("{key} not found in {collection}")]
    NotFound {
        /// What was searched (collection or property name).
        collection: String,
        /// The key that failed to resolve.
        key: String,
    },

    /// A value or object did not have the expected type or cardinality.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An object with the same identity is already present.
    #[error("an object with identity {0} already exists")]
    UriNotUnique(String),

    /// Parsing or mapping a serialized graph failed.
    #[error("cannot load SBOL graph: {0}")]
    Serialization(String),

    /// The named file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O failure while reading or writing a file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the machine-checkable code of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NotFound { .. } => ErrorCode::NotFound,
            Error::TypeMismatch(_) => ErrorCode::TypeMismatch,
            Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::UriNotUnique(_) => ErrorCode::UriNotUnique,
            Error::Serialization(_) => ErrorCode::Serialization,
            Error::FileNotFound(_) => ErrorCode::FileNotFound,
            Error::Io { .. } => ErrorCode::Io,
        }
    }

    pub(crate) fn not_found(collection: impl Into<String>, key: impl Into<String>) -> Self {
        Error::NotFound {
            collection: collection.into(),
            key: key.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path)
        } else {
            Error::Io { path, source }
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
