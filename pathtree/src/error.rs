//! Error types for the pathtree library.
//!
//! Tree construction and navigation never fail: a query that matches nothing
//! yields `None`. The errors here cover the surfaces around the tree, such as
//! reading path lists, walking directories and loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathtree error.
///
/// # Examples
///
/// ```
/// use pathtree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathtree library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON input or output could not be processed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested node or resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A directory walk failed.
    #[error("walk failed at {}: {reason}", path.display())]
    Walk {
        /// The path being visited when the walk failed.
        path: PathBuf,
        /// The underlying failure.
        reason: String,
    },
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        Self::Walk {
            path,
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error indicates something was not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathtree::Error;
    ///
    /// let err = Error::NotFound { resource: "node home/missing".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
