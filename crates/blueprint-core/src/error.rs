//! Error types for the blueprint library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all blueprint operations.
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// Plan does not match the required structural contract
    #[error("Plan validation failed at '{path}': {reason}")]
    Validation { path: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors outside of scaffolding
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Scaffold execution failed and this run's creations were rolled back
    #[error(transparent)]
    Scaffold(#[from] ScaffoldFailure),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// The failure that aborted an execute-mode scaffold run.
///
/// Carries the original filesystem error together with the outcome of the
/// rollback that followed it, so callers can see which paths were removed
/// and which could not be.
#[derive(Error, Debug)]
#[error("{}", self.describe())]
pub struct ScaffoldFailure {
    /// Artifact path that was being created when the run failed
    pub path: String,
    /// The error that aborted the run
    #[source]
    pub source: std::io::Error,
    /// Paths removed by the rollback
    pub rolled_back: Vec<PathBuf>,
    /// Paths the rollback could not remove
    pub rollback_failures: Vec<RollbackFailure>,
}

impl ScaffoldFailure {
    fn describe(&self) -> String {
        let mut message = format!(
            "Scaffold failed at '{}': {} (rolled back {} path(s)",
            self.path,
            self.source,
            self.rolled_back.len()
        );
        if !self.rollback_failures.is_empty() {
            message.push_str(&format!(
                ", {} could not be removed",
                self.rollback_failures.len()
            ));
        }
        message.push(')');
        message
    }

    /// Whether every path created during the failed run was removed.
    pub fn is_clean(&self) -> bool {
        self.rollback_failures.is_empty()
    }
}

/// A path the rollback failed to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for RollbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Builder for creating schema validation errors.
pub struct ValidationErrorBuilder {
    path: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BlueprintError {
        BlueprintError::Validation {
            path: self.path,
            reason: reason.into(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BlueprintError {
        BlueprintError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BlueprintError {
    /// Creates a builder for schema validation errors.
    pub fn validation(path: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(path)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for Result to attach a path to filesystem errors.
pub trait FileSystemResultExt<T> {
    /// Map an I/O error to [`BlueprintError::FileSystem`] for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| BlueprintError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for blueprint operations
pub type Result<T> = std::result::Result<T, BlueprintError>;
