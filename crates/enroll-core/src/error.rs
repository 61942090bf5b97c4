//! Error types for the enrollment reconciler.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for plan storage and reconciliation.
#[derive(Error, Debug)]
pub enum EnrollError {
    /// A control the page contract requires is not on the page
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },
    /// Direct selection of an action the entry's dropdown does not offer
    #[error("Option {action} not found for CRN {crn}")]
    OptionNotFound { crn: String, action: String },
    /// Added CRNs did not show up in the summary within the wait budget
    #[error("Still missing items in summary after waiting: {}", .missing.join(", "))]
    AddTimeout { missing: Vec<String> },
    /// A summary entry disappeared between the wait and its action execution
    #[error("CRN {crn} not found in summary")]
    SummaryEntryMissing { crn: String },
    /// The CRN is not part of the stored plan
    #[error("CRN {crn} is not in the plan")]
    CrnNotInPlan { crn: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> EnrollError {
        EnrollError::Database {
            message: self.message,
            source,
        }
    }
}

impl EnrollError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Shorthand for an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EnrollError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn element_not_found(selector: impl Into<String>) -> Self {
        EnrollError::ElementNotFound {
            selector: selector.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| EnrollError::database(message).with_source(e))
    }
}

/// Result type alias for enrollment operations
pub type Result<T> = std::result::Result<T, EnrollError>;
