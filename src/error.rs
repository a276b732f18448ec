use thiserror::Error;

/// Unified error type for version-gate operations
///
/// `Structure`, `Schema` and `Rule` carry a complete, human-readable
/// diagnostic and display it verbatim.
#[derive(Error, Debug)]
pub enum VersionGateError {
    /// Missing file or invalid JSON
    #[error("{0}")]
    Structure(String),

    /// Missing, mistyped or out-of-range field in a version record
    #[error("{0}")]
    Schema(String),

    /// Monotonicity or release consistency rule broken
    #[error("{0}")]
    Rule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a structural error (missing file, invalid JSON)
    pub fn structure(msg: impl Into<String>) -> Self {
        VersionGateError::Structure(msg.into())
    }

    /// Create a schema error for a version record
    pub fn schema(msg: impl Into<String>) -> Self {
        VersionGateError::Schema(msg.into())
    }

    /// Create a rule violation
    pub fn rule(msg: impl Into<String>) -> Self {
        VersionGateError::Rule(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }
}
