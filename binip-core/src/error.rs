//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Rejected state machine transition
///
/// Always recovered locally by the router: the error text becomes the status
/// message and the session rolls back to the nearest safe state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum TransitionError {
    /// The session is quitting; nothing leaves this state
    #[error("cannot transition from quitting state")]
    Terminal,

    /// Operational state needs a persistence backend
    #[error("database required before operational state")]
    MissingDependency,

    /// Confirming or saving needs a non-empty prefix
    #[error("prefix must be selected or entered")]
    PrefixRequired,

    /// Onboarding sub-states only exist while onboarding
    #[error("onboarding step requested outside onboarding")]
    NotOnboarding,
}

/// Persistence layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum StoreError {
    /// Underlying file or device failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding of the stored document failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored document is readable but not well formed
    #[error("Corrupt store: {0}")]
    Corrupt(String),

    /// Bucket does not exist
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),
}

impl StoreError {
    /// Whether it is expected behavior (missing bucket, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::BucketNotFound(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Persistence layer Result type alias
pub type StoreResult<T> = std::result::Result<T, StoreError>;
