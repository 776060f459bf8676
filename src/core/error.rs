use thiserror::Error;

/// Failures from the persisted view-mode store.
///
/// None of these reach the user: callers treat every variant as "key absent"
/// and fall back to the default view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
