//! Field-subsystem error type.

use thiserror::Error;

/// Errors produced by `helm-field`.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The legacy integer model selector was out of range.
    #[error("unknown current model index {0} (expected 0, 1 or 2)")]
    UnknownModel(u8),

    #[error("field configuration error: {0}")]
    Config(String),

    /// A persisted blob failed validation (bad magic, truncated payload,
    /// or dimensions inconsistent with the payload length).
    #[error("field blob error: {0}")]
    Blob(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FieldResult<T> = Result<T, FieldError>;
