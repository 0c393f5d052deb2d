//! Steering-subsystem error type.

use thiserror::Error;

/// Errors produced by `helm-steer`.
///
/// Runs themselves do not fail — pathological outcomes (stall, out of
/// bounds, budget exhaustion) are [`StopReason`](crate::StopReason)s, not
/// errors.  Only construction with invalid physical parameters errors.
#[derive(Debug, Error)]
pub enum SteerError {
    #[error("vessel configuration error: {0}")]
    Config(String),
}

pub type SteerResult<T> = Result<T, SteerError>;
