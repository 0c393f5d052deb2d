//! Route-subsystem error type.

use helm_core::Point;
use thiserror::Error;

/// Errors produced by `helm-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Spline fitting needs at least two points and strictly positive chord
    /// lengths between consecutive points.  Raised fatally, never retried.
    #[error("degenerate spline input: {0}")]
    DegenerateSpline(String),

    #[error("point {point} lies outside the {width}x{height} field")]
    OutOfBounds { point: Point, width: usize, height: usize },

    #[error("route configuration error: {0}")]
    Config(String),
}

impl RouteError {
    pub(crate) fn out_of_bounds(point: Point, width: usize, height: usize) -> Self {
        RouteError::OutOfBounds { point, width, height }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
