//! `helm-field` — synthetic 2-D current fields.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`model`] | `FieldModel` — still / uniform / random generation models |
//! | [`field`] | `CurrentField` — the grid itself, generation, sampling    |
//! | [`blob`]  | Binary save/load of a field                               |
//! | [`error`] | `FieldError`, `FieldResult<T>`                            |
//!
//! # Generation models
//!
//! - **Still**: every cell is the zero vector.
//! - **Uniform**: every cell is `max_speed` rotated to a fixed direction.
//! - **Random**: the first row and column are seeded with uniform draws in
//!   `[1-dispersion, 1+dispersion]`; every other cell is the perturbed mean
//!   of its up, left, and up-left neighbours.  The averaging acts as a
//!   discrete relaxation, so nearby cells stay correlated while the
//!   dispersion coefficient controls local variance.
//!
//! After generation (still model excepted) the whole grid is rescaled so its
//! maximum vector magnitude equals `max_speed` exactly.  Fields are immutable
//! once built and shared read-only by every route planner and vessel.

pub mod blob;
pub mod error;
pub mod field;
pub mod model;


pub use error::{FieldError, FieldResult};
pub use field::{CurrentField, FieldSpec};
pub use model::FieldModel;
