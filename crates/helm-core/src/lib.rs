//! `helm-core` — foundational types for the `helm` vessel simulator.
//!
//! This crate is a dependency of every other `helm-*` crate.  It intentionally
//! has no `helm-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).  Everything here is infallible; each downstream crate
//! defines its own error enum for its fallible surface.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `Point`, `Vec2`, heading/bearing functions            |
//! | [`rng`]     | `SimRng` — deterministic seeded RNG wrapper           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{Point, Vec2};
pub use rng::SimRng;
