//! `helm-steer` — steering laws and the tick-loop integrator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`law`]        | `SteeringLaw` — the closed set of control laws           |
//! | [`vessel`]     | `Vessel`, `VesselConfig`, `StopReason`, the tick loop    |
//! | [`trajectory`] | `Trajectory` — the append-only run recorder              |
//! | [`error`]      | `SteerError`, `SteerResult<T>`                           |
//!
//! # Tick loop
//!
//! Every law shares one per-tick update.  With position `p`, heading `h`,
//! tick `Δt`, efficiency `η`, and the current `c` sampled at `p`'s cell:
//!
//! ```text
//! p' = p + Δt·η·c + Δt·base_speed·(cos h, sin h)
//! ```
//!
//! and one termination predicate: next position out of bounds, distance to
//! the active target within `precision`, displacement below the stall
//! epsilon, or the tick budget exhausted.  The run reports which of these
//! fired as a [`StopReason`], so "stuck" is distinguishable from "left the
//! map"; only a precision-reached stop on a terminal target sets the
//! vessel's `arrived` flag.
//!
//! The loop is single-threaded and synchronous: each vessel runs to
//! completion against a shared read-only field before the next begins, and
//! owns its mutable run-state exclusively.

pub mod error;
pub mod law;
pub mod trajectory;
pub mod vessel;


pub use error::{SteerError, SteerResult};
pub use law::SteeringLaw;
pub use trajectory::Trajectory;
pub use vessel::{StopReason, Vessel, VesselConfig};
