//! `helm-route` — route planning over a current field.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`route`]  | `Route`, `RouteModel`, direct and adapted planners         |
//! | [`cost`]   | The path-cost functional used by the adapted planner       |
//! | [`spline`] | Parametric natural cubic spline resampling                 |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                             |
//!
//! # Planning models
//!
//! - **Direct**: 30 linearly interpolated waypoints between start and end.
//! - **Adapted**: discretize the direct line to 101 grid cells, then run 10
//!   greedy hill-climb passes that nudge interior points one cell in -y
//!   whenever that strictly lowers the path cost, and finally smooth the
//!   winner with a cubic spline resampled to 15 waypoints.
//!
//! The hill climb is deliberately local — single neighbour direction, ties
//! keep the incumbent — so it finds a current-riding route, not an optimum.
//! Every intermediate candidate is retained in the route's `history` for
//! diagnostic inspection.

pub mod cost;
pub mod error;
pub mod route;
pub mod spline;


pub use cost::route_cost;
pub use error::{RouteError, RouteResult};
pub use route::{GridCell, Route, RouteModel};
