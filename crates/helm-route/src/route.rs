//! The `Route` type and the two planning models.

use helm_core::Point;
use helm_field::CurrentField;

use crate::cost::route_cost;
use crate::spline;
use crate::{RouteError, RouteResult};

// ── Planner constants ─────────────────────────────────────────────────────────

/// Waypoints produced by the direct planner.
const DIRECT_WAYPOINTS: usize = 30;

/// Grid cells in the adapted planner's discrete working route.
const ADAPTED_SAMPLES: usize = 101;

/// Hill-climb passes over the interior points.
const ADAPTED_PASSES: usize = 10;

/// Waypoints produced by spline smoothing of the adapted route.
const SMOOTHED_WAYPOINTS: usize = 15;

// ── GridCell ──────────────────────────────────────────────────────────────────

/// An integer field cell used by the adapted planner's local search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    #[inline]
    fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

// ── RouteModel ────────────────────────────────────────────────────────────────

/// Closed set of route planning models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteModel {
    /// Straight line from start to end.
    Direct,
    /// Hill-climb against the path-cost functional, then spline smoothing.
    Adapted,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered sequence of waypoints between a start and an end point.
///
/// Computed exactly once via [`calculate`](Route::calculate) and read-only
/// afterwards; route-following vessels receive the waypoints by value, never
/// a shared handle to this object.
#[derive(Clone, Debug)]
pub struct Route {
    /// Presentation only.
    pub name:  String,
    /// Presentation only (hex color for external plotting).
    pub color: String,

    pub start: Point,
    pub model: RouteModel,

    waypoints: Vec<Point>,
    /// Intermediate candidate routes, one snapshot per hill-climb pass
    /// (adapted model only; empty for direct routes).
    history: Vec<Vec<GridCell>>,
}

impl Route {
    pub fn new(name: impl Into<String>, start: Point, model: RouteModel) -> Self {
        Self {
            name:      name.into(),
            color:     "#373737".into(),
            start,
            model,
            waypoints: Vec::new(),
            history:   Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Final waypoints, empty until [`calculate`](Route::calculate) runs.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Hill-climb snapshots (initial discrete route first).
    pub fn history(&self) -> &[Vec<GridCell>] {
        &self.history
    }

    /// Plan the route from `self.start` to `end` against `field`.
    ///
    /// Direct routes always succeed for in-bounds endpoints.  Adapted routes
    /// fail with [`RouteError::DegenerateSpline`] when the discrete route
    /// collapses (e.g. start too close to end for distinct grid cells); this
    /// is fatal and surfaced to the caller, never retried.
    pub fn calculate(&mut self, field: &CurrentField, end: Point) -> RouteResult<()> {
        for p in [self.start, end] {
            if !field.in_bounds(p) {
                return Err(RouteError::out_of_bounds(p, field.width(), field.height()));
            }
        }

        match self.model {
            RouteModel::Direct => {
                self.waypoints = direct_route(self.start, end);
            }
            RouteModel::Adapted => {
                let (best, history) = adapt_route(self.start, end, field);
                let smoothed: Vec<Point> = best.iter().map(|c| c.to_point()).collect();
                self.waypoints = spline::resample(&smoothed, SMOOTHED_WAYPOINTS)?;
                self.history = history;
            }
        }
        Ok(())
    }
}

// ── Direct planner ────────────────────────────────────────────────────────────

/// Fixed number of linearly interpolated points, endpoints inclusive.
fn direct_route(start: Point, end: Point) -> Vec<Point> {
    (0..DIRECT_WAYPOINTS)
        .map(|i| start.lerp(end, i as f64 / (DIRECT_WAYPOINTS - 1) as f64))
        .collect()
}

// ── Adapted planner ───────────────────────────────────────────────────────────

/// Greedy coordinate-wise local search.
///
/// Starting from the direct route discretized to integer cells, each pass
/// visits every interior point in order and tentatively moves it one cell in
/// -y, keeping the move iff it **strictly** lowers the path cost (ties keep
/// the incumbent).  Moves that would leave the grid are rejected outright.
/// Returns the final route plus one snapshot per pass (initial route first).
fn adapt_route(
    start: Point,
    end: Point,
    field: &CurrentField,
) -> (Vec<GridCell>, Vec<Vec<GridCell>>) {
    let initial: Vec<GridCell> = (0..ADAPTED_SAMPLES)
        .map(|i| {
            let p = start.lerp(end, i as f64 / (ADAPTED_SAMPLES - 1) as f64);
            GridCell { x: p.x as i64, y: p.y as i64 }
        })
        .collect();

    let mut best = initial.clone();
    let mut history = vec![initial];

    for _ in 0..ADAPTED_PASSES {
        let mut pass_cost = route_cost(&best, field);

        for i in 1..best.len() - 1 {
            if best[i].y == 0 {
                continue;
            }
            let mut candidate = best.clone();
            candidate[i].y -= 1;
            let candidate_cost = route_cost(&candidate, field);
            if candidate_cost < pass_cost {
                best = candidate;
                pass_cost = candidate_cost;
            }
        }
        history.push(best.clone());
    }

    (best, history)
}
