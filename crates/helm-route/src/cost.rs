//! The path-cost functional.

use helm_core::Vec2;
use helm_field::CurrentField;

use crate::route::GridCell;

/// Cost of a discrete route: the sum over consecutive segments of the dot
/// product between the segment displacement and the current sampled at the
/// segment's origin cell.
///
/// A forward-Euler "work" approximation, not a calibrated distance or time
/// cost.  Sign convention: the adapted planner minimises this value, so
/// lower cost favours routes that ride the current.  All cells must be in
/// bounds; the planner guarantees this by construction.
pub fn route_cost(route: &[GridCell], field: &CurrentField) -> f64 {
    let mut cost = 0.0;
    for pair in route.windows(2) {
        let delta = Vec2::new(
            (pair[1].x - pair[0].x) as f64,
            (pair[1].y - pair[0].y) as f64,
        );
        let current = field.cell(pair[0].y as usize, pair[0].x as usize);
        cost += delta.dot(current);
    }
    cost
}
