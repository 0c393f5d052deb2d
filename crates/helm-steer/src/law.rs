//! The closed set of steering laws.

use helm_core::Point;

/// Per-tick control law mapping vessel state and target into a heading.
///
/// Modelled as a closed enum dispatched by a single `match` in the tick loop
/// rather than a bare callable field, so the set of laws is exhaustively
/// checkable.  Law-specific parameters live on the variant that needs them;
/// route-following takes its waypoints **by value** — there is no shared
/// mutable route object behind the vessel's back.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringLaw {
    /// No propulsion, heading pinned to 0.  The vessel drifts on
    /// `efficiency × current` alone and never arrives.
    Inert,

    /// Heading computed once at departure toward the end point and held for
    /// the whole run.
    DirectionKeeping,

    /// Heading recomputed every tick as the full bearing toward the end
    /// point.
    PositionCorrector,

    /// Anticipatory crab-angle steering: each tick the heading is offset
    /// from the bearing so that propulsion cancels the cross-track component
    /// of the local drift.
    DriftCorrection,

    /// One position-corrector leg per waypoint, in order; all but the last
    /// run in pass-through mode so intermediate waypoints are grazed rather
    /// than hit exactly.
    RouteFollowing { waypoints: Vec<Point> },
}

impl SteeringLaw {
    /// Short lowercase tag for logs and export rows.
    pub fn tag(&self) -> &'static str {
        match self {
            SteeringLaw::Inert => "inert",
            SteeringLaw::DirectionKeeping => "direction-keeping",
            SteeringLaw::PositionCorrector => "position-corrector",
            SteeringLaw::DriftCorrection => "drift-correction",
            SteeringLaw::RouteFollowing { .. } => "route-following",
        }
    }
}
