//! The `Vessel` and its tick loop.

use helm_core::{geo, Point, Vec2};
use helm_field::CurrentField;

use crate::law::SteeringLaw;
use crate::trajectory::Trajectory;
use crate::{SteerError, SteerResult};

/// Displacement below this is a numerical stall: the control law cannot make
/// progress and the run stops without declaring arrival.
const STALL_EPS: f64 = 1e-9;

/// Bearing divergence beyond which a pass-through leg breaks out early.
const PASS_THROUGH_LIMIT: f64 = std::f64::consts::FRAC_PI_4;

// ── VesselConfig ──────────────────────────────────────────────────────────────

/// Physical and numerical parameters of one vessel.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselConfig {
    /// Cruise speed through the water, m/s.  Must be positive.
    pub base_speed: f64,
    /// Fraction of the current velocity imparted to the hull, in `[0, 1]`.
    pub hydrodynamic_efficiency: f64,
    /// Integration step, seconds.  Must be positive.
    pub tick: f64,
    /// Arrival tolerance, metres.  Must be non-negative.
    pub precision: f64,
    /// Hard bound on accepted ticks per run.  A control law that never
    /// satisfies the termination predicate stops with
    /// [`StopReason::Budget`] instead of looping forever.
    pub max_ticks: u64,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            hydrodynamic_efficiency: 1.0,
            tick: 0.1,
            precision: 0.25,
            max_ticks: 100_000,
        }
    }
}

impl VesselConfig {
    fn validate(&self) -> SteerResult<()> {
        if !(self.base_speed > 0.0 && self.base_speed.is_finite()) {
            return Err(SteerError::Config(format!(
                "base_speed {} must be finite and positive",
                self.base_speed
            )));
        }
        if !(0.0..=1.0).contains(&self.hydrodynamic_efficiency) {
            return Err(SteerError::Config(format!(
                "hydrodynamic_efficiency {} outside [0, 1]",
                self.hydrodynamic_efficiency
            )));
        }
        if !(self.tick > 0.0 && self.tick.is_finite()) {
            return Err(SteerError::Config(format!(
                "tick {} must be finite and positive",
                self.tick
            )));
        }
        if !(self.precision >= 0.0) {
            return Err(SteerError::Config(format!(
                "precision {} must be non-negative",
                self.precision
            )));
        }
        if self.max_ticks == 0 {
            return Err(SteerError::Config("max_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

// ── StopReason ────────────────────────────────────────────────────────────────

/// Why a run (or one waypoint leg) stopped.
///
/// Lets callers tell "stuck" apart from "left the map" without
/// reverse-engineering the final position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Distance to the target fell within the vessel's precision.
    Arrived,
    /// The next position would leave the field.
    OutOfBounds,
    /// Displacement fell below the stall epsilon.
    Stalled,
    /// A pass-through leg broke out early (intermediate waypoint grazed).
    Diverted,
    /// The tick budget was exhausted.
    Budget,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StopReason::Arrived => "arrived",
            StopReason::OutOfBounds => "out of bounds",
            StopReason::Stalled => "stalled",
            StopReason::Diverted => "diverted",
            StopReason::Budget => "tick budget exhausted",
        };
        f.write_str(s)
    }
}

// ── Vessel ────────────────────────────────────────────────────────────────────

/// A simulated craft: physical parameters, a steering law, and its recorded
/// run-state.
///
/// Owned exclusively by the simulation driver.  One call to
/// [`sail`](Vessel::sail) runs the vessel to completion; [`reset`] restores
/// the initial state for another run.
///
/// [`reset`]: Vessel::reset
#[derive(Clone, Debug)]
pub struct Vessel {
    /// Presentation only.
    pub name:  String,
    /// Presentation only (hex color for external plotting).
    pub color: String,

    pub start:  Point,
    pub config: VesselConfig,
    pub law:    SteeringLaw,

    arrived:    bool,
    trajectory: Trajectory,
}

impl Vessel {
    pub fn new(
        name: impl Into<String>,
        start: Point,
        law: SteeringLaw,
        config: VesselConfig,
    ) -> SteerResult<Self> {
        config.validate()?;
        if let SteeringLaw::RouteFollowing { waypoints } = &law {
            if waypoints.is_empty() {
                return Err(SteerError::Config("route-following law needs waypoints".into()));
            }
        }
        Ok(Self {
            name: name.into(),
            color: "#373737".into(),
            start,
            config,
            law,
            arrived: false,
            trajectory: Trajectory::new(start),
        })
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set exactly once per run, when a terminal target is reached within
    /// precision.
    #[inline]
    pub fn arrived(&self) -> bool {
        self.arrived
    }

    #[inline]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Restore the start position, clear all four series, clear `arrived`.
    pub fn reset(&mut self) {
        self.trajectory.reset();
        self.arrived = false;
    }

    /// Run the vessel's steering law against `field` toward `end` until the
    /// termination predicate fires.
    ///
    /// The inert law ignores `end` entirely.  The returned reason describes
    /// the **final** leg for route-following vessels; their `arrived` flag is
    /// judged against the ultimate destination.
    pub fn sail(&mut self, field: &CurrentField, end: Point) -> StopReason {
        let cfg = self.config;
        let mut budget = cfg.max_ticks;

        match self.law.clone() {
            SteeringLaw::Inert => run_leg(
                &mut self.trajectory,
                field,
                &cfg,
                None,
                HeadingMode::Fixed(0.0),
                0.0,
                None,
                &mut budget,
            ),

            SteeringLaw::DirectionKeeping => {
                let heading = geo::direction(self.start, end, None);
                let reason = run_leg(
                    &mut self.trajectory,
                    field,
                    &cfg,
                    Some(end),
                    HeadingMode::Fixed(heading),
                    cfg.base_speed,
                    None,
                    &mut budget,
                );
                if reason == StopReason::Arrived {
                    self.arrived = true;
                }
                reason
            }

            SteeringLaw::PositionCorrector => {
                let reason = run_leg(
                    &mut self.trajectory,
                    field,
                    &cfg,
                    Some(end),
                    HeadingMode::Bearing(end),
                    cfg.base_speed,
                    None,
                    &mut budget,
                );
                if reason == StopReason::Arrived {
                    self.arrived = true;
                }
                reason
            }

            SteeringLaw::DriftCorrection => {
                let reason = run_leg(
                    &mut self.trajectory,
                    field,
                    &cfg,
                    Some(end),
                    HeadingMode::Crab(end),
                    cfg.base_speed,
                    None,
                    &mut budget,
                );
                if reason == StopReason::Arrived {
                    self.arrived = true;
                }
                reason
            }

            SteeringLaw::RouteFollowing { waypoints } => {
                let count = waypoints.len();
                let mut reason = StopReason::Stalled;
                for (i, wp) in waypoints.iter().enumerate() {
                    let last = i + 1 == count;
                    reason = run_leg(
                        &mut self.trajectory,
                        field,
                        &cfg,
                        Some(*wp),
                        HeadingMode::Bearing(*wp),
                        cfg.base_speed,
                        Some(PassThrough { end, last }),
                        &mut budget,
                    );
                    // Arrived/Diverted legs hand over to the next waypoint;
                    // anything else ends the whole run.
                    if matches!(
                        reason,
                        StopReason::OutOfBounds | StopReason::Stalled | StopReason::Budget
                    ) {
                        break;
                    }
                }
                if self.trajectory.position().distance_to(end) <= cfg.precision {
                    self.arrived = true;
                    StopReason::Arrived
                } else {
                    reason
                }
            }
        }
    }
}

// ── Leg runner ────────────────────────────────────────────────────────────────

/// How the heading is produced each tick.
enum HeadingMode {
    /// Held for the whole leg (inert, direction keeping).
    Fixed(f64),
    /// Full bearing toward the goal, recomputed every tick.
    Bearing(Point),
    /// Bearing offset by the crab angle that cancels cross-track drift.
    Crab(Point),
}

/// Pass-through parameters for intermediate route-following legs.
struct PassThrough {
    /// The route's ultimate destination, used for the divergence check.
    end:  Point,
    /// The final waypoint is terminal: no early break-out.
    last: bool,
}

fn heading_for(mode: &HeadingMode, pos: Point, field: &CurrentField, cfg: &VesselConfig) -> f64 {
    match *mode {
        HeadingMode::Fixed(h) => h,
        HeadingMode::Bearing(goal) => geo::bearing(pos, goal),
        HeadingMode::Crab(goal) => {
            let b = geo::bearing(pos, goal);
            let drift = field.at(pos).scale(cfg.hydrodynamic_efficiency);
            // Cross-track drift component (positive = left of track).
            let cross = -drift.x * b.sin() + drift.y * b.cos();
            b - (cross / cfg.base_speed).clamp(-1.0, 1.0).asin()
        }
    }
}

/// Drive one leg of the tick loop until the termination predicate fires.
///
/// `goal` is `None` for the inert law (no arrival semantics).  `budget` is
/// shared across all legs of one run.  Ticks whose next position would leave
/// the field, or whose displacement stalls, are **not** recorded — the
/// trajectory only ever holds accepted states.
#[allow(clippy::too_many_arguments)]
fn run_leg(
    traj:        &mut Trajectory,
    field:       &CurrentField,
    cfg:         &VesselConfig,
    goal:        Option<Point>,
    mode:        HeadingMode,
    drive_speed: f64,
    pass:        Option<PassThrough>,
    budget:      &mut u64,
) -> StopReason {
    loop {
        let pos = traj.position();
        if !field.in_bounds(pos) {
            return StopReason::OutOfBounds;
        }
        if let Some(goal) = goal {
            if pos.distance_to(goal) <= cfg.precision {
                return StopReason::Arrived;
            }
        }
        if *budget == 0 {
            return StopReason::Budget;
        }
        *budget -= 1;

        let heading = heading_for(&mode, pos, field, cfg);

        if let Some(pass) = &pass {
            if !pass.last {
                let to_end = geo::bearing(pos, pass.end);
                if geo::angle_diff(heading, to_end).abs() > PASS_THROUGH_LIMIT {
                    return StopReason::Diverted;
                }
            }
        }

        let current = field.at(pos);
        let velocity = current.scale(cfg.hydrodynamic_efficiency)
            + Vec2::from_heading(heading, drive_speed);
        let next = pos + velocity.scale(cfg.tick);

        if !field.in_bounds(next) {
            return StopReason::OutOfBounds;
        }
        if next.distance_to(pos) < STALL_EPS {
            return StopReason::Stalled;
        }

        traj.record(next, current, heading, cfg.tick);
    }
}
