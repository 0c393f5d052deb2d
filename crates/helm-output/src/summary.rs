//! Per-vessel run statistics.

use helm_steer::Vessel;

/// Summary of one finished run, computed from the vessel's trajectory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VesselSummary {
    pub name: String,
    /// Steering law tag (`inert`, `direction-keeping`, …).
    pub steering: String,
    /// Largest recorded per-tick speed, m/s.  0 for a run with no ticks.
    pub max_speed: f64,
    /// Cumulative absolute heading change over the run, degrees.
    pub heading_change_deg: f64,
    /// Sum of the negative work samples only — energy spent fighting the
    /// current.  Always ≤ 0.
    pub total_negative_work: f64,
    /// Accepted ticks.
    pub ticks: u64,
    /// `ticks × tick duration`, seconds.
    pub sail_time_secs: f64,
    pub arrived: bool,
}

impl VesselSummary {
    pub fn from_vessel(vessel: &Vessel) -> Self {
        let t = vessel.trajectory();
        let max_speed = t.speeds().iter().copied().fold(0.0, f64::max);
        let heading_change_deg = t
            .headings()
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum::<f64>()
            .to_degrees();
        let total_negative_work = t.works().iter().filter(|w| **w < 0.0).sum();
        let ticks = t.len() as u64;

        Self {
            name: vessel.name.clone(),
            steering: vessel.law.tag().to_string(),
            max_speed,
            heading_change_deg,
            total_negative_work,
            ticks,
            sail_time_secs: ticks as f64 * vessel.config.tick,
            arrived: vessel.arrived(),
        }
    }
}
