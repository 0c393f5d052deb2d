//! The append-only run recorder.

use helm_core::{Point, Vec2};

/// Four parallel time series advancing in lock-step, one entry per accepted
/// tick, plus the vessel's current position.
///
/// The position series is seeded with the start point, so after `n` accepted
/// ticks it holds `n + 1` entries while speeds, headings, and works hold `n`
/// each — series index `k` describes the step from position `k` to `k + 1`.
/// No removal operation exists; [`reset`](Trajectory::reset) is the only way
/// back.
#[derive(Clone, Debug)]
pub struct Trajectory {
    start:     Point,
    position:  Point,
    positions: Vec<Point>,
    speeds:    Vec<f64>,
    headings:  Vec<f64>,
    works:     Vec<f64>,
}

impl Trajectory {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            position:  start,
            positions: vec![start],
            speeds:    Vec::new(),
            headings:  Vec::new(),
            works:     Vec::new(),
        }
    }

    /// Accept one tick: advance to `next`, recording speed (Euclidean
    /// displacement over the tick), heading, and the instantaneous work done
    /// by the current (dot product of the sampled current and the position
    /// delta).
    pub fn record(&mut self, next: Point, current: Vec2, heading: f64, tick: f64) {
        let delta = next - self.position;
        self.works.push(current.dot(delta));
        self.speeds.push(delta.norm() / tick);
        self.headings.push(heading);
        self.positions.push(next);
        self.position = next;
    }

    /// Accepted tick count.
    #[inline]
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Headings in radians, one per accepted tick.
    pub fn headings(&self) -> &[f64] {
        &self.headings
    }

    /// Instantaneous work samples; negative values mean the vessel fought
    /// the current over that tick.
    pub fn works(&self) -> &[f64] {
        &self.works
    }

    /// Clear all series and restore the start position.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.positions.clear();
        self.positions.push(self.start);
        self.speeds.clear();
        self.headings.clear();
        self.works.clear();
    }
}
