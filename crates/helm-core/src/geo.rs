//! Planar geometry and heading math.
//!
//! The simulation domain is a flat 2-D plane in metres: `Point` is a
//! position, `Vec2` a velocity or displacement.  Both use `f64` — trajectory
//! integration accumulates thousands of tiny steps and single precision
//! drifts visibly over long crossings.
//!
//! Headings are radians, measured counter-clockwise from the +x axis.

use std::ops::{Add, Mul, Sub};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector: current velocity (m/s) or position delta (m).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit-heading vector scaled to `magnitude`.
    #[inline]
    pub fn from_heading(heading: f64, magnitude: f64) -> Self {
        Self {
            x: magnitude * heading.cos(),
            y: magnitude * heading.sin(),
        }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vec2 {
        Vec2 { x: self.x * k, y: self.y * k }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position on the simulation plane, in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in metres.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl Add<Vec2> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vec2) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Point) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Heading functions ─────────────────────────────────────────────────────────

/// Signed slope angle of the segment `a → b`, in radians.
///
/// Computed as `arctan(Δy / Δx)`, so the result lives in (-π/2, π/2) and a
/// segment pointing in -x folds onto the +x branch.  Passing the previous
/// heading as `last` resolves the ambiguity: when the raw angle jumps by
/// more than π/2 from `last`, the ±π branch closest to `last` is returned
/// instead.  Vertical segments return ±π/2 by the sign of Δy.
pub fn direction(a: Point, b: Point, last: Option<f64>) -> f64 {
    use std::f64::consts::{FRAC_PI_2, PI};

    if a.x == b.x {
        return if a.y > b.y { -FRAC_PI_2 } else { FRAC_PI_2 };
    }
    let angle = ((a.y - b.y) / (a.x - b.x)).atan();
    match last {
        None => angle,
        Some(prev) => {
            if prev - angle > FRAC_PI_2 {
                angle + PI
            } else if prev - angle < -FRAC_PI_2 {
                angle - PI
            } else {
                angle
            }
        }
    }
}

/// Full-quadrant bearing from `from` toward `goal`, in radians CCW from +x.
///
/// Used by the position corrector, which recomputes this every tick.
#[inline]
pub fn bearing(from: Point, goal: Point) -> f64 {
    use std::f64::consts::FRAC_PI_2;
    -((from.x - goal.x).atan2(from.y - goal.y) + FRAC_PI_2)
}

/// Wrapped angular difference `a - b`, normalised into (-π, π].
pub fn angle_diff(a: f64, b: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let mut d = (a - b) % TAU;
    if d <= -PI {
        d += TAU;
    } else if d > PI {
        d -= TAU;
    }
    d
}
