//! Parametric natural cubic spline resampling.
//!
//! The adapted planner's discrete route is jagged (integer cells, ±1 moves).
//! Smoothing fits one natural cubic spline per axis over a chord-length
//! parameter `u ∈ [0, 1]` and resamples at uniformly spaced parameter
//! values, which spaces the output waypoints roughly uniformly in arclength.

use helm_core::Point;

use crate::{RouteError, RouteResult};

/// Fit a parametric cubic spline through `points` and resample it at
/// `samples` uniformly spaced parameter values.
///
/// The first and last output points coincide with the input endpoints.
///
/// # Errors
///
/// `DegenerateSpline` if there are fewer than two points, fewer samples than
/// two, or any two consecutive points coincide (zero chord length — the
/// parameterization would not be strictly increasing).
pub fn resample(points: &[Point], samples: usize) -> RouteResult<Vec<Point>> {
    if points.len() < 2 {
        return Err(RouteError::DegenerateSpline(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    if samples < 2 {
        return Err(RouteError::DegenerateSpline(format!(
            "need at least 2 samples, got {samples}"
        )));
    }

    // Chord-length parameterization.
    let mut u = Vec::with_capacity(points.len());
    u.push(0.0);
    for (i, pair) in points.windows(2).enumerate() {
        let chord = pair[0].distance_to(pair[1]);
        if chord == 0.0 {
            return Err(RouteError::DegenerateSpline(format!(
                "duplicate consecutive points at index {i}"
            )));
        }
        u.push(u[i] + chord);
    }
    let total = u[points.len() - 1];
    for v in &mut u {
        *v /= total;
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mx = second_derivatives(&u, &xs);
    let my = second_derivatives(&u, &ys);

    let out = (0..samples)
        .map(|k| {
            let t = k as f64 / (samples - 1) as f64;
            Point::new(eval(&u, &xs, &mx, t), eval(&u, &ys, &my, t))
        })
        .collect();
    Ok(out)
}

/// Natural cubic spline second derivatives via the Thomas tridiagonal solve.
///
/// Boundary condition: zero curvature at both ends, so two points degrade
/// gracefully to linear interpolation.
fn second_derivatives(u: &[f64], y: &[f64]) -> Vec<f64> {
    let n = u.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    // Forward sweep over the interior unknowns m[1..n-1].
    let mut diag = vec![0.0; n];
    let mut rhs = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = u[i] - u[i - 1];
        let h1 = u[i + 1] - u[i];
        let d = 6.0 * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);

        if i == 1 {
            diag[i] = 2.0 * (h0 + h1);
            rhs[i] = d;
        } else {
            let w = h0 / diag[i - 1];
            diag[i] = 2.0 * (h0 + h1) - w * h0;
            rhs[i] = d - w * rhs[i - 1];
        }
    }

    // Back substitution.
    for i in (1..n - 1).rev() {
        let h1 = u[i + 1] - u[i];
        let upper = if i == n - 2 { 0.0 } else { h1 * m[i + 1] };
        m[i] = (rhs[i] - upper) / diag[i];
    }
    m
}

/// Evaluate one axis of the spline at parameter `t`.
fn eval(u: &[f64], y: &[f64], m: &[f64], t: f64) -> f64 {
    // Locate the knot interval containing t (u is strictly increasing).
    let i = match u.binary_search_by(|v| v.total_cmp(&t)) {
        Ok(i) => i.min(u.len() - 2),
        Err(i) => i.saturating_sub(1).min(u.len() - 2),
    };

    let h = u[i + 1] - u[i];
    let a = (u[i + 1] - t) / h;
    let b = (t - u[i]) / h;
    a * y[i]
        + b * y[i + 1]
        + ((a.powi(3) - a) * m[i] + (b.powi(3) - b) * m[i + 1]) * h * h / 6.0
}
