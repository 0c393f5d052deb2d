//! The current-field grid: generation, normalization, and sampling.

use helm_core::{Point, SimRng, Vec2};

use crate::model::FieldModel;
use crate::{FieldError, FieldResult};

// ── FieldSpec ─────────────────────────────────────────────────────────────────

/// Parameters for one field generation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    /// Grid width (cells along x).  One cell spans one metre.
    pub width: usize,
    /// Grid height (cells along y).
    pub height: usize,
    /// Target maximum current magnitude in m/s (ignored by `Still`).
    pub max_speed: f64,
    pub model: FieldModel,
}

// ── CurrentField ──────────────────────────────────────────────────────────────

/// A discretized 2-D grid of current velocity vectors.
///
/// Row-major storage, indexed `(row = y, col = x)`.  Immutable after
/// [`generate`](CurrentField::generate): every route planner and vessel
/// samples it read-only, so a shared reference is all downstream code needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentField {
    width:  usize,
    height: usize,
    cells:  Vec<Vec2>,
}

impl CurrentField {
    /// Generate a field from `spec`, drawing randomness from `rng`.
    ///
    /// The same `rng` seed reproduces the same field bit-for-bit.  For every
    /// model except `Still` the result is rescaled so its maximum vector
    /// magnitude equals `spec.max_speed` exactly.
    pub fn generate(spec: &FieldSpec, rng: &mut SimRng) -> FieldResult<CurrentField> {
        if spec.width == 0 || spec.height == 0 {
            return Err(FieldError::Config(format!(
                "field size {}x{} must be at least 1x1",
                spec.width, spec.height
            )));
        }
        spec.model.validate()?;
        if !matches!(spec.model, FieldModel::Still)
            && !(spec.max_speed > 0.0 && spec.max_speed.is_finite())
        {
            return Err(FieldError::Config(format!(
                "max_speed {} must be finite and positive",
                spec.max_speed
            )));
        }

        let mut field = match spec.model {
            FieldModel::Still => Self::still(spec.width, spec.height),
            FieldModel::Uniform { direction } => {
                Self::uniform(spec.width, spec.height, spec.max_speed, direction)
            }
            FieldModel::Random { dispersion } => {
                Self::random(spec.width, spec.height, dispersion, rng)
            }
        };

        if !matches!(spec.model, FieldModel::Still) {
            field.normalize_to(spec.max_speed)?;
        }
        Ok(field)
    }

    /// Wrap an existing cell vector (used by blob loading).
    ///
    /// Fails if the cell count does not match `width * height` or any cell
    /// is non-finite.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Vec2>) -> FieldResult<CurrentField> {
        if cells.len() != width * height {
            return Err(FieldError::Config(format!(
                "{} cells do not fill a {width}x{height} grid",
                cells.len()
            )));
        }
        if !cells.iter().all(|c| c.is_finite()) {
            return Err(FieldError::Config("field contains non-finite cells".into()));
        }
        Ok(CurrentField { width, height, cells })
    }

    // ── Generation models ─────────────────────────────────────────────────

    fn still(width: usize, height: usize) -> CurrentField {
        CurrentField {
            width,
            height,
            cells: vec![Vec2::ZERO; width * height],
        }
    }

    fn uniform(width: usize, height: usize, speed: f64, direction: f64) -> CurrentField {
        let cell = Vec2::from_heading(direction, speed);
        CurrentField {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Spatially correlated random currents.
    ///
    /// Seeds the first row and first column with independent per-component
    /// draws in `[1-dispersion, 1+dispersion]`, then fills every remaining
    /// cell with the component-wise mean of its up, left, and up-left
    /// neighbours, each perturbed by an independent factor from the same
    /// interval.  The column seeding runs second, so it owns cell (0, 0).
    fn random(width: usize, height: usize, dispersion: f64, rng: &mut SimRng) -> CurrentField {
        let lo = 1.0 - dispersion;
        let hi = 1.0 + dispersion;
        // gen_range panics on an empty range; dispersion = 0 is legal.
        let mut draw = |rng: &mut SimRng| -> f64 {
            if dispersion == 0.0 { 1.0 } else { rng.gen_range(lo..hi) }
        };

        let mut cells = vec![Vec2::ZERO; width * height];

        for c in 0..width {
            cells[c] = Vec2::new(draw(rng), draw(rng));
        }
        for r in 0..height {
            cells[r * width] = Vec2::new(draw(rng), draw(rng));
        }

        for r in 1..height {
            for c in 1..width {
                let up      = cells[(r - 1) * width + c];
                let left    = cells[r * width + (c - 1)];
                let up_left = cells[(r - 1) * width + (c - 1)];
                let sum = up.scale(draw(rng))
                    + left.scale(draw(rng))
                    + up_left.scale(draw(rng));
                cells[r * width + c] = sum.scale(1.0 / 3.0);
            }
        }

        CurrentField { width, height, cells }
    }

    /// Rescale so the maximum vector magnitude equals `max_speed` exactly.
    fn normalize_to(&mut self, max_speed: f64) -> FieldResult<()> {
        let max = self.max_magnitude();
        if max == 0.0 {
            return Err(FieldError::Config(
                "cannot normalize an all-zero field".into(),
            ));
        }
        let k = max_speed / max;
        for cell in &mut self.cells {
            *cell = cell.scale(k);
        }
        Ok(())
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `pos` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0.0 && pos.x < self.width as f64 && pos.y >= 0.0 && pos.y < self.height as f64
    }

    /// Current vector of the cell containing `pos` (coordinates truncated:
    /// row = ⌊y⌋, col = ⌊x⌋).
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds; callers check `in_bounds` first.
    #[inline]
    pub fn at(&self, pos: Point) -> Vec2 {
        let col = pos.x as usize;
        let row = pos.y as usize;
        self.cells[row * self.width + col]
    }

    /// Direct cell access by grid indices.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Vec2 {
        self.cells[row * self.width + col]
    }

    /// Raw cell slice in row-major order (used by persistence).
    #[inline]
    pub fn cells(&self) -> &[Vec2] {
        &self.cells
    }

    /// Largest vector magnitude over the whole grid.
    pub fn max_magnitude(&self) -> f64 {
        self.cells.iter().map(|c| c.norm()).fold(0.0, f64::max)
    }
}
