//! Current generation models.

use crate::{FieldError, FieldResult};

/// Closed set of current generation models.
///
/// The legacy configuration format selected models by integer index; use
/// [`FieldModel::from_index`] when loading such configs so unknown indices
/// surface as a configuration error instead of silently defaulting.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldModel {
    /// Every cell is the zero vector.
    Still,

    /// Every cell is the same vector of magnitude `max_speed`, rotated to
    /// `direction` (radians CCW from +x).
    Uniform { direction: f64 },

    /// Spatially correlated random currents.  `dispersion` in `[0, 1]`
    /// controls local variance: 0 degenerates to a constant field, 1 allows
    /// cell-to-cell factors anywhere in `[0, 2]`.
    Random { dispersion: f64 },
}

impl FieldModel {
    /// Map the legacy 0/1/2 selector.  Index 1 and 2 take their parameters
    /// from the caller; index 0 ignores both.
    pub fn from_index(index: u8, direction: f64, dispersion: f64) -> FieldResult<Self> {
        match index {
            0 => Ok(FieldModel::Still),
            1 => Ok(FieldModel::Uniform { direction }),
            2 => Ok(FieldModel::Random { dispersion }),
            other => Err(FieldError::UnknownModel(other)),
        }
    }

    /// Parameter validation, called once at field generation.
    pub(crate) fn validate(&self) -> FieldResult<()> {
        match *self {
            FieldModel::Still => Ok(()),
            FieldModel::Uniform { direction } => {
                if !direction.is_finite() {
                    return Err(FieldError::Config("uniform direction must be finite".into()));
                }
                Ok(())
            }
            FieldModel::Random { dispersion } => {
                if !(0.0..=1.0).contains(&dispersion) {
                    return Err(FieldError::Config(format!(
                        "dispersion {dispersion} outside [0, 1]"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for FieldModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldModel::Still => write!(f, "still"),
            FieldModel::Uniform { direction } => write!(f, "uniform({direction:.3} rad)"),
            FieldModel::Random { dispersion } => write!(f, "random(dispersion {dispersion})"),
        }
    }
}
