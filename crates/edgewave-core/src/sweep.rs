//! Observation angle grids.

use serde::{Deserialize, Serialize};

use crate::solver::SimulationError;

/// Largest number of angles a range may expand to.
pub const MAX_SWEEP_ANGLES: usize = 1_000_000;

/// Angles at which the detector is placed: either a stepped range or an
/// explicit list. Lists may contain duplicates and any ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleSweep {
    Range { start: f64, end: f64, step: f64 },
    List { values: Vec<f64> },
}

impl Default for AngleSweep {
    fn default() -> Self {
        Self::reference()
    }
}

impl AngleSweep {
    /// −60° to +60° in 1° steps (121 angles).
    pub fn reference() -> Self {
        Self::Range {
            start: -60.0,
            end: 60.0,
            step: 1.0,
        }
    }

    /// Expand into an ordered sequence of angles (degrees).
    ///
    /// A range yields `start + i * step` for every `i` that stays within
    /// `end`, allowing a tiny tolerance so that `end` itself is included when
    /// the step divides the span. Ranges that would expand to more than
    /// [`MAX_SWEEP_ANGLES`] angles are rejected.
    pub fn angles(&self) -> Result<Vec<f64>, SimulationError> {
        match self {
            Self::Range { start, end, step } => {
                let (start, end, step) = (*start, *end, *step);
                if !(start.is_finite() && end.is_finite()) {
                    return Err(SimulationError::InvalidSweep(format!(
                        "range bounds must be finite, got [{}, {}]",
                        start, end
                    )));
                }
                if !(step.is_finite() && step > 0.0) {
                    return Err(SimulationError::InvalidSweep(format!(
                        "step must be finite and positive, got {}",
                        step
                    )));
                }
                if end < start {
                    return Err(SimulationError::InvalidSweep(format!(
                        "range end {} is below start {}",
                        end, start
                    )));
                }
                let count = range_len(start, end, step).ok_or_else(|| {
                    SimulationError::InvalidSweep(format!(
                        "range [{}, {}] with step {} exceeds {} angles",
                        start, end, step, MAX_SWEEP_ANGLES
                    ))
                })?;
                Ok((0..count).map(|i| start + i as f64 * step).collect())
            }
            Self::List { values } => Ok(values.clone()),
        }
    }
}

/// Number of angles in a validated range, or `None` past [`MAX_SWEEP_ANGLES`].
fn range_len(start: f64, end: f64, step: f64) -> Option<usize> {
    let intervals = ((end - start) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_ANGLES as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}
