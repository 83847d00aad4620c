//! Angle sweep driver.
//!
//! Every angle is evaluated independently; the sweep-wide normalisation runs
//! only once all raw intensities are known, so the normalised value at one
//! angle depends on every other angle in the same sweep.

use rayon::prelude::*;

use crate::solver::{DiffractionSolver, FiniteScreenSolver, SimulationError};
use crate::types::{DiffractionPattern, ResultPoint, SimulationParams};

/// How the per-angle evaluations are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Single pass on the calling thread.
    #[default]
    Serial,
    /// Spread angles across the Rayon pool. Output order and values are the
    /// same as [`Execution::Serial`].
    Parallel,
}

/// Compute the normalised pattern for `angles` on the calling thread.
///
/// The output has the same length and order as `angles`, duplicates
/// included. Intensities lie in [0, 100] with at least one point at exactly
/// 100, unless every raw intensity is zero, in which case all are 0.
///
/// # Errors
/// [`SimulationError::InvalidParameter`] for out-of-domain parameters,
/// [`SimulationError::InvalidAngle`] for a non-finite angle and
/// [`SimulationError::NonFiniteIntensity`] when accepted parameters still
/// overflow the field sum.
pub fn simulate(
    params: &SimulationParams,
    angles: &[f64],
) -> Result<DiffractionPattern, SimulationError> {
    simulate_with(params, angles, Execution::Serial)
}

/// [`simulate`] with an explicit execution strategy.
pub fn simulate_with(
    params: &SimulationParams,
    angles: &[f64],
    execution: Execution,
) -> Result<DiffractionPattern, SimulationError> {
    let solver = FiniteScreenSolver::new(params)?;
    check_angles(angles)?;

    let raw = raw_intensities(&solver, angles, execution);
    if let Some(index) = raw.iter().position(|r| !r.is_finite()) {
        return Err(SimulationError::NonFiniteIntensity {
            angle_deg: angles[index],
        });
    }
    let (normalised, peak) = normalise(&raw);

    log::debug!(
        "{}: {} angles, {} slit samples, edges {}, peak |E|²={:.4e}",
        solver.method_name(),
        angles.len(),
        solver.geometry().slit.len(),
        if params.edge_diffraction_enabled { "on" } else { "off" },
        peak
    );

    let points = angles
        .iter()
        .zip(normalised)
        .map(|(&angle_deg, intensity)| ResultPoint { angle_deg, intensity })
        .collect();

    Ok(DiffractionPattern {
        points,
        peak_raw_intensity: peak,
    })
}

/// Unnormalised |E|² for every angle, in input order.
pub fn raw_intensities<S: DiffractionSolver>(
    solver: &S,
    angles: &[f64],
    execution: Execution,
) -> Vec<f64> {
    match execution {
        Execution::Serial => angles
            .iter()
            .map(|&angle| solver.field_at(angle).intensity())
            .collect(),
        Execution::Parallel => angles
            .par_iter()
            .map(|&angle| solver.field_at(angle).intensity())
            .collect(),
    }
}

/// Scale raw intensities so the largest becomes 100.
///
/// Returns the scaled values and the peak used. An all-zero (or empty) input
/// divides by 1 instead, giving all-zero output and a peak of 0.
pub fn normalise(raw: &[f64]) -> (Vec<f64>, f64) {
    let peak = raw.iter().copied().fold(0.0_f64, f64::max);
    let divisor = if peak > 0.0 { peak } else { 1.0 };
    let scaled = raw.iter().map(|&r| r / divisor * 100.0).collect();
    (scaled, peak)
}

fn check_angles(angles: &[f64]) -> Result<(), SimulationError> {
    match angles.iter().position(|a| !a.is_finite()) {
        Some(index) => Err(SimulationError::InvalidAngle {
            index,
            value: angles[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalise_peak_is_100() {
        let (scaled, peak) = normalise(&[1.0, 4.0, 2.0]);
        assert_eq!(peak, 4.0);
        assert_eq!(scaled, vec![25.0, 100.0, 50.0]);
    }

    #[test]
    fn test_normalise_all_zero() {
        let (scaled, peak) = normalise(&[0.0, 0.0]);
        assert_eq!(peak, 0.0);
        assert_eq!(scaled, vec![0.0, 0.0]);
    }

    #[test]
    fn test_normalise_empty() {
        let (scaled, peak) = normalise(&[]);
        assert!(scaled.is_empty());
        assert_eq!(peak, 0.0);
    }

    #[test]
    fn test_empty_sweep() {
        let pattern = simulate(&SimulationParams::default(), &[]).unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.peak_raw_intensity, 0.0);
    }

    #[test]
    fn test_nan_angle_rejected() {
        let err = simulate(&SimulationParams::default(), &[0.0, f64::NAN]).unwrap_err();
        match err {
            SimulationError::InvalidAngle { index, .. } => assert_eq!(index, 1),
            other => panic!("expected InvalidAngle, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_phase_is_an_error() {
        let params = SimulationParams { wavelength: 1e-307, ..Default::default() };
        match simulate(&params, &[0.0, 10.0]).unwrap_err() {
            SimulationError::NonFiniteIntensity { angle_deg } => assert_eq!(angle_deg, 0.0),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_single_angle_normalises_to_100() {
        let pattern = simulate(&SimulationParams::default(), &[12.0]).unwrap();
        assert_eq!(pattern.points[0].intensity, 100.0);
        assert!(pattern.peak_raw_intensity > 0.0);
    }

    #[test]
    fn test_reference_on_axis_raw_intensity() {
        // Slit only, 40 mm, on axis: |E|² ≈ 2.7723e-2.
        let params = SimulationParams {
            edge_diffraction_enabled: false,
            ..Default::default()
        };
        let pattern = simulate(&params, &[0.0]).unwrap();
        assert_relative_eq!(pattern.peak_raw_intensity, 2.772_333_9e-2, max_relative = 1e-6);
    }
}
