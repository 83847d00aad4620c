//! Core types shared across edgewave.
//!
//! All lengths are in millimetres and all angles in degrees.

use serde::{Deserialize, Serialize};

use crate::solver::SimulationError;

/// Geometry and wavelength of a single sweep.
///
/// A parameter set is an immutable snapshot: the solver copies everything it
/// needs at construction time, so a sweep never observes a half-updated set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Wavelength λ (mm).
    pub wavelength: f64,
    /// Horn to screen distance L1 (mm).
    pub distance_source_to_screen: f64,
    /// Screen to detector distance L2 (mm).
    pub distance_screen_to_detector: f64,
    /// Width of the open slit, centred on the optical axis (mm).
    pub slit_width: f64,
    /// Full width of the opaque screen; its edges sit at ±W/2 (mm).
    pub screen_width: f64,
    /// Whether the two screen edges radiate secondary wavelets.
    pub edge_diffraction_enabled: bool,
}

impl Default for SimulationParams {
    /// The 32 mm microwave bench: 40 mm slit in a 300 mm plate at 600 mm.
    fn default() -> Self {
        Self {
            wavelength: 32.0,
            distance_source_to_screen: 600.0,
            distance_screen_to_detector: 600.0,
            slit_width: 40.0,
            screen_width: 300.0,
            edge_diffraction_enabled: true,
        }
    }
}

impl SimulationParams {
    /// Wavenumber $k = 2\pi / \lambda$ (mm⁻¹).
    pub fn wavenumber(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.wavelength
    }

    /// Check every field against its physical domain.
    ///
    /// Wavelength and both distances must be finite and strictly positive;
    /// the two widths must be finite and non-negative. A zero wavelength is
    /// rejected rather than propagated as an infinite wavenumber.
    pub fn validate(&self) -> Result<(), SimulationError> {
        positive("wavelength", self.wavelength)?;
        positive("distance_source_to_screen", self.distance_source_to_screen)?;
        positive("distance_screen_to_detector", self.distance_screen_to_detector)?;
        non_negative("slit_width", self.slit_width)?;
        non_negative("screen_width", self.screen_width)?;

        if self.screen_width < self.slit_width {
            log::warn!(
                "screen width {} mm is narrower than the slit ({} mm); edges sit inside the aperture",
                self.screen_width,
                self.slit_width
            );
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

/// Normalised intensity at one observation angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultPoint {
    /// Detector angle from the optical axis (degrees).
    pub angle_deg: f64,
    /// Intensity in [0, 100], relative to the sweep peak.
    pub intensity: f64,
}

/// A complete normalised sweep, in the order the angles were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffractionPattern {
    pub points: Vec<ResultPoint>,
    /// Largest |E|² before normalisation (0 for an all-dark sweep).
    pub peak_raw_intensity: f64,
}

impl DiffractionPattern {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.angle_deg).collect()
    }

    /// Largest normalised intensity: 100 for a lit sweep, 0 otherwise.
    pub fn max_intensity(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.intensity)
            .fold(0.0_f64, f64::max)
    }
}
