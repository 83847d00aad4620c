//! Diffraction solver abstraction and implementations.
//!
//! The [`DiffractionSolver`] trait defines what the sweep driver needs from a
//! field model: the complex field at a single observation angle. The
//! finite-screen slit model ([`finite_screen::FiniteScreenSolver`]) is the
//! only implementation.

pub mod finite_screen;

use num_complex::Complex64;
use thiserror::Error;

pub use finite_screen::FiniteScreenSolver;

/// Errors raised by a sweep.
///
/// Parameters and angles are checked before any field is evaluated; the
/// only failure after that is a raw intensity that overflowed.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid observation angle at index {index}: {value} (angles must be finite)")]
    InvalidAngle { index: usize, value: f64 },

    #[error("Invalid angle sweep: {0}")]
    InvalidSweep(String),

    #[error("Intensity at {angle_deg}° is not finite (wavelength too small for the path lengths?)")]
    NonFiniteIntensity { angle_deg: f64 },
}

/// Field at the detector split by origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldComponents {
    /// Sum over the slit samples.
    pub slit: Complex64,
    /// Sum over the screen edges; exactly zero when edges are disabled.
    pub edges: Complex64,
}

impl FieldComponents {
    pub fn total(&self) -> Complex64 {
        self.slit + self.edges
    }

    /// Raw intensity $|E_\text{slit} + E_\text{edges}|^2$.
    pub fn intensity(&self) -> f64 {
        self.total().norm_sqr()
    }
}

/// A model that can evaluate the detector field at any angle.
///
/// Implementations hold an immutable snapshot of their parameters so that
/// [`field_at`](DiffractionSolver::field_at) is a pure function of the angle
/// and can be called from several threads at once.
pub trait DiffractionSolver: Send + Sync {
    /// Complex field at the detector placed at `angle_deg`.
    fn field_at(&self, angle_deg: f64) -> FieldComponents;

    /// Human-readable name of the model.
    fn method_name(&self) -> &str;
}
