//! Discretisation of the screen into radiating points.
//!
//! The open slit is replaced by a fixed row of [`SLIT_SAMPLES`] equally
//! spaced point sources spanning $[-a/2, +a/2]$; each screen edge is a
//! single point source at $\pm W/2$. Positions are transverse coordinates
//! in the screen plane (mm), with the optical axis at 0.

use crate::types::SimulationParams;

/// Number of point sources across the slit.
///
/// The same count is written into exported scripts so that offline runs
/// reproduce the live pattern.
pub const SLIT_SAMPLES: usize = 100;

/// Evenly spaced sample positions across a slit of width `slit_width`.
///
/// The first and last samples sit exactly on the slit jaws. A zero-width
/// slit collapses every sample onto the axis.
pub fn slit_samples(slit_width: f64) -> Vec<f64> {
    let half = slit_width / 2.0;
    let last = (SLIT_SAMPLES - 1) as f64;
    (0..SLIT_SAMPLES)
        .map(|i| -half + (i as f64 * slit_width) / last)
        .collect()
}

/// Transverse positions of the two screen edges.
pub fn edge_positions(screen_width: f64) -> [f64; 2] {
    [-screen_width / 2.0, screen_width / 2.0]
}

/// Radiating points of one screen configuration, fixed for a whole sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenGeometry {
    /// Slit sample positions (mm).
    pub slit: Vec<f64>,
    /// Edge positions (mm), `None` when edge diffraction is switched off.
    pub edges: Option<[f64; 2]>,
}

impl ScreenGeometry {
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            slit: slit_samples(params.slit_width),
            edges: params
                .edge_diffraction_enabled
                .then(|| edge_positions(params.screen_width)),
        }
    }
}
