//! Pattern summaries and the edge-shielding experiment.
//!
//! A narrow slit passes little energy, so the wavelets diffracted around the
//! screen edges are comparable in amplitude to the slit wave. When the two
//! arrive in antiphase the central maximum is split by a dip on axis; a wider
//! slit swamps the edge waves and the pattern returns to a single sinc²-like
//! lobe. The helpers here quantify that behaviour.

use serde::Serialize;

use crate::pattern::simulate;
use crate::solver::SimulationError;
use crate::types::{DiffractionPattern, SimulationParams};

/// Minimum on-axis depression (intensity points below the peak) reported as
/// a central dip.
pub const DIP_THRESHOLD: f64 = 2.0;

/// Slit width at which the bench shows its characteristic on-axis dip (mm).
pub const REFERENCE_DIP_SLIT_WIDTH: f64 = 40.0;

/// Scalar features of a normalised pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternSummary {
    /// Angle of the first sample reaching the maximum (degrees).
    pub peak_angle_deg: f64,
    /// Normalised intensity at the sample nearest 0°.
    pub on_axis_intensity: f64,
    /// `100 - on_axis_intensity` for a lit sweep.
    pub on_axis_depression: f64,
    /// Angular span of the contiguous run of samples at or above half the
    /// peak that contains the peak (degrees).
    pub central_lobe_width_deg: f64,
    /// Whether the on-axis depression exceeds [`DIP_THRESHOLD`].
    pub has_central_dip: bool,
}

/// Summarise a pattern. Returns `None` for an empty pattern.
///
/// Angles are assumed to be in sweep order for the lobe-width measurement;
/// lists in arbitrary order give a width over the supplied ordering.
pub fn summarise(pattern: &DiffractionPattern) -> Option<PatternSummary> {
    let points = &pattern.points;
    if points.is_empty() {
        return None;
    }

    let peak = pattern.max_intensity();
    let peak_idx = points.iter().position(|p| p.intensity == peak)?;

    let axis_idx = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.angle_deg.abs().total_cmp(&b.angle_deg.abs()))
        .map(|(i, _)| i)?;
    let on_axis_intensity = points[axis_idx].intensity;
    let on_axis_depression = peak - on_axis_intensity;

    let half = peak / 2.0;
    let mut lo = peak_idx;
    while lo > 0 && points[lo - 1].intensity >= half {
        lo -= 1;
    }
    let mut hi = peak_idx;
    while hi + 1 < points.len() && points[hi + 1].intensity >= half {
        hi += 1;
    }

    Some(PatternSummary {
        peak_angle_deg: points[peak_idx].angle_deg,
        on_axis_intensity,
        on_axis_depression,
        central_lobe_width_deg: (points[hi].angle_deg - points[lo].angle_deg).abs(),
        has_central_dip: on_axis_depression > DIP_THRESHOLD,
    })
}

/// Parameter-only dip flag used by the interactive view's badge: the
/// reference slit width with bare screen edges.
pub fn reference_anomaly(params: &SimulationParams) -> bool {
    params.slit_width == REFERENCE_DIP_SLIT_WIDTH && params.edge_diffraction_enabled
}

/// The same sweep with bare edges and with the edges shielded.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeComparison {
    pub with_edges: DiffractionPattern,
    pub without_edges: DiffractionPattern,
    /// Raw on-axis |E|² with edges enabled.
    pub on_axis_raw_with_edges: f64,
    /// Raw on-axis |E|² with edges disabled.
    pub on_axis_raw_without_edges: f64,
}

impl EdgeComparison {
    /// Run both sweeps over `angles`, ignoring the edge flag in `params`.
    pub fn run(params: &SimulationParams, angles: &[f64]) -> Result<Self, SimulationError> {
        let bare = SimulationParams {
            edge_diffraction_enabled: true,
            ..*params
        };
        let shielded = SimulationParams {
            edge_diffraction_enabled: false,
            ..*params
        };

        let with_edges = simulate(&bare, angles)?;
        let without_edges = simulate(&shielded, angles)?;
        let on_axis_raw_with_edges = simulate(&bare, &[0.0])?.peak_raw_intensity;
        let on_axis_raw_without_edges = simulate(&shielded, &[0.0])?.peak_raw_intensity;

        Ok(Self {
            with_edges,
            without_edges,
            on_axis_raw_with_edges,
            on_axis_raw_without_edges,
        })
    }

    /// Relative change of the raw on-axis intensity caused by the edges,
    /// `|I_edges - I_slit| / I_slit`. Infinite when the slit alone is dark.
    pub fn on_axis_relative_change(&self) -> f64 {
        let base = self.on_axis_raw_without_edges;
        if base > 0.0 {
            (self.on_axis_raw_with_edges - base).abs() / base
        } else if self.on_axis_raw_with_edges > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }
}
