//! Single Huygens-Fresnel wavelet from a point in the screen plane.
//!
//! A point source at transverse position $x$ is illuminated by the horn at
//! distance $L_1$ on axis and observed by a detector at angle $\theta$ on a
//! circle of radius $L_2$:
//!
//! $$
//! r_1 = \sqrt{L_1^2 + x^2}, \qquad
//! r_2 = \sqrt{z_d^2 + (x_d - x)^2}, \qquad
//! E = \frac{s}{\sqrt{r_1}\sqrt{r_2}}\, e^{i(k(r_1 + r_2) + \varphi)}
//! $$
//!
//! with amplitude scale $s$ and phase offset $\varphi$ equal to 1 and 0 for a
//! slit sample.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Amplitude of an edge wavelet relative to one slit sample.
pub const EDGE_AMPLITUDE_RATIO: f64 = 1.8;

/// Extra phase carried by an edge wavelet (radians).
pub const EDGE_PHASE_OFFSET: f64 = PI * 0.85;

/// Detector position projected on the transverse (x) and axial (z) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detector {
    pub x: f64,
    pub z: f64,
}

impl Detector {
    /// Place the detector at `angle_deg` on a circle of radius `distance`.
    pub fn at_angle(distance: f64, angle_deg: f64) -> Self {
        let theta = angle_deg * PI / 180.0;
        Self {
            x: distance * theta.sin(),
            z: distance * theta.cos(),
        }
    }
}

/// Source-to-point and point-to-detector path lengths.
///
/// `hypot` keeps both lengths finite for distances whose squares overflow.
pub fn path_lengths(x: f64, source_distance: f64, detector: &Detector) -> (f64, f64) {
    let r1 = source_distance.hypot(x);
    let r2 = detector.z.hypot(detector.x - x);
    (r1, r2)
}

/// Complex field radiated by the point at `x` towards `detector`.
///
/// # Arguments
/// * `x` - Transverse position of the radiating point (mm).
/// * `source_distance` - Horn to screen distance $L_1$ (mm).
/// * `detector` - Detector position.
/// * `k` - Wavenumber (mm⁻¹).
/// * `amplitude_scale` - 1 for slit samples, [`EDGE_AMPLITUDE_RATIO`] for edges.
/// * `phase_offset` - 0 for slit samples, [`EDGE_PHASE_OFFSET`] for edges.
pub fn spherical_wavelet(
    x: f64,
    source_distance: f64,
    detector: &Detector,
    k: f64,
    amplitude_scale: f64,
    phase_offset: f64,
) -> Complex64 {
    let (r1, r2) = path_lengths(x, source_distance, detector);
    let phase = k * (r1 + r2) + phase_offset;
    let amplitude = amplitude_scale / (r1.sqrt() * r2.sqrt());
    Complex64::new(amplitude * phase.cos(), amplitude * phase.sin())
}
