//! # Edgewave Core
//!
//! The numerical backbone of edgewave. This crate computes the far-field
//! intensity pattern of a horn source illuminating a narrow slit cut into a
//! finite opaque screen, including the secondary wavelets launched by the
//! screen's two physical edges.
//!
//! ## Architecture
//!
//! The field at each observation angle is a discrete Huygens-Fresnel sum
//! over sample points in the slit plus the two screen edges. Solvers
//! implement the [`solver::DiffractionSolver`] trait; the only model is
//! [`solver::finite_screen::FiniteScreenSolver`]. The sweep driver in
//! [`pattern`] evaluates every angle and then normalises the whole sweep to
//! a peak of 100.
//!
//! ## Modules
//!
//! - [`types`]: Parameters and result containers.
//! - [`aperture`]: Slit sample positions and screen edges.
//! - [`wavelet`]: Single spherical-wavelet contribution.
//! - [`solver`]: Solver trait, errors, and the finite-screen model.
//! - [`pattern`]: Angle sweep driver and normalisation.
//! - [`sweep`]: Observation angle grids.
//! - [`analysis`]: Pattern summaries and the edge-toggle experiment.
//! - [`script`]: Standalone Python export of the same model.

pub mod analysis;
pub mod aperture;
pub mod pattern;
pub mod script;
pub mod solver;
pub mod sweep;
pub mod types;
pub mod wavelet;

pub use pattern::{simulate, simulate_with, Execution};
pub use solver::SimulationError;
pub use types::{DiffractionPattern, ResultPoint, SimulationParams};
