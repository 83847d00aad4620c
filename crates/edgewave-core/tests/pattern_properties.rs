//! Integration tests for the finite-screen diffraction sweep.
//!
//! Covers the sweep-level guarantees: normalisation, the zero-width slit,
//! mirror symmetry, the edge-shielding experiment on the 32 mm bench,
//! the 40 mm → 80 mm slit comparison, determinism, ordering, and
//! serial/parallel agreement.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use edgewave_core::analysis::{summarise, EdgeComparison};
use edgewave_core::sweep::AngleSweep;
use edgewave_core::types::{DiffractionPattern, SimulationParams};
use edgewave_core::{simulate, simulate_with, Execution, SimulationError};

// ─────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────

fn bench(slit_width: f64, edges: bool) -> SimulationParams {
    SimulationParams {
        wavelength: 32.0,
        distance_source_to_screen: 600.0,
        distance_screen_to_detector: 600.0,
        slit_width,
        screen_width: 300.0,
        edge_diffraction_enabled: edges,
    }
}

fn reference_angles() -> Vec<f64> {
    AngleSweep::reference().angles().unwrap()
}

fn intensity_at(pattern: &DiffractionPattern, angle: f64) -> f64 {
    pattern
        .points
        .iter()
        .find(|p| p.angle_deg == angle)
        .map(|p| p.intensity)
        .expect("angle not in sweep")
}

// ─────────────────────────────────────────────────────────────
// Normalisation
// ─────────────────────────────────────────────────────────────

#[test]
fn test_peak_is_100_and_floor_is_non_negative() {
    let angles = reference_angles();
    for params in [
        bench(40.0, true),
        bench(40.0, false),
        bench(80.0, true),
        bench(0.0, true),
        SimulationParams { screen_width: 0.0, ..bench(12.0, true) },
    ] {
        let pattern = simulate(&params, &angles).unwrap();
        assert_eq!(pattern.max_intensity(), 100.0);
        assert!(pattern.points.iter().all(|p| p.intensity >= 0.0 && p.intensity <= 100.0));
        assert!(pattern.peak_raw_intensity > 0.0);
    }
}

#[test]
fn test_zero_width_slit_is_a_lit_point_source() {
    // The samples collapse onto the axis but still radiate; with the edges
    // shielded every detector angle sees the same |E|².
    let params = SimulationParams {
        slit_width: 0.0,
        edge_diffraction_enabled: false,
        ..Default::default()
    };
    let pattern = simulate(&params, &reference_angles()).unwrap();
    assert!(pattern.peak_raw_intensity > 0.0);
    for p in &pattern.points {
        assert_abs_diff_eq!(p.intensity, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn test_all_dark_sweep_normalises_to_zero() {
    let (scaled, peak) = edgewave_core::pattern::normalise(&[0.0; 5]);
    assert_eq!(peak, 0.0);
    assert!(scaled.iter().all(|&v| v == 0.0));
}

// ─────────────────────────────────────────────────────────────
// Symmetry, determinism, ordering
// ─────────────────────────────────────────────────────────────

#[test]
fn test_pattern_is_symmetric_under_angle_negation() {
    let angles = reference_angles();
    for params in [bench(40.0, true), bench(40.0, false), bench(80.0, true)] {
        let pattern = simulate(&params, &angles).unwrap();
        let n = pattern.len();
        for i in 0..n {
            let a = &pattern.points[i];
            let b = &pattern.points[n - 1 - i];
            assert_eq!(a.angle_deg, -b.angle_deg);
            assert_abs_diff_eq!(a.intensity, b.intensity, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_identical_inputs_give_identical_outputs() {
    let angles = reference_angles();
    let params = bench(40.0, true);
    let first = simulate(&params, &angles).unwrap();
    let second = simulate(&params, &angles).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_order_and_duplicates_preserved() {
    let params = bench(40.0, true);
    let angles = [30.0, -5.0, 0.0, 30.0, -60.0, 0.0];
    let pattern = simulate(&params, &angles).unwrap();

    assert_eq!(pattern.angles(), angles.to_vec());
    assert_eq!(pattern.points[0].intensity, pattern.points[3].intensity);
    assert_eq!(pattern.points[2].intensity, pattern.points[5].intensity);
}

#[test]
fn test_normalisation_depends_on_whole_sweep() {
    let params = bench(40.0, true);
    let narrow = simulate(&params, &[0.0, 10.0]).unwrap();
    let wide = simulate(&params, &[-5.0, 0.0, 10.0]).unwrap();
    // -5° is the true peak, so adding it lowers the normalised value at 0°.
    assert_eq!(intensity_at(&narrow, 0.0), 100.0);
    assert!(intensity_at(&wide, 0.0) < 100.0);
}

#[test]
fn test_parallel_matches_serial() {
    let angles = AngleSweep::Range { start: -60.0, end: 60.0, step: 0.25 }
        .angles()
        .unwrap();
    let params = bench(40.0, true);
    let serial = simulate_with(&params, &angles, Execution::Serial).unwrap();
    let parallel = simulate_with(&params, &angles, Execution::Parallel).unwrap();
    assert_eq!(serial, parallel);
}

// ─────────────────────────────────────────────────────────────
// The 40 mm dip
// ─────────────────────────────────────────────────────────────

#[test]
fn test_edges_change_on_axis_intensity_by_more_than_five_percent() {
    let comparison = EdgeComparison::run(&bench(40.0, true), &reference_angles()).unwrap();
    assert!(
        comparison.on_axis_relative_change() > 0.05,
        "relative on-axis change {:.4}",
        comparison.on_axis_relative_change()
    );

    let on = intensity_at(&comparison.with_edges, 0.0);
    let off = intensity_at(&comparison.without_edges, 0.0);
    assert!((off - on) / off > 0.05, "normalised on-axis {on:.2} vs {off:.2}");
}

#[test]
fn test_shielded_edges_give_single_central_peak() {
    let pattern = simulate(&bench(40.0, false), &reference_angles()).unwrap();
    let summary = summarise(&pattern).unwrap();
    assert_eq!(summary.peak_angle_deg, 0.0);
    assert_eq!(summary.on_axis_intensity, 100.0);
    assert!(!summary.has_central_dip);
}

#[test]
fn test_bare_edges_split_the_40mm_peak() {
    let pattern = simulate(&bench(40.0, true), &reference_angles()).unwrap();
    let summary = summarise(&pattern).unwrap();
    assert!(summary.has_central_dip);
    assert_relative_eq!(summary.peak_angle_deg.abs(), 5.0);
    assert_relative_eq!(summary.on_axis_intensity, 92.8, epsilon = 0.1);
}

#[test]
fn test_wider_slit_narrows_lobe_and_fills_dip() {
    let angles = reference_angles();
    let narrow = summarise(&simulate(&bench(40.0, true), &angles).unwrap()).unwrap();
    let wide = summarise(&simulate(&bench(80.0, true), &angles).unwrap()).unwrap();

    assert!(wide.central_lobe_width_deg < narrow.central_lobe_width_deg);
    assert!(wide.on_axis_depression < narrow.on_axis_depression);
    assert!(!wide.has_central_dip);
}

// ─────────────────────────────────────────────────────────────
// Degenerate but well-defined geometry, error policy
// ─────────────────────────────────────────────────────────────

#[test]
fn test_coincident_slit_and_edges_add() {
    let params = SimulationParams {
        slit_width: 0.0,
        screen_width: 0.0,
        ..bench(0.0, true)
    };
    let pattern = simulate(&params, &[0.0, 10.0]).unwrap();
    // Every radiating point sits on the axis, so the pattern is flat.
    assert_abs_diff_eq!(pattern.points[0].intensity, pattern.points[1].intensity, epsilon = 1e-9);
    assert!(pattern.peak_raw_intensity > 0.0);
}

#[test]
fn test_invalid_parameters_rejected() {
    let angles = [0.0];
    let cases = [
        SimulationParams { wavelength: 0.0, ..Default::default() },
        SimulationParams { wavelength: -1.0, ..Default::default() },
        SimulationParams { distance_source_to_screen: 0.0, ..Default::default() },
        SimulationParams { distance_screen_to_detector: -600.0, ..Default::default() },
        SimulationParams { slit_width: -40.0, ..Default::default() },
        SimulationParams { screen_width: f64::INFINITY, ..Default::default() },
    ];
    for params in cases {
        assert!(matches!(
            simulate(&params, &angles),
            Err(SimulationError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn test_huge_source_distance_stays_finite() {
    let params = SimulationParams {
        distance_source_to_screen: 1e200,
        ..bench(40.0, true)
    };
    let pattern = simulate(&params, &[0.0, 10.0]).unwrap();
    assert!(pattern.peak_raw_intensity > 0.0);
    for p in &pattern.points {
        assert!(p.intensity.is_finite());
        assert!((0.0..=100.0).contains(&p.intensity));
    }
    assert_relative_eq!(pattern.max_intensity(), 100.0, epsilon = 1e-9);
}

#[test]
fn test_pattern_json_round_trip() {
    let pattern = simulate(&bench(40.0, true), &[-1.0, 0.0, 1.0]).unwrap();
    let json = serde_json::to_string(&pattern).expect("serialisation failed");
    let back: DiffractionPattern = serde_json::from_str(&json).expect("deserialisation failed");
    assert_eq!(back.len(), 3);
    assert_eq!(back.angles(), pattern.angles());
}
