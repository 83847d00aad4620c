//! Sweep runner: ties together configuration, the field model, and output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use edgewave_core::analysis::{summarise, EdgeComparison, PatternSummary};
use edgewave_core::script::python_script;
use edgewave_core::sweep::AngleSweep;
use edgewave_core::types::{DiffractionPattern, SimulationParams};
use edgewave_core::{simulate_with, Execution};

use crate::config::JobConfig;

/// Results from a single sweep.
pub struct SweepOutput {
    pub params: SimulationParams,
    pub sweep: AngleSweep,
    pub pattern: DiffractionPattern,
    pub summary: Option<PatternSummary>,
}

/// Run a full sweep from a parsed job configuration.
pub fn run_sweep(job: &JobConfig) -> Result<SweepOutput> {
    let params = job.setup.params();
    let sweep = job.sweep.angle_sweep()?;
    let angles = sweep.angles()?;

    let execution = if job.simulation.parallel {
        Execution::Parallel
    } else {
        Execution::Serial
    };

    println!(
        "  λ={} mm, L1={} mm, L2={} mm, slit={} mm, screen={} mm, edges={}",
        params.wavelength,
        params.distance_source_to_screen,
        params.distance_screen_to_detector,
        params.slit_width,
        params.screen_width,
        if params.edge_diffraction_enabled { "bare" } else { "shielded" },
    );
    println!("  {} observation angles ({:?})", angles.len(), execution);

    let pattern = simulate_with(&params, &angles, execution)
        .context("diffraction sweep failed")?;
    let summary = summarise(&pattern);

    Ok(SweepOutput {
        params,
        sweep,
        pattern,
        summary,
    })
}

/// Print the pattern summary to stdout.
pub fn print_summary(output: &SweepOutput) {
    match &output.summary {
        Some(s) => {
            println!("  Peak at {:+.2}°", s.peak_angle_deg);
            println!(
                "  On-axis intensity: {:.2} (depression {:.2})",
                s.on_axis_intensity, s.on_axis_depression
            );
            println!("  Central lobe width (half max): {:.2}°", s.central_lobe_width_deg);
            if s.has_central_dip {
                println!("  Central dip detected: edge waves are interfering on axis.");
            }
        }
        None => println!("  Empty sweep, nothing to summarise."),
    }
}

/// Run the edge-shielding experiment and print both on-axis values.
pub fn run_comparison(job: &JobConfig) -> Result<EdgeComparison> {
    let params = job.setup.params();
    let angles = job.sweep.angle_sweep()?.angles()?;
    let comparison = EdgeComparison::run(&params, &angles)?;

    println!(
        "  On-axis |E|²: bare edges {:.6e}, shielded {:.6e}",
        comparison.on_axis_raw_with_edges, comparison.on_axis_raw_without_edges
    );
    println!(
        "  Relative change from edge waves: {:.2}%",
        comparison.on_axis_relative_change() * 100.0
    );
    for (label, pattern) in [
        ("bare", &comparison.with_edges),
        ("shielded", &comparison.without_edges),
    ] {
        if let Some(s) = summarise(pattern) {
            println!(
                "  {:>8}: on-axis {:.2}, peak at {:+.2}°, lobe {:.2}°{}",
                label,
                s.on_axis_intensity,
                s.peak_angle_deg,
                s.central_lobe_width_deg,
                if s.has_central_dip { ", central dip" } else { "" }
            );
        }
    }
    Ok(comparison)
}

/// Write the normalised pattern to a CSV file with a metadata header.
pub fn write_pattern_csv(output: &SweepOutput, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let p = &output.params;

    writeln!(file, "# edgewave: finite-screen diffraction pattern")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# wavelength_mm: {}", p.wavelength)?;
    writeln!(file, "# distance_source_to_screen_mm: {}", p.distance_source_to_screen)?;
    writeln!(file, "# distance_screen_to_detector_mm: {}", p.distance_screen_to_detector)?;
    writeln!(file, "# slit_width_mm: {}", p.slit_width)?;
    writeln!(file, "# screen_width_mm: {}", p.screen_width)?;
    writeln!(file, "# edge_diffraction: {}", p.edge_diffraction_enabled)?;
    writeln!(file, "# peak_raw_intensity: {:.6e}", output.pattern.peak_raw_intensity)?;
    writeln!(file, "#")?;
    writeln!(file, "angle_deg,intensity")?;

    for point in &output.pattern.points {
        writeln!(file, "{:.4},{:.6}", point.angle_deg, point.intensity)?;
    }

    println!("Pattern written to: {}", path.display());
    Ok(())
}

/// Write the normalised pattern to a JSON file.
pub fn write_pattern_json(pattern: &DiffractionPattern, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(pattern)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("Pattern (JSON) written to: {}", path.display());
    Ok(())
}

/// Write the standalone Python script for these parameters.
pub fn write_script(params: &SimulationParams, sweep: &AngleSweep, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let script = python_script(params, sweep)?;
    std::fs::write(path, script).with_context(|| format!("writing {}", path.display()))?;

    println!("Python script written to: {}", path.display());
    Ok(())
}
