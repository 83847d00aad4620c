//! TOML configuration deserialisation for sweep jobs.

use anyhow::Context;
use serde::Deserialize;

use edgewave_core::sweep::AngleSweep;
use edgewave_core::types::SimulationParams;

/// Top-level job configuration. Every table is optional; an empty file runs
/// the 32 mm reference bench over −60°…+60°.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub setup: SetupConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Bench geometry (mm).
#[derive(Debug, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_wavelength")]
    pub wavelength: f64,
    #[serde(default = "default_distance")]
    pub distance_source_to_screen: f64,
    #[serde(default = "default_distance")]
    pub distance_screen_to_detector: f64,
    #[serde(default = "default_slit_width")]
    pub slit_width: f64,
    #[serde(default = "default_screen_width")]
    pub screen_width: f64,
    #[serde(default = "default_true")]
    pub edge_diffraction: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            wavelength: default_wavelength(),
            distance_source_to_screen: default_distance(),
            distance_screen_to_detector: default_distance(),
            slit_width: default_slit_width(),
            screen_width: default_screen_width(),
            edge_diffraction: true,
        }
    }
}

impl SetupConfig {
    pub fn params(&self) -> SimulationParams {
        SimulationParams {
            wavelength: self.wavelength,
            distance_source_to_screen: self.distance_source_to_screen,
            distance_screen_to_detector: self.distance_screen_to_detector,
            slit_width: self.slit_width,
            screen_width: self.screen_width,
            edge_diffraction_enabled: self.edge_diffraction,
        }
    }
}

fn default_wavelength() -> f64 {
    32.0
}
fn default_distance() -> f64 {
    600.0
}
fn default_slit_width() -> f64 {
    40.0
}
fn default_screen_width() -> f64 {
    300.0
}

/// Angle specification: a range with an optional step, or an explicit list.
/// An empty table keeps the reference range; a lone `step` resamples it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    pub range: Option<[f64; 2]>,
    pub step: Option<f64>,
    pub values: Option<Vec<f64>>,
}

impl SweepConfig {
    pub fn angle_sweep(&self) -> anyhow::Result<AngleSweep> {
        let step = self.step.unwrap_or_else(default_step);
        match (&self.range, &self.values) {
            (Some(_), Some(_)) => anyhow::bail!("[sweep] takes `range` or `values`, not both"),
            (None, Some(_)) if self.step.is_some() => {
                anyhow::bail!("[sweep] `step` only applies to `range`")
            }
            (None, Some(values)) => Ok(AngleSweep::List {
                values: values.clone(),
            }),
            (Some(range), None) => Ok(AngleSweep::Range {
                start: range[0],
                end: range[1],
                step,
            }),
            (None, None) => Ok(AngleSweep::Range {
                start: DEFAULT_RANGE[0],
                end: DEFAULT_RANGE[1],
                step,
            }),
        }
    }
}

const DEFAULT_RANGE: [f64; 2] = [-60.0, 60.0];

fn default_step() -> f64 {
    1.0
}

/// Execution options.
#[derive(Debug, Default, Deserialize)]
pub struct SimulationConfig {
    /// Evaluate angles on the Rayon pool (default: false).
    #[serde(default)]
    pub parallel: bool,
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the pattern as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save the pattern as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
    /// Whether to write the standalone Python script next to the data (default: false).
    #[serde(default)]
    pub save_script: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
            save_script: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    log::debug!("parsed job: {:?}", config);
    Ok(config)
}
