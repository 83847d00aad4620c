//! Pattern panel: live intensity curve, summary, and data export.

use std::path::Path;

use anyhow::Context;
use egui::Ui;

use edgewave_core::analysis::{reference_anomaly, PatternSummary};
use edgewave_core::script::{python_script, SCRIPT_FILE_NAME};
use edgewave_core::sweep::AngleSweep;
use edgewave_core::types::{DiffractionPattern, SimulationParams};

const EXPORT_DIR: &str = "output";

/// State for the pattern display panel.
#[derive(Debug)]
pub struct PatternPanel {
    /// Latest completed sweep.
    pub pattern: Option<DiffractionPattern>,
    /// Summary of `pattern`.
    pub summary: Option<PatternSummary>,
    /// Parameters `pattern` was computed from.
    pub params: SimulationParams,
    /// Error from the last sweep, if it was rejected.
    pub error_message: Option<String>,
    /// Whether to show the data table beneath the plot.
    pub show_table: bool,
    /// Last export outcome shown to the user.
    pub status: Option<String>,
    sweep: AngleSweep,
}

impl PatternPanel {
    pub fn new(sweep: AngleSweep) -> Self {
        Self {
            pattern: None,
            summary: None,
            params: SimulationParams::default(),
            error_message: None,
            show_table: false,
            status: None,
            sweep,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Intensity distribution");
            let dip = self.summary.map(|s| s.has_central_dip).unwrap_or(false);
            if dip {
                ui.colored_label(
                    egui::Color32::from_rgb(217, 119, 6),
                    "Interference dip detected",
                );
            }
        });
        ui.separator();

        if let Some(err) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
            return;
        }

        let Some(pattern) = &self.pattern else {
            ui.label("No pattern yet.");
            return;
        };

        let points: egui_plot::PlotPoints = pattern
            .points
            .iter()
            .map(|p| [p.angle_deg, p.intensity])
            .collect();
        let line = egui_plot::Line::new(points)
            .name("Normalised intensity")
            .color(egui::Color32::from_rgb(99, 102, 241))
            .width(3.0);

        egui_plot::Plot::new("pattern_plot")
            .height(420.0)
            .x_axis_label("Detector angle (deg)")
            .y_axis_label("Intensity (peak = 100)")
            .include_y(0.0)
            .include_y(110.0)
            .show(ui, |plot_ui| {
                plot_ui.vline(
                    egui_plot::VLine::new(0.0).color(egui::Color32::from_gray(200)),
                );
                plot_ui.line(line);
            });

        ui.add_space(8.0);

        if let Some(s) = &self.summary {
            ui.label(format!(
                "Peak at {:+.1}°, on-axis {:.1}, central lobe {:.1}° wide",
                s.peak_angle_deg, s.on_axis_intensity, s.central_lobe_width_deg
            ));
        }
        if reference_anomaly(&self.params) {
            ui.label(
                egui::RichText::new(
                    "Reference 40 mm bench with bare edges: shield the edges to see the dip vanish.",
                )
                .italics(),
            );
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_table, "Show data table");

            if ui.button("Export to CSV").clicked() {
                let path = Path::new(EXPORT_DIR).join("gui_pattern.csv");
                self.status = Some(report(export_pattern_csv(pattern, &path), &path));
            }
            if ui.button("Export Python script").clicked() {
                let path = Path::new(EXPORT_DIR).join(SCRIPT_FILE_NAME);
                self.status = Some(report(
                    export_script(&self.params, &self.sweep, &path),
                    &path,
                ));
            }
        });

        if let Some(status) = &self.status {
            ui.label(egui::RichText::new(status).weak().small());
        }

        if self.show_table {
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .show(ui, |ui| {
                    egui::Grid::new("pattern_grid")
                        .striped(true)
                        .min_col_width(100.0)
                        .show(ui, |ui| {
                            ui.strong("Angle (deg)");
                            ui.strong("Intensity");
                            ui.end_row();

                            for p in &pattern.points {
                                ui.label(format!("{:.1}", p.angle_deg));
                                ui.label(format!("{:.2}", p.intensity));
                                ui.end_row();
                            }
                        });
                });
        }
    }
}

fn report(result: anyhow::Result<()>, path: &Path) -> String {
    match result {
        Ok(()) => format!("Saved {}", path.display()),
        Err(e) => {
            log::error!("Failed to export: {:#}", e);
            format!("Export failed: {}", e)
        }
    }
}

fn export_pattern_csv(pattern: &DiffractionPattern, path: &Path) -> anyhow::Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writeln!(file, "angle_deg,intensity")?;
    for p in &pattern.points {
        writeln!(file, "{:.4},{:.6}", p.angle_deg, p.intensity)?;
    }

    Ok(())
}

fn export_script(params: &SimulationParams, sweep: &AngleSweep, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let script = python_script(params, sweep)?;
    std::fs::write(path, script).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
