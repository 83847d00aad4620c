//! Main application state and egui integration.

use eframe::egui;

use edgewave_core::analysis::summarise;
use edgewave_core::simulate;
use edgewave_core::sweep::AngleSweep;
use edgewave_core::types::SimulationParams;

use crate::panels;

/// The edgewave explorer: bench controls on the left, live pattern in the
/// centre.
pub struct EdgewaveApp {
    pub controls: panels::controls::ControlsPanel,
    pub pattern: panels::pattern::PatternPanel,
    /// Fixed observation grid shared by every sweep.
    angles: Vec<f64>,
    /// Parameters of the pattern currently on screen.
    computed_for: Option<SimulationParams>,
}

impl Default for EdgewaveApp {
    fn default() -> Self {
        let sweep = AngleSweep::reference();
        let angles = match sweep.angles() {
            Ok(angles) => angles,
            Err(e) => {
                log::error!("reference sweep unavailable: {}", e);
                Vec::new()
            }
        };
        Self {
            controls: panels::controls::ControlsPanel::default(),
            pattern: panels::pattern::PatternPanel::new(sweep),
            angles,
            computed_for: None,
        }
    }
}

impl EdgewaveApp {
    /// Light theme, with the reference bench already computed for the first
    /// frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        let mut app = Self::default();
        app.refresh();
        app
    }

    /// Recompute the whole sweep when the parameter snapshot has changed.
    ///
    /// The snapshot is copied before the sweep starts, so a result always
    /// belongs to exactly one parameter set; an outdated pattern is simply
    /// replaced.
    fn refresh(&mut self) {
        let snapshot = self.controls.params;
        if self.computed_for == Some(snapshot) {
            return;
        }

        match simulate(&snapshot, &self.angles) {
            Ok(pattern) => {
                self.pattern.summary = summarise(&pattern);
                self.pattern.pattern = Some(pattern);
                self.pattern.params = snapshot;
                self.pattern.error_message = None;
            }
            Err(e) => {
                log::warn!("sweep rejected: {}", e);
                self.pattern.pattern = None;
                self.pattern.summary = None;
                self.pattern.error_message = Some(e.to_string());
            }
        }
        self.computed_for = Some(snapshot);
    }
}

impl eframe::App for EdgewaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Finite-screen edge interference");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.controls.params.edge_diffraction_enabled {
                        ui.colored_label(
                            egui::Color32::from_rgb(245, 158, 11),
                            "Edge diffraction active",
                        );
                    } else {
                        ui.colored_label(
                            egui::Color32::from_rgb(16, 185, 129),
                            "Edges shielded (ideal slit)",
                        );
                    }
                });
            });
        });

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| self.controls.ui(ui));

        self.refresh();

        egui::CentralPanel::default().show(ctx, |ui| self.pattern.ui(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_computes_once_per_snapshot() {
        let mut app = EdgewaveApp::default();
        app.refresh();
        let first = app.pattern.pattern.clone().unwrap();
        assert_eq!(first.len(), 121);
        assert!(app.pattern.summary.unwrap().has_central_dip);

        app.controls.params.edge_diffraction_enabled = false;
        app.refresh();
        assert_eq!(app.pattern.params, app.controls.params);
        assert_ne!(app.pattern.pattern.as_ref(), Some(&first));
    }

    #[test]
    fn test_rejected_snapshot_clears_pattern() {
        let mut app = EdgewaveApp::default();
        app.controls.params.distance_screen_to_detector = 0.0;
        app.refresh();
        assert!(app.pattern.pattern.is_none());
        assert!(app.pattern.error_message.is_some());
    }
}
