//! Bench controls: slit, screen, detector distance, and edge shielding.

use egui::Ui;

use edgewave_core::types::SimulationParams;

/// State for the controls panel.
#[derive(Debug, Default)]
pub struct ControlsPanel {
    /// Parameters being edited. The app snapshots these before each sweep.
    pub params: SimulationParams,
}

impl ControlsPanel {
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.heading("Bench");
        ui.separator();

        ui.add(
            egui::Slider::new(&mut self.params.slit_width, 0.0..=150.0)
                .step_by(1.0)
                .suffix(" mm")
                .text("Slit width a"),
        );
        ui.add(
            egui::Slider::new(&mut self.params.screen_width, 100.0..=600.0)
                .step_by(10.0)
                .suffix(" mm")
                .text("Screen width W"),
        );
        ui.add(
            egui::Slider::new(&mut self.params.distance_screen_to_detector, 100.0..=1000.0)
                .step_by(10.0)
                .suffix(" mm")
                .text("Detector distance L2"),
        );

        ui.add_space(8.0);
        ui.label(format!(
            "λ = {} mm, L1 = {} mm",
            self.params.wavelength, self.params.distance_source_to_screen
        ));

        ui.add_space(12.0);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Screen edges:");
            let label = if self.params.edge_diffraction_enabled {
                "Bare"
            } else {
                "Absorber-wrapped"
            };
            let mut shielded = !self.params.edge_diffraction_enabled;
            if ui.toggle_value(&mut shielded, label).changed() {
                self.params.edge_diffraction_enabled = !shielded;
            }
        });
        ui.label(
            egui::RichText::new("Wrapping the edges in absorber removes the edge waves.")
                .weak()
                .small(),
        );

        ui.add_space(16.0);
        ui.separator();

        if ui.button("Reset to reference bench").clicked() {
            self.params = SimulationParams::default();
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new("What to look for").strong());
        ui.label(
            egui::RichText::new(
                "At 40 mm the slit passes little energy and the edge waves around the \
                 screen are comparable in amplitude. In antiphase they carve a dip on axis. \
                 At 80 mm the slit wave dominates and a single central lobe returns.",
            )
            .small(),
        );
    }
}
