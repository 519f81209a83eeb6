//! Status-Bar am unteren Bildschirmrand.

use crate::app::use_cases::curve::status_hints;
use crate::app::AppState;
use crate::core::Mode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let mode = state.curve.mode;
            match mode {
                Mode::Real => ui.label(format!("Modus: {}", mode.label())),
                Mode::ModularField => ui.label(format!(
                    "Modus: {} (p = {})",
                    mode.label(),
                    state.curve.modulus.value()
                )),
            };

            ui.separator();
            ui.label(state.curve.params.equation());

            ui.separator();
            ui.label(state.view.outcome.summary());

            for hint in status_hints(state) {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", hint)).color(egui::Color32::YELLOW));
            }

            // Letzter Eingabefehler
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_RED));
            }
        });
    });
}
