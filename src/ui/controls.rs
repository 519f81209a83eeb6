//! Parameter-Panel (linke Seitenleiste): Koeffizienten, Modus, Modulus, P und Q.

use crate::app::{AppIntent, AppState, Coefficient, PointSlot};
use crate::core::Mode;

/// Rendert das Parameter-Panel und gibt erzeugte Events zurück.
///
/// Textfelder erzeugen erst bei Enter oder Fokusverlust einen Intent.
pub fn render_controls_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("controls_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.label(state.curve.params.equation());
            ui.separator();

            for coefficient in [Coefficient::A, Coefficient::B] {
                let text = state.ui.coefficient_text_mut(coefficient);
                if committed_field(ui, coefficient.name(), text, true) {
                    events.push(AppIntent::CoefficientInputCommitted {
                        coefficient,
                        text: text.clone(),
                    });
                }
            }

            ui.separator();
            render_mode_selector(ui, state.curve.mode, &mut events);

            let modular = state.curve.mode == Mode::ModularField;
            if committed_field(ui, "p", &mut state.ui.modulus_text, modular) {
                events.push(AppIntent::ModulusInputCommitted {
                    text: state.ui.modulus_text.clone(),
                });
            }

            ui.separator();
            ui.heading("Punkte");
            ui.weak("Format: x,y");

            for slot in [PointSlot::P, PointSlot::Q] {
                let text = state.ui.point_text_mut(slot);
                if committed_field(ui, slot.label(), text, true) {
                    events.push(AppIntent::PointInputCommitted {
                        slot,
                        text: text.clone(),
                    });
                }
            }

            ui.separator();
            if ui.button("Generieren").clicked() {
                events.extend(commit_all(state));
                events.push(AppIntent::RegenerateRequested);
            }
        });

    events
}

fn render_mode_selector(ui: &mut egui::Ui, current: Mode, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        ui.label("Modus:");
        for mode in [Mode::Real, Mode::ModularField] {
            if ui.selectable_label(current == mode, mode.label()).clicked() && current != mode {
                events.push(AppIntent::ModeSelected { mode });
            }
        }
    });
}

/// Einzeiliges Textfeld mit Beschriftung. `true`, sobald die Eingabe bestätigt wurde.
fn committed_field(ui: &mut egui::Ui, label: &str, text: &mut String, enabled: bool) -> bool {
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(text).desired_width(120.0),
        );
        response.lost_focus()
    })
    .inner
}

/// Bestätigt alle Felder auf einmal ("Generieren").
///
/// Leere Punktfelder werden übersprungen; `p` nur im Modus modulo p.
fn commit_all(state: &AppState) -> Vec<AppIntent> {
    let ui = &state.ui;
    let mut events = vec![
        AppIntent::CoefficientInputCommitted {
            coefficient: Coefficient::A,
            text: ui.a_text.clone(),
        },
        AppIntent::CoefficientInputCommitted {
            coefficient: Coefficient::B,
            text: ui.b_text.clone(),
        },
    ];
    if state.curve.mode == Mode::ModularField {
        events.push(AppIntent::ModulusInputCommitted {
            text: ui.modulus_text.clone(),
        });
    }
    for (slot, text) in [(PointSlot::P, &ui.p_text), (PointSlot::Q, &ui.q_text)] {
        if !text.trim().is_empty() {
            events.push(AppIntent::PointInputCommitted {
                slot,
                text: text.clone(),
            });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_all_skips_empty_points_and_modulus_in_real_mode() {
        let mut state = AppState::new();
        state.ui.p_text = "0,1".into();
        let events = commit_all(&state);

        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[2],
            AppIntent::PointInputCommitted {
                slot: PointSlot::P,
                ..
            }
        ));
    }

    #[test]
    fn test_commit_all_includes_modulus_in_modular_mode() {
        let mut state = AppState::new();
        state.curve.mode = Mode::ModularField;
        let events = commit_all(&state);

        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::ModulusInputCommitted { .. })));
    }
}
