//! Optionen-Dialog für Farben, Größen, Abtastung und Modulus-Grenze.

use crate::app::{AppIntent, AppState};
use crate::core::modular::MODULUS_MIN;
use crate::shared::options::{
    MAX_MODULUS_LIMIT, MAX_SAMPLE_STEP, MIN_SAMPLE_STEP, SAMPLE_X_LIMIT,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Canvas ──────────────────────────────────────
                    ui.collapsing("Canvas", |ui| {
                        let size = &mut opts.canvas_size;
                        changed |= drag_row(ui, "Breite (px):", &mut size[0], 100.0..=2000.0, 1.0);
                        changed |= drag_row(ui, "Höhe (px):", &mut size[1], 100.0..=2000.0, 1.0);
                        changed |= drag_row(
                            ui,
                            "Pixel pro Einheit:",
                            &mut opts.real_scale,
                            1.0..=500.0,
                            0.5,
                        );
                        changed |=
                            drag_row(ui, "Linienstärke:", &mut opts.line_width, 0.5..=10.0, 0.1);
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        changed |= drag_row(
                            ui,
                            "Radius P/Q/R/Summe:",
                            &mut opts.marker_radius,
                            1.0..=20.0,
                            0.1,
                        );
                        changed |= drag_row(
                            ui,
                            "Radius Punkte mod p:",
                            &mut opts.field_marker_radius,
                            0.5..=10.0,
                            0.1,
                        );
                    });

                    // ── Abtastung ───────────────────────────────────
                    ui.collapsing("Abtastung (reell)", |ui| {
                        let domain = &mut opts.real_domain;
                        let x_range = -SAMPLE_X_LIMIT..=SAMPLE_X_LIMIT;
                        changed |= drag_row(ui, "x min:", &mut domain.x_min, x_range.clone(), 0.1);
                        changed |= drag_row(ui, "x max:", &mut domain.x_max, x_range, 0.1);
                        changed |= drag_row(
                            ui,
                            "Schrittweite:",
                            &mut domain.step,
                            MIN_SAMPLE_STEP..=MAX_SAMPLE_STEP,
                            0.001,
                        );
                        if domain.x_max < domain.x_min {
                            ui.colored_label(egui::Color32::YELLOW, "x max < x min: keine Abtastung");
                        }
                    });

                    // ── Modulo p ────────────────────────────────────
                    ui.collapsing("Modulo p", |ui| {
                        changed |= drag_row(
                            ui,
                            "Größter Modulus:",
                            &mut opts.max_modulus,
                            MODULUS_MIN..=MAX_MODULUS_LIMIT,
                            1.0,
                        );
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        let palette = &mut opts.palette;
                        changed |= color_edit(ui, "Hintergrund:", &mut palette.background);
                        changed |= color_edit(ui, "Achsen:", &mut palette.axis);
                        changed |= color_edit(ui, "Kurve:", &mut palette.curve);
                        changed |= color_edit(ui, "P:", &mut palette.p);
                        changed |= color_edit(ui, "Q:", &mut palette.q);
                        changed |= color_edit(ui, "Schnittpunkt R:", &mut palette.intersection);
                        changed |= color_edit(ui, "Summe:", &mut palette.sum);
                        changed |= color_edit(ui, "Hilfsgerade:", &mut palette.construction);
                        changed |= color_edit(ui, "Spiegelung:", &mut palette.reflection);
                        changed |= color_edit(ui, "Text:", &mut palette.text);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Beschriftete DragValue-Zeile.
fn drag_row<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: std::ops::RangeInclusive<N>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
