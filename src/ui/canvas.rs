//! Zentrales Canvas mit fester Größe.

use crate::app::AppState;
use crate::render::paint_draw_list;

/// Zeichnet die aktuelle Zeichenliste in ein Canvas der konfigurierten Größe.
///
/// Ist weniger Platz vorhanden, wird die Liste beim Malen proportional verkleinert.
pub fn render_canvas(ctx: &egui::Context, state: &AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let [width, height] = state.options.canvas_size;
        let available = ui.available_size();
        let size = egui::vec2(width.min(available.x), height.min(available.y));
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        paint_draw_list(ui.painter(), rect, &state.view.draw_list);
    });
}
