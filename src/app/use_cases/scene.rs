//! Neuberechnung der Zeichenliste.

use crate::app::render_scene;
use crate::app::AppState;

/// Erzeugt Zeichenliste und Ergebnis vollständig neu und ersetzt die vorherigen.
pub fn regenerate(state: &mut AppState) {
    let scene = render_scene::build(state);
    log::debug!(
        "Neu gezeichnet: {} Anweisungen, {}",
        scene.draw_list.len(),
        scene.outcome.summary()
    );
    state.view.draw_list = scene.draw_list;
    state.view.outcome = scene.outcome;
    state.view.generation += 1;
}
