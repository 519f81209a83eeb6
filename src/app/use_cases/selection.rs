//! Use-Case-Funktionen für die Auswahl von P und Q.

use crate::app::state::PointSlot;
use crate::app::AppState;
use glam::DVec2;

/// Setzt einen Summanden. Die Koordinaten sind bereits validiert.
pub fn set_point(state: &mut AppState, slot: PointSlot, point: DVec2) {
    state.selection.set(slot, point);
    log::info!("{} = ({}, {})", slot.label(), point.x, point.y);
}
