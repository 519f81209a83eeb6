//! Handler für die Auswahl von P und Q.

use crate::app::state::PointSlot;
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Setzt einen Summanden.
pub fn set_point(state: &mut AppState, slot: PointSlot, point: DVec2) {
    use_cases::selection::set_point(state, slot, point);
}
