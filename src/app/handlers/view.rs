//! Handler für die Neuberechnung der Darstellung.

use crate::app::use_cases;
use crate::app::AppState;

/// Baut Zeichenliste und Ergebnis komplett neu auf.
pub fn regenerate(state: &mut AppState) {
    use_cases::scene::regenerate(state);
}
