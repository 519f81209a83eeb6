//! Handler für Koeffizienten, Modulus, Modus und abgelehnte Eingaben.

use crate::app::state::Coefficient;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveError, FieldModulus, Mode};

/// Setzt einen Koeffizienten.
pub fn set_coefficient(state: &mut AppState, coefficient: Coefficient, value: f64) {
    use_cases::curve::set_coefficient(state, coefficient, value);
}

/// Setzt den Modulus.
pub fn set_modulus(state: &mut AppState, modulus: FieldModulus) {
    use_cases::curve::set_modulus(state, modulus);
}

/// Wechselt den Modus.
pub fn set_mode(state: &mut AppState, mode: Mode) {
    use_cases::curve::set_mode(state, mode);
}

/// Löscht die Statusmeldung.
pub fn clear_status(state: &mut AppState) {
    use_cases::curve::clear_status(state);
}

/// Meldet eine ungültige Eingabe in der Statusleiste.
pub fn reject_input(state: &mut AppState, error: &CurveError) {
    use_cases::curve::reject_input(state, error);
}
