//! Use-Case-Funktionen für Koeffizienten, Modulus und Modus.

use crate::app::state::Coefficient;
use crate::app::AppState;
use crate::core::{CurveError, FieldModulus, Mode, ON_CURVE_TOLERANCE};

/// Setzt einen Koeffizienten.
pub fn set_coefficient(state: &mut AppState, coefficient: Coefficient, value: f64) {
    state.curve.set_coefficient(coefficient, value);
    log::info!(
        "Koeffizient {} = {} → {}",
        coefficient.name(),
        value,
        state.curve.params.equation()
    );
    if state.curve.params.is_singular() {
        log::warn!("Kurve ist singulär (Diskriminante = 0)");
    }
}

/// Setzt den Modulus.
pub fn set_modulus(state: &mut AppState, modulus: FieldModulus) {
    state.curve.modulus = modulus;
    log::info!("Modulus p = {}", modulus.value());
    if !modulus.is_prime() {
        log::warn!("p = {} ist keine Primzahl", modulus.value());
    }
}

/// Wechselt zwischen reeller Ebene und Restklassenkörper.
pub fn set_mode(state: &mut AppState, mode: Mode) {
    if state.curve.mode == mode {
        return;
    }
    state.curve.mode = mode;
    log::info!("Modus: {}", mode.label());
}

/// Meldet eine abgelehnte Eingabe. Der Kurven- und Auswahlzustand bleibt unverändert.
pub fn reject_input(state: &mut AppState, error: &CurveError) {
    log::warn!("Eingabe abgelehnt: {}", error);
    state.ui.status_message = Some(error.to_string());
}

/// Löscht die Statusmeldung. Läuft einmal vor jeder Eingaberunde, nicht pro Feld.
pub fn clear_status(state: &mut AppState) {
    state.ui.status_message = None;
}

/// Hinweise zum aktuellen Zustand, die kein Fehler sind.
///
/// Singuläre Kurve, zusammengesetzter Modulus und Punkte abseits der Kurve
/// werden trotzdem gezeichnet bzw. berechnet.
pub fn status_hints(state: &AppState) -> Vec<String> {
    let mut hints = Vec::new();
    let params = &state.curve.params;

    if params.is_singular() {
        hints.push("Kurve ist singulär (4a³ + 27b² = 0)".to_string());
    }

    match state.curve.mode {
        Mode::Real => {
            for (label, point) in [("P", state.selection.p), ("Q", state.selection.q)] {
                if let Some(point) = point {
                    if !params.contains(point, ON_CURVE_TOLERANCE) {
                        hints.push(format!("{label} liegt nicht auf der Kurve"));
                    }
                }
            }
        }
        Mode::ModularField => {
            let modulus = state.curve.modulus;
            if !modulus.is_prime() {
                hints.push(format!(
                    "p = {} ist keine Primzahl, Addition kann fehlschlagen",
                    modulus.value()
                ));
            }
        }
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_singular_curve_produces_hint() {
        let mut state = AppState::new();
        set_coefficient(&mut state, Coefficient::A, 0.0);
        set_coefficient(&mut state, Coefficient::B, 0.0);
        let hints = status_hints(&state);
        assert!(hints.iter().any(|h| h.contains("singulär")));
    }

    #[test]
    fn test_composite_modulus_hint_only_in_modular_mode() {
        let mut state = AppState::new();
        set_modulus(&mut state, FieldModulus::new(10, 500).expect("gültig"));
        assert!(status_hints(&state).is_empty());

        set_mode(&mut state, Mode::ModularField);
        assert!(status_hints(&state)
            .iter()
            .any(|h| h.contains("keine Primzahl")));
    }

    #[test]
    fn test_off_curve_point_hint() {
        let mut state = AppState::new();
        state.selection.p = Some(DVec2::new(0.0, 1.0));
        state.selection.q = Some(DVec2::new(0.0, 2.0));
        assert_eq!(status_hints(&state), vec!["Q liegt nicht auf der Kurve"]);
    }

    #[test]
    fn test_reject_input_keeps_curve() {
        let mut state = AppState::new();
        let before = state.curve;
        reject_input(&mut state, &CurveError::invalid_input("x", "keine Zahl"));
        assert_eq!(state.curve, before);
        assert!(state.ui.status_message.is_some());
    }
}
