use super::{Coefficient, CurveState, PointSlot, SelectionState};

/// UI-bezogener Anwendungszustand
///
/// Die Textpuffer gehören dem Eingabefeld; erst ein Commit erzeugt einen Intent.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Eingabetext für a
    pub a_text: String,
    /// Eingabetext für b
    pub b_text: String,
    /// Eingabetext für p
    pub modulus_text: String,
    /// Eingabetext für P
    pub p_text: String,
    /// Eingabetext für Q
    pub q_text: String,
    /// Letzter Eingabefehler (wird bei gültiger Eingabe gelöscht)
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt die Textpuffer passend zum Startzustand.
    pub fn new(curve: &CurveState, selection: &SelectionState) -> Self {
        let mut ui = Self {
            a_text: format_number(curve.params.a),
            b_text: format_number(curve.params.b),
            modulus_text: curve.modulus.value().to_string(),
            ..Self::default()
        };
        for slot in [PointSlot::P, PointSlot::Q] {
            if let Some(point) = selection.get(slot) {
                *ui.point_text_mut(slot) =
                    format!("{},{}", format_number(point.x), format_number(point.y));
            }
        }
        ui
    }

    /// Textpuffer eines Koeffizienten.
    pub fn coefficient_text_mut(&mut self, coefficient: Coefficient) -> &mut String {
        match coefficient {
            Coefficient::A => &mut self.a_text,
            Coefficient::B => &mut self.b_text,
        }
    }

    /// Textpuffer eines Punkt-Slots.
    pub fn point_text_mut(&mut self, slot: PointSlot) -> &mut String {
        match slot {
            PointSlot::P => &mut self.p_text,
            PointSlot::Q => &mut self.q_text,
        }
    }
}

/// Kompakte Zahlendarstellung ohne überflüssige Nachkommastellen.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_text_buffers_mirror_initial_state() {
        let curve = CurveState::default();
        let selection = SelectionState {
            p: Some(DVec2::new(0.0, 1.0)),
            q: None,
        };
        let ui = UiState::new(&curve, &selection);
        assert_eq!(ui.a_text, "-1");
        assert_eq!(ui.b_text, "1");
        assert_eq!(ui.modulus_text, "97");
        assert_eq!(ui.p_text, "0,1");
        assert!(ui.q_text.is_empty());
    }

    #[test]
    fn test_format_number_keeps_fractions() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-3.0), "-3");
    }
}
