//! Darstellungsmodus (reelle Ebene oder endlicher Körper).

use serde::{Deserialize, Serialize};

/// Aktiver Rechen- und Darstellungspfad. Die Modi schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Kurve über den reellen Zahlen
    #[default]
    Real,
    /// Kurve über F_p (diskrete Punktmenge)
    ModularField,
}

impl Mode {
    /// Anzeigename für Toolbar und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Real => "Reell",
            Mode::ModularField => "Modulo p",
        }
    }
}
