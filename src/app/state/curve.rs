use crate::core::{CurveParams, FieldModulus, Mode};

/// Koeffizient der Weierstraß-Gleichung `y² = x³ + a·x + b`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    /// Linearer Koeffizient a
    A,
    /// Konstanter Koeffizient b
    B,
}

impl Coefficient {
    /// Kurzname für Meldungen und Beschriftungen.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// Kurvenbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveState {
    /// Aktuelle Koeffizienten
    pub params: CurveParams,
    /// Reelle Ebene oder Restklassenkörper
    pub mode: Mode,
    /// Modulus für den Modus "modulo p"; bleibt im reellen Modus erhalten
    pub modulus: FieldModulus,
}

impl CurveState {
    /// Setzt einen einzelnen Koeffizienten.
    pub fn set_coefficient(&mut self, coefficient: Coefficient, value: f64) {
        match coefficient {
            Coefficient::A => self.params.a = value,
            Coefficient::B => self.params.b = value,
        }
    }
}
