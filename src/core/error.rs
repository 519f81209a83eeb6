//! Fehlertypen der Kurven-Domäne.

use thiserror::Error;

/// Fehler bei Eingabe, Parametern oder modularer Arithmetik.
///
/// Kein Fehler ist fatal: der Controller meldet ihn in der Statuszeile
/// und behält den letzten gültigen Zustand bei.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Eingabetext konnte nicht gelesen werden (falsche Anzahl, keine Zahl, …)
    #[error("Ungültige Eingabe '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
    /// Wert liegt außerhalb des berechenbaren Bereichs
    #[error("Außerhalb des Definitionsbereichs: {reason}")]
    OutOfDomain { reason: String },
    /// Nenner der Steigung ist modulo p nicht invertierbar (ggT ≠ 1)
    #[error("Nenner {denominator} ist modulo {modulus} nicht invertierbar (ggT = {gcd})")]
    NotInvertible {
        denominator: u64,
        modulus: u64,
        gcd: u64,
    },
}

impl CurveError {
    /// Kurzform für `InvalidInput`.
    pub fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Kurzform für `OutOfDomain`.
    pub fn out_of_domain(reason: impl Into<String>) -> Self {
        Self::OutOfDomain {
            reason: reason.into(),
        }
    }
}
