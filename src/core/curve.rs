//! Weierstrass-Kurve y² = x³ + a·x + b.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Standard-Toleranz für die Kurvenprüfung reeller Punkte.
pub const ON_CURVE_TOLERANCE: f64 = 1e-6;

/// Koeffizienten der Kurve y² = x³ + a·x + b.
///
/// Für sinnvolle Geometrie muss die Diskriminante `4a³ + 27b²` ungleich null sein.
/// Das wird nicht erzwungen, sondern nur über [`CurveParams::is_singular`] gemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Linearer Koeffizient a
    pub a: f64,
    /// Konstanter Koeffizient b
    pub b: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self { a: -1.0, b: 1.0 }
    }
}

impl CurveParams {
    /// Erstellt neue Kurvenparameter.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Rechte Seite der Kurvengleichung: x³ + a·x + b
    pub fn rhs(&self, x: f64) -> f64 {
        x * x * x + self.a * x + self.b
    }

    /// `4a³ + 27b²`
    pub fn discriminant(&self) -> f64 {
        4.0 * self.a.powi(3) + 27.0 * self.b * self.b
    }

    /// Gibt `true` zurück, wenn die Kurve singulär ist (Spitze oder Doppelpunkt).
    pub fn is_singular(&self) -> bool {
        self.discriminant().abs() < f64::EPSILON
    }

    /// Prüft, ob ein Punkt innerhalb der Toleranz auf der Kurve liegt.
    ///
    /// Die Toleranz ist relativ zur Größenordnung von y², damit große
    /// Koordinaten nicht an Rundungsfehlern scheitern.
    pub fn contains(&self, point: DVec2, tolerance: f64) -> bool {
        let lhs = point.y * point.y;
        let rhs = self.rhs(point.x);
        let scale = lhs.abs().max(rhs.abs()).max(1.0);
        (lhs - rhs).abs() <= tolerance * scale
    }

    /// Formatiert die Kurvengleichung für die Anzeige.
    pub fn equation(&self) -> String {
        format!(
            "y² = x³ {} {}·x {} {}",
            sign(self.a),
            self.a.abs(),
            sign(self.b),
            self.b.abs()
        )
    }
}

fn sign(value: f64) -> char {
    if value.is_sign_negative() {
        '-'
    } else {
        '+'
    }
}
