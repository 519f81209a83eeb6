//! Kurve über dem endlichen Körper F_p: Punktsuche und modulare Punktaddition.

use super::curve::CurveParams;
use super::error::CurveError;
use super::point::{
    AdditionResult, Construction, ConstructionKind, CurvePoint, DegenerateSlope, ModAddition,
    ModPoint,
};
use glam::DVec2;

/// Kleinster zulässiger Modulus.
pub const MODULUS_MIN: u64 = 2;

/// Modulus p für den Modus "modulo p".
///
/// Der Wert ist auf `[MODULUS_MIN, max]` beschränkt, damit der O(p²)-Scan
/// die Oberfläche nicht blockiert. Primzahl ist beabsichtigt, wird aber nicht erzwungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldModulus(u64);

impl FieldModulus {
    /// Prüft den Wertebereich und erstellt den Modulus.
    pub fn new(value: i64, max: u64) -> Result<Self, CurveError> {
        if value < MODULUS_MIN as i64 || value as u64 > max {
            return Err(CurveError::out_of_domain(format!(
                "p = {value} liegt nicht in [{MODULUS_MIN}, {max}]"
            )));
        }
        Ok(Self(value as u64))
    }

    /// Rohwert p.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Reduziert einen beliebigen Wert in `[0, p)`.
    pub fn reduce(self, value: i128) -> u64 {
        value.rem_euclid(self.0 as i128) as u64
    }

    /// Probedivision; p ist höchstens einige hundert groß.
    pub fn is_prime(self) -> bool {
        let p = self.0;
        if p < 4 {
            return p >= 2;
        }
        if p % 2 == 0 {
            return false;
        }
        let mut d = 3;
        while d * d <= p {
            if p % d == 0 {
                return false;
            }
            d += 2;
        }
        true
    }
}

impl Default for FieldModulus {
    fn default() -> Self {
        Self(97)
    }
}

/// Erweiterter euklidischer Algorithmus: liefert (ggT, s) mit s·a ≡ ggT (mod m).
fn extended_gcd(a: i128, m: i128) -> (i128, i128) {
    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    (old_r, old_s)
}

/// Modulares Inverses von `value` modulo `modulus`.
///
/// `Err(ggT)` wenn ggT(value, modulus) ≠ 1.
pub fn mod_inverse(value: u64, modulus: u64) -> Result<u64, u64> {
    let m = modulus as i128;
    let (gcd, s) = extended_gcd((value as i128).rem_euclid(m), m);
    if gcd != 1 {
        return Err(gcd as u64);
    }
    Ok(s.rem_euclid(m) as u64)
}

/// Ganzzahlige Koeffizienten für die modulare Rechnung.
///
/// Nicht-ganzzahlige a oder b sind im Modus "modulo p" nicht definiert.
pub fn integral_coefficients(params: &CurveParams) -> Result<(i64, i64), CurveError> {
    Ok((integral(params.a, "a")?, integral(params.b, "b")?))
}

/// Konvertiert einen reellen Wert in eine ganze Zahl, falls er ganzzahlig ist.
pub fn integral(value: f64, name: &str) -> Result<i64, CurveError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > i64::MAX as f64 / 2.0 {
        return Err(CurveError::out_of_domain(format!(
            "{name} = {value} ist im Modus modulo p nicht ganzzahlig"
        )));
    }
    Ok(value as i64)
}

/// Konvertiert reelle Eingabekoordinaten in einen reduzierten Punkt über F_p.
pub fn to_mod_point(point: DVec2, modulus: FieldModulus) -> Result<ModPoint, CurveError> {
    let x = integral(point.x, "x")?;
    let y = integral(point.y, "y")?;
    Ok(ModPoint::new(
        modulus.reduce(x as i128),
        modulus.reduce(y as i128),
    ))
}

/// (x³ + a·x + b) mod p, normalisiert in `[0, p)`.
pub fn modular_rhs(x: u64, a: i64, b: i64, modulus: FieldModulus) -> u64 {
    let p = modulus.value() as i128;
    let x = x as i128 % p;
    let a = (a as i128).rem_euclid(p);
    let b = (b as i128).rem_euclid(p);
    let x_cubed = x * x % p * x % p;
    modulus.reduce(x_cubed + a * x % p + b)
}

/// Prüft, ob (x, y) die Kurvengleichung modulo p erfüllt.
pub fn is_on_modular_curve(point: ModPoint, a: i64, b: i64, modulus: FieldModulus) -> bool {
    let y = point.y as i128 % modulus.value() as i128;
    modulus.reduce(y * y) == modular_rhs(point.x, a, b, modulus)
}

/// Sucht alle affinen Punkte der Kurve über F_p (vollständiger O(p²)-Scan).
///
/// Die Punkte sind nach x, dann y aufsteigend sortiert.
pub fn scan_modular_curve(
    params: &CurveParams,
    modulus: FieldModulus,
) -> Result<Vec<ModPoint>, CurveError> {
    let (a, b) = integral_coefficients(params)?;
    let p = modulus.value();

    let mut points = Vec::new();
    for x in 0..p {
        let rhs = modular_rhs(x, a, b, modulus);
        for y in 0..p {
            if y * y % p == rhs {
                points.push(ModPoint::new(x, y));
            }
        }
    }
    Ok(points)
}

/// Addiert zwei Punkte über F_p.
///
/// Division wird durch das modulare Inverse (erweiterter Euklid) ersetzt.
/// Ist der Nenner nicht invertierbar (p zusammengesetzt), wird `NotInvertible` gemeldet.
pub fn mod_point_add(
    p: ModPoint,
    q: ModPoint,
    params: &CurveParams,
    modulus: FieldModulus,
) -> Result<ModAddition, CurveError> {
    let (a, _) = integral_coefficients(params)?;
    let m = modulus.value() as i128;
    let (x1, y1) = (p.x as i128 % m, p.y as i128 % m);
    let (x2, y2) = (q.x as i128 % m, q.y as i128 % m);

    // Senkrecht nur bei y₁ + y₂ ≡ 0; sonst scheitert das Inverse des Nenners.
    let mirrored = (y1 + y2) % m == 0;
    let (kind, numerator, denominator) = if x1 == x2 && y1 == y2 {
        if mirrored {
            return Ok(AdditionResult::Identity(DegenerateSlope::VerticalTangent));
        }
        (ConstructionKind::Tangent, 3 * x1 * x1 + a as i128, 2 * y1)
    } else if x1 == x2 && mirrored {
        return Ok(AdditionResult::Identity(DegenerateSlope::VerticalChord));
    } else {
        (ConstructionKind::Secant, y2 - y1, x2 - x1)
    };

    let denominator = modulus.reduce(denominator);
    let inverse = mod_inverse(denominator, modulus.value()).map_err(|gcd| {
        CurveError::NotInvertible {
            denominator,
            modulus: modulus.value(),
            gcd,
        }
    })?;

    let slope = modulus.reduce(modulus.reduce(numerator) as i128 * inverse as i128);
    let s = slope as i128;
    let x3 = modulus.reduce(s * s - x1 - x2);
    let y_raw = modulus.reduce(s * (x1 - x3 as i128) - y1);
    let intersection = ModPoint::new(x3, y_raw);
    let sum = ModPoint::new(x3, modulus.reduce(-(y_raw as i128)));

    Ok(AdditionResult::Sum(Construction {
        kind,
        slope,
        intersection,
        sum,
    }))
}

/// Gruppenaddition über F_p inklusive Neutralelement: O + Q = Q, P + O = P.
pub fn mod_add_curve_points(
    p: CurvePoint<ModPoint>,
    q: CurvePoint<ModPoint>,
    params: &CurveParams,
    modulus: FieldModulus,
) -> Result<Option<CurvePoint<ModPoint>>, CurveError> {
    if p.is_identity() {
        return Ok(Some(q));
    }
    match (p.affine(), q.affine()) {
        (Some(p), Some(q)) => Ok(mod_point_add(p, q, params, modulus)?.sum_point()),
        _ => Ok(Some(p)),
    }
}
