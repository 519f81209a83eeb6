//! Parsen der Texteingaben (Koeffizienten, Modulus, Punkte).
//!
//! Fehler werden als `CurveError` geliefert; der Aufrufer entscheidet, ob
//! daraus ein `RejectInput`-Command wird. Der Zustand wird hier nie verändert.

use crate::core::modular::integral;
use crate::core::{CurveError, FieldModulus, Mode};
use glam::DVec2;

/// Parst einen Koeffizienten (`a` oder `b`) als endliche Gleitkommazahl.
///
/// Im Modus "modulo p" muss der Wert zusätzlich ganzzahlig sein.
pub fn parse_coefficient(text: &str, name: &str, mode: Mode) -> Result<f64, CurveError> {
    let value = parse_finite(text.trim(), text, name)?;
    if mode == Mode::ModularField {
        integral(value, name)?;
    }
    Ok(value)
}

/// Parst den Modulus als ganze Zahl in `[2, max]`.
pub fn parse_modulus(text: &str, max: u64) -> Result<FieldModulus, CurveError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CurveError::invalid_input(text, "p muss eine ganze Zahl sein"))?;
    FieldModulus::new(value, max)
}

/// Parst einen Punkt im Format `"x,y"`.
///
/// Genau zwei durch Komma getrennte Zahlen, Leerzeichen um die Teile sind erlaubt.
/// Im Modus "modulo p" müssen beide Koordinaten ganzzahlig sein.
pub fn parse_point(text: &str, mode: Mode) -> Result<DVec2, CurveError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [x, y] = parts.as_slice() else {
        return Err(CurveError::invalid_input(
            text,
            format!(
                "erwartet genau zwei Koordinaten \"x,y\", gefunden {}",
                parts.len()
            ),
        ));
    };

    let point = DVec2::new(parse_finite(x, text, "x")?, parse_finite(y, text, "y")?);
    if mode == Mode::ModularField {
        integral(point.x, "x")?;
        integral(point.y, "y")?;
    }
    Ok(point)
}

fn parse_finite(part: &str, input: &str, name: &str) -> Result<f64, CurveError> {
    if part.is_empty() {
        return Err(CurveError::invalid_input(input, format!("{name} fehlt")));
    }
    let value: f64 = part
        .parse()
        .map_err(|_| CurveError::invalid_input(input, format!("{name} ist keine Zahl")))?;
    if !value.is_finite() {
        return Err(CurveError::invalid_input(
            input,
            format!("{name} muss endlich sein"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
