//! Punkte und Ergebnis der Sehnen-Tangenten-Konstruktion.

use glam::DVec2;

/// Punkt einer elliptischen Kurve inklusive Neutralelement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurvePoint<P> {
    /// Punkt im Unendlichen (neutrales Element, nicht darstellbar)
    Identity,
    /// Affiner Punkt mit endlichen Koordinaten
    Affine(P),
}

impl<P: Copy> CurvePoint<P> {
    /// Gibt `true` zurück, wenn der Punkt das Neutralelement ist.
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }

    /// Affine Koordinaten, falls vorhanden.
    pub fn affine(&self) -> Option<P> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine(p) => Some(*p),
        }
    }
}

/// Punkt über F_p mit Residuen in `[0, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModPoint {
    pub x: u64,
    pub y: u64,
}

impl ModPoint {
    /// Erstellt einen modularen Punkt (Koordinaten werden nicht reduziert).
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Position in Kurvenkoordinaten für das Rendering.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

/// Art der Hilfsgeraden durch P und Q.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionKind {
    /// Sekante durch zwei verschiedene Punkte
    Secant,
    /// Tangente bei Verdopplung (P = Q)
    Tangent,
}

/// Grund für eine senkrechte Hilfsgerade (Ergebnis ist das Neutralelement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateSlope {
    /// Verdopplung eines Punkts mit y = 0 (Punkt der Ordnung 2)
    VerticalTangent,
    /// P und Q liegen senkrecht übereinander (x₁ = x₂, P ≠ Q)
    VerticalChord,
}

impl DegenerateSlope {
    /// Erklärung für die Statuszeile.
    pub fn description(self) -> &'static str {
        match self {
            DegenerateSlope::VerticalTangent => "senkrechte Tangente (y = 0, Punkt der Ordnung 2)",
            DegenerateSlope::VerticalChord => "senkrechte Sekante (x₁ = x₂)",
        }
    }
}

/// Zwischenergebnisse der Konstruktion: Steigung, dritter Schnittpunkt R und Summe −R.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Construction<P, S> {
    /// Sekante oder Tangente
    pub kind: ConstructionKind,
    /// Steigung der Hilfsgeraden
    pub slope: S,
    /// Dritter Schnittpunkt R der Geraden mit der Kurve
    pub intersection: P,
    /// Gruppensumme P + Q (Spiegelung von R an der x-Achse)
    pub sum: P,
}

/// Ergebnis einer Punktaddition.
///
/// Liefert nie einen nicht-endlichen Zahlenwert: senkrechte Geraden werden
/// als `Identity` markiert, numerischer Überlauf als `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdditionResult<P, S> {
    /// Endliche Summe mit vollständiger Konstruktion
    Sum(Construction<P, S>),
    /// Summe ist der Punkt im Unendlichen
    Identity(DegenerateSlope),
    /// Nicht berechenbar (nicht-endliche Eingaben oder Überlauf)
    Undefined,
}

impl<P: Copy, S: Copy> AdditionResult<P, S> {
    /// Die Summe als Kurvenpunkt, `None` wenn undefiniert.
    pub fn sum_point(&self) -> Option<CurvePoint<P>> {
        match self {
            AdditionResult::Sum(c) => Some(CurvePoint::Affine(c.sum)),
            AdditionResult::Identity(_) => Some(CurvePoint::Identity),
            AdditionResult::Undefined => None,
        }
    }

    /// Die Konstruktion, falls eine endliche Summe existiert.
    pub fn construction(&self) -> Option<&Construction<P, S>> {
        match self {
            AdditionResult::Sum(c) => Some(c),
            _ => None,
        }
    }

    /// Gibt `true` zurück, wenn die Summe das Neutralelement ist.
    pub fn is_identity(&self) -> bool {
        matches!(self, AdditionResult::Identity(_))
    }
}

/// Konstruktion über den reellen Zahlen.
pub type RealConstruction = Construction<DVec2, f64>;
/// Additionsergebnis über den reellen Zahlen.
pub type RealAddition = AdditionResult<DVec2, f64>;
/// Konstruktion über F_p.
pub type ModConstruction = Construction<ModPoint, u64>;
/// Additionsergebnis über F_p.
pub type ModAddition = AdditionResult<ModPoint, u64>;
