use crate::core::{AdditionResult, CurvePoint, DegenerateSlope, ModAddition, RealAddition};
use crate::shared::DrawList;
use glam::DVec2;

/// Ergebnis der letzten Auswertung von P + Q (für die Statusleiste).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionOutcome {
    /// Mindestens einer der Summanden fehlt
    #[default]
    Incomplete,
    /// Endliche Summe
    Sum(DVec2),
    /// Neutralelement O
    Identity(DegenerateSlope),
    /// Numerisch nicht auswertbar
    Undefined,
    /// Berechnung übersprungen (Wertebereich, nicht invertierbarer Nenner)
    Failed(String),
}

impl SelectionOutcome {
    /// Übernimmt das Ergebnis einer reellen Addition.
    pub fn from_real(result: &RealAddition) -> Self {
        match result.sum_point() {
            Some(CurvePoint::Affine(sum)) => Self::Sum(sum),
            _ => Self::from_degenerate(result),
        }
    }

    /// Übernimmt das Ergebnis einer modularen Addition.
    pub fn from_modular(result: &ModAddition) -> Self {
        match result.sum_point() {
            Some(CurvePoint::Affine(sum)) => Self::Sum(sum.as_dvec2()),
            _ => Self::from_degenerate(result),
        }
    }

    fn from_degenerate<P, S>(result: &AdditionResult<P, S>) -> Self {
        match result {
            AdditionResult::Identity(reason) => Self::Identity(*reason),
            _ => Self::Undefined,
        }
    }

    /// Einzeilige Beschreibung für die Statusleiste.
    pub fn summary(&self) -> String {
        match self {
            Self::Incomplete => "P und Q eingeben".to_string(),
            Self::Sum(sum) => format!("P + Q = ({}, {})", sum.x, sum.y),
            Self::Identity(reason) => format!("P + Q = O ({})", reason.description()),
            Self::Undefined => "P + Q undefiniert".to_string(),
            Self::Failed(reason) => reason.clone(),
        }
    }
}

/// Darstellungszustand: die zuletzt erzeugte Zeichenliste und ihr Ergebnis
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Vollständige Zeichenliste des aktuellen Frames
    pub draw_list: DrawList,
    /// Ergebnis der Auswertung von P + Q
    pub outcome: SelectionOutcome,
    /// Anzahl der Neuberechnungen seit dem Start
    pub generation: u64,
}

impl ViewState {
    /// Erstellt einen leeren Darstellungszustand für die angegebene Canvas-Größe.
    pub fn new(size: DVec2) -> Self {
        Self {
            draw_list: DrawList::new(size),
            outcome: SelectionOutcome::Incomplete,
            generation: 0,
        }
    }
}
