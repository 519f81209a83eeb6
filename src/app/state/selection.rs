use glam::DVec2;

/// Einer der beiden Summanden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSlot {
    /// Erster Summand P
    P,
    /// Zweiter Summand Q
    Q,
}

impl PointSlot {
    /// Beschriftung im UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::Q => "Q",
        }
    }
}

/// Die beiden ausgewählten Punkte in Rohkoordinaten.
///
/// Im Modus "modulo p" werden sie erst beim Zeichnen reduziert, damit ein
/// Moduswechsel die Eingabe nicht verfälscht.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionState {
    /// Erster Summand
    pub p: Option<DVec2>,
    /// Zweiter Summand
    pub q: Option<DVec2>,
}

impl SelectionState {
    /// Erstellt eine leere Auswahl.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Punkt im angegebenen Slot.
    pub fn set(&mut self, slot: PointSlot, point: DVec2) {
        match slot {
            PointSlot::P => self.p = Some(point),
            PointSlot::Q => self.q = Some(point),
        }
    }

    /// Liest den Punkt im angegebenen Slot.
    pub fn get(&self, slot: PointSlot) -> Option<DVec2> {
        match slot {
            PointSlot::P => self.p,
            PointSlot::Q => self.q,
        }
    }

    /// Beide Punkte, falls beide gesetzt sind.
    pub fn both(&self) -> Option<(DVec2, DVec2)> {
        Some((self.p?, self.q?))
    }
}
