//! Zeichenanweisungen als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Lebt im shared-Modul, da `app`/`render` sie erzeugen und der Canvas sie konsumiert.
//! Alle Koordinaten sind Canvas-Pixel (Ursprung oben links).

use crate::core::Branch;
use glam::DVec2;

/// RGBA-Farbe mit Komponenten in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Bedeutung eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// Erster gewählter Punkt
    P,
    /// Zweiter gewählter Punkt
    Q,
    /// Schnittpunkt R der Hilfsgeraden mit der Kurve
    Intersection,
    /// Gruppensumme P + Q
    Sum,
    /// Kurvenpunkt im Modus modulo p
    FieldPoint,
}

/// Bedeutung einer Linie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// x- oder y-Achse
    Axis,
    /// Sekante oder Tangente durch P und Q
    Construction,
    /// Strecke von R zur Summe (Spiegelung)
    Reflection,
}

/// Einzelne Zeichenanweisung.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Canvas vollständig mit Farbe füllen
    Clear { color: Rgba },
    /// Offener Linienzug eines Kurvenzweigs (ein zusammenhängender Lauf)
    Polyline {
        branch: Branch,
        points: Vec<DVec2>,
        color: Rgba,
        width: f32,
    },
    /// Gerade Strecke
    Line {
        role: LineRole,
        from: DVec2,
        to: DVec2,
        color: Rgba,
        width: f32,
    },
    /// Gefüllter Kreis
    Marker {
        role: MarkerRole,
        center: DVec2,
        radius: f32,
        color: Rgba,
    },
    /// Beschriftung (z.B. Hinweis auf das Neutralelement)
    Text {
        position: DVec2,
        text: String,
        color: Rgba,
    },
}

/// Vollständige Zeichenanweisungen für einen Canvas-Zustand.
///
/// Wird bei jeder Änderung komplett neu erzeugt und ersetzt die vorherige Liste.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    /// Canvas-Größe in Pixeln
    pub size: DVec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Erstellt eine leere Liste für ein Canvas der gegebenen Größe.
    pub fn new(size: DVec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Hängt eine Anweisung an.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Hängt mehrere Anweisungen an.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    /// Read-only Sicht auf alle Anweisungen in Zeichenreihenfolge.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Anzahl der Anweisungen.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn keine Anweisungen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Mittelpunkte aller Marker einer Rolle.
    pub fn marker_centers(&self, role: MarkerRole) -> Vec<DVec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Marker {
                    role: r, center, ..
                } if *r == role => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Anzahl der Linien einer Rolle.
    pub fn line_count(&self, role: LineRole) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { role: r, .. } if *r == role))
            .count()
    }

    /// Alle Linienzüge eines Zweigs.
    pub fn polylines(&self, branch: Branch) -> Vec<&[DVec2]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline {
                    branch: b, points, ..
                } if *b == branch => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Alle Beschriftungstexte.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_filter_by_role() {
        let mut list = DrawList::new(DVec2::new(600.0, 600.0));
        assert!(list.is_empty());

        list.push(DrawCommand::Clear {
            color: [1.0, 1.0, 1.0, 1.0],
        });
        list.push(DrawCommand::Marker {
            role: MarkerRole::P,
            center: DVec2::new(300.0, 250.0),
            radius: 5.0,
            color: [1.0, 0.0, 0.0, 1.0],
        });
        list.push(DrawCommand::Marker {
            role: MarkerRole::Q,
            center: DVec2::new(350.0, 250.0),
            radius: 5.0,
            color: [0.0, 0.5, 0.0, 1.0],
        });
        list.extend([
            DrawCommand::Line {
                role: LineRole::Axis,
                from: DVec2::ZERO,
                to: DVec2::new(600.0, 0.0),
                color: [0.0; 4],
                width: 1.0,
            },
            DrawCommand::Text {
                position: DVec2::new(10.0, 10.0),
                text: "P + Q = O".to_string(),
                color: [0.0; 4],
            },
        ]);

        assert_eq!(list.len(), 5);
        assert_eq!(list.marker_centers(MarkerRole::P), vec![DVec2::new(300.0, 250.0)]);
        assert!(list.marker_centers(MarkerRole::Sum).is_empty());
        assert_eq!(list.line_count(LineRole::Axis), 1);
        assert_eq!(list.line_count(LineRole::Construction), 0);
        assert_eq!(list.texts(), vec!["P + Q = O"]);
        assert!(list.polylines(Branch::Upper).is_empty());
    }
}
