use crate::app::state::{Coefficient, PointSlot};
use crate::core::{CurveError, FieldModulus, Mode};
use crate::shared::ExplorerOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Eingaben sind hier bereits geparst und validiert; ungültige Eingaben
/// kommen als `RejectInput` an.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Koeffizient setzen
    SetCoefficient {
        coefficient: Coefficient,
        value: f64,
    },
    /// Modulus setzen
    SetModulus { modulus: FieldModulus },
    /// Modus setzen
    SetMode { mode: Mode },
    /// Punkt im Slot setzen
    SetPoint { slot: PointSlot, point: DVec2 },
    /// Ungültige Eingabe melden, Zustand bleibt unverändert
    RejectInput { error: CurveError },
    /// Statusmeldung vor einer neuen Eingaberunde löschen
    ClearStatus,
    /// Zeichenliste und Ergebnis vollständig neu erzeugen
    Regenerate,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: Box<ExplorerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
