use crate::app::state::{Coefficient, PointSlot};
use crate::core::Mode;
use crate::shared::ExplorerOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Koeffizienten-Eingabe bestätigt (Enter oder Fokusverlust)
    CoefficientInputCommitted {
        coefficient: Coefficient,
        text: String,
    },
    /// Modulus-Eingabe bestätigt
    ModulusInputCommitted { text: String },
    /// Modus umgeschaltet
    ModeSelected { mode: Mode },
    /// Punkt-Eingabe "x,y" bestätigt
    PointInputCommitted { slot: PointSlot, text: String },
    /// "Generieren" gedrückt
    RegenerateRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: Box<ExplorerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

impl AppIntent {
    /// Bestätigte Texteingabe, deren Ergebnis in der Statuszeile erscheint.
    pub fn is_input_commit(&self) -> bool {
        matches!(
            self,
            AppIntent::CoefficientInputCommitted { .. }
                | AppIntent::ModulusInputCommitted { .. }
                | AppIntent::PointInputCommitted { .. }
        )
    }
}
