use super::{CurveState, SelectionState, UiState, ViewState};
use crate::app::CommandLog;
use crate::shared::ExplorerOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Koeffizienten, Modus und Modulus
    pub curve: CurveState,
    /// Ausgewählte Punkte P und Q
    pub selection: SelectionState,
    /// Textpuffer, Statusmeldung, Dialog-Sichtbarkeit
    pub ui: UiState,
    /// Zeichenliste und Ergebnis
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Abtastung)
    pub options: ExplorerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(ExplorerOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen (z.B. geladenen) Optionen.
    ///
    /// Die Optionen werden vorher auf zulässige Bereiche begrenzt.
    pub fn with_options(options: ExplorerOptions) -> Self {
        let options = options.validated();
        let curve = CurveState::default();
        let selection = SelectionState::new();
        Self {
            curve,
            selection,
            ui: UiState::new(&curve, &selection),
            view: ViewState::new(options.canvas_dvec2()),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
