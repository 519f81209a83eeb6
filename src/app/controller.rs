//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen einzelnen Intent (Batch der Länge 1).
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        self.handle_intents(state, vec![intent])
    }

    /// Verarbeitet alle Intents eines Frames als eine Eingaberunde.
    ///
    /// Enthält die Runde bestätigte Eingaben, wird die Statusmeldung genau
    /// einmal vorab gelöscht. Eine abgelehnte Eingabe bleibt so sichtbar,
    /// auch wenn danach gültige Felder derselben Runde folgen.
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: Vec<AppIntent>,
    ) -> anyhow::Result<()> {
        if intents.iter().any(AppIntent::is_input_commit) {
            self.handle_command(state, AppCommand::ClearStatus)?;
        }
        for intent in intents {
            self.process_intent(state, intent)?;
        }
        Ok(())
    }

    /// Nach jedem Intent wird die Zeichenliste vollständig neu erzeugt,
    /// auch wenn die Eingabe abgelehnt wurde.
    fn process_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let mut commands = self.map_intent_to_commands(state, intent);
        if !matches!(commands.last(), Some(AppCommand::Regenerate)) {
            commands.push(AppCommand::Regenerate);
        }

        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::SetCoefficient { coefficient, value } => {
                handlers::curve::set_coefficient(state, coefficient, value)
            }
            AppCommand::SetModulus { modulus } => handlers::curve::set_modulus(state, modulus),
            AppCommand::SetMode { mode } => handlers::curve::set_mode(state, mode),
            AppCommand::RejectInput { error } => handlers::curve::reject_input(state, &error),
            AppCommand::ClearStatus => handlers::curve::clear_status(state),

            // === Selektion ===
            AppCommand::SetPoint { slot, point } => {
                handlers::selection::set_point(state, slot, point)
            }

            // === Darstellung ===
            AppCommand::Regenerate => handlers::view::regenerate(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Zeichenliste aus dem aktuellen Zustand neu auf (z.B. beim Start).
    pub fn regenerate(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        self.handle_command(state, AppCommand::Regenerate)
    }
}
