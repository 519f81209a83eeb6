//! Verlauf der ausgeführten Commands.
//!
//! Dient der Nachvollziehbarkeit einer Eingaberunde: Welche Felder wurden
//! übernommen, welche mit `RejectInput` abgelehnt, und folgte darauf ein
//! `Regenerate`. Jeder Eintrag wird zusätzlich auf Debug-Level geloggt.
//! Es gibt kein Undo; der Verlauf wird nie zurückgespielt.

use super::AppCommand;

/// Begrenzter Verlauf ausgeführter Commands, älteste zuerst.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen Command, bevor er ausgeführt wird.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        log::debug!("Command: {:?}", command);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Der zuletzt protokollierte Command (nach jedem Intent `Regenerate`).
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}
