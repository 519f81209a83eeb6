//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Texteingaben werden hier geparst: Eine gültige Eingabe wird zu einem
//! `Set*`-Command, eine ungültige zu `RejectInput`.

use super::use_cases::input::{parse_coefficient, parse_modulus, parse_point};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let mode = state.curve.mode;
    match intent {
        AppIntent::CoefficientInputCommitted { coefficient, text } => {
            match parse_coefficient(&text, coefficient.name(), mode) {
                Ok(value) => vec![AppCommand::SetCoefficient { coefficient, value }],
                Err(error) => vec![AppCommand::RejectInput { error }],
            }
        }
        AppIntent::ModulusInputCommitted { text } => {
            match parse_modulus(&text, state.options.max_modulus) {
                Ok(modulus) => vec![AppCommand::SetModulus { modulus }],
                Err(error) => vec![AppCommand::RejectInput { error }],
            }
        }
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::PointInputCommitted { slot, text } => match parse_point(&text, mode) {
            Ok(point) => vec![AppCommand::SetPoint { slot, point }],
            Err(error) => vec![AppCommand::RejectInput { error }],
        },
        AppIntent::RegenerateRequested => vec![AppCommand::Regenerate],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
