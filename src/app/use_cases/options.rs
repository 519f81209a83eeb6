//! Use-Case-Funktionen für die Laufzeit-Optionen.

use crate::app::AppState;
use crate::core::FieldModulus;
use crate::shared::ExplorerOptions;

/// Übernimmt neue Optionen, ohne sie zu speichern.
///
/// Alle Werte werden wie beim Laden begrenzt. Liegt der aktuelle Modulus danach
/// außerhalb des erlaubten Bereichs, wird er auf das neue Maximum gesetzt.
pub fn apply(state: &mut AppState, options: ExplorerOptions) -> anyhow::Result<()> {
    let options = options.validated();
    if state.curve.modulus.value() > options.max_modulus {
        let clamped = FieldModulus::new(options.max_modulus as i64, options.max_modulus)?;
        log::warn!(
            "Modulus {} überschreitet max_modulus, wird auf {} gesetzt",
            state.curve.modulus.value(),
            clamped.value()
        );
        state.curve.modulus = clamped;
        state.ui.modulus_text = clamped.value().to_string();
    }
    state.options = options;
    Ok(())
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_and_save(state: &mut AppState, options: ExplorerOptions) -> anyhow::Result<()> {
    apply(state, options)?;
    let path = ExplorerOptions::config_path();
    state.options.save_to_file(&path)
}
