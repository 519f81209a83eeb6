//! UI-Komponenten: Menü, Parameter-Panel, Statusleiste, Canvas, Optionen-Dialog.

pub mod canvas;
pub mod controls;
/// UI-Layer mit egui
///
/// Komponenten lesen den AppState und liefern `AppIntent`s zurück;
/// mutiert wird ausschließlich über den Controller.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use canvas::render_canvas;
pub use controls::render_controls_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
