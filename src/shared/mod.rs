//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod draw_list;
pub mod options;

pub use draw_list::{DrawCommand, DrawList, LineRole, MarkerRole, Rgba};
pub use options::{ExplorerOptions, Palette, MAX_MODULUS};
