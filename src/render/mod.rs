//! Erzeugung der Zeichenanweisungen und Ausgabe auf den egui-Canvas.
//!
//! Die Sub-Renderer sind reine Funktionen: Kurvendaten + Viewport → `DrawCommand`s.
//! Nur `canvas_painter` kennt egui.

mod canvas_painter;
mod construction_renderer;
mod curve_renderer;
mod field_renderer;
mod types;

pub use canvas_painter::{paint_draw_list, to_color32};
pub use construction_renderer::render_selection;
pub use curve_renderer::{render_axes, render_real_curve};
pub use field_renderer::{render_modular_curve, render_modular_selection};
pub use types::RenderContext;
