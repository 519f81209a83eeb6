//! Elliptic Curve Explorer Library.
//! Kurvenarithmetik, Zeichenanweisungen und Controller als Library exportiert
//! für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionOutcome};
pub use core::{
    mod_point_add, point_add, sample_real_curve, scan_modular_curve, CurveError, CurveParams,
    FieldModulus, Mode, ModPoint,
};
pub use shared::{DrawCommand, DrawList, ExplorerOptions};
