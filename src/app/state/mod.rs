//! Application State: zentrale Datenhaltung.

mod app_state;
mod curve;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use curve::{Coefficient, CurveState};
pub use selection::{PointSlot, SelectionState};
pub use ui::UiState;
pub use view::{SelectionOutcome, ViewState};
