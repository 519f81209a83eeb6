//! Core-Domänentypen: Kurve, Punkte, reelle und modulare Arithmetik, Viewport.

pub mod curve;
pub mod error;
pub mod modular;
pub mod mode;
pub mod point;
pub mod real;
pub mod sampling;
pub mod viewport;

pub use curve::{CurveParams, ON_CURVE_TOLERANCE};
pub use error::CurveError;
pub use modular::{
    is_on_modular_curve, mod_add_curve_points, mod_inverse, mod_point_add, scan_modular_curve,
    to_mod_point, FieldModulus,
};
pub use mode::Mode;
pub use point::{
    AdditionResult, Construction, ConstructionKind, CurvePoint, DegenerateSlope, ModAddition,
    ModConstruction, ModPoint, RealAddition, RealConstruction,
};
pub use real::{add_curve_points, line_y, point_add, point_double};
pub use sampling::{sample_real_curve, Branch, CurveBranches, SampleDomain};
pub use viewport::Viewport;
