//! Parametric curve core: knot vectors, blending-function tables, and
//! curve evaluation for Bézier and B-spline curves.

pub mod blend;
pub mod curve;
pub mod evaluate;
pub mod sampling;

pub use blend::{bernstein_basis, binomial, BasisKind, BasisTable, KnotVector};
pub use curve::{
    BSplineCurve, BezierCurve, CurveSampling, Highlight, InvariantCheck, ParametricCurve,
};
pub use evaluate::{evaluate, validate_order, CurvePoints};
pub use sampling::{highlight_index, ParameterSamples, SamplingConfig};
