//! Curve front-ends: Bézier and clamped B-spline.

mod bezier;
mod bspline;

use pcv_core::{Result, Tolerance};
use pcv_math::Point2;
use serde::Serialize;
use tracing::warn;

use crate::blend::{BasisTable, KnotVector};
use crate::evaluate::CurvePoints;
use crate::sampling::{highlight_index, ParameterSamples, SamplingConfig};

pub use bezier::BezierCurve;
pub use bspline::BSplineCurve;

/// Trait for curves blended from 2D control points.
pub trait ParametricCurve {
    /// The control points the curve blends.
    fn control_points(&self) -> &[Point2];

    /// Order of the blending functions (degree + 1).
    fn order(&self) -> usize;

    /// Return the sampled parameter domain `(u_min, u_max)`, end excluded.
    fn domain(&self) -> (f64, f64);

    /// Sample the curve and its blending functions.
    fn evaluate(&self, config: &SamplingConfig) -> Result<CurveSampling>;
}

/// Everything one evaluation produces: samples, knots, basis table, and
/// curve points. Built fresh per call and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CurveSampling {
    pub samples: ParameterSamples,
    pub knots: Option<KnotVector>,
    pub basis: BasisTable,
    pub points: CurvePoints,
    /// Multiplier turning a highlight fraction into a sample index.
    pub highlight_scale: f64,
    /// Tolerance taken from the sampling configuration.
    pub tolerance: Tolerance,
}

/// Outcome of the partition-of-unity and convex-hull checks on a sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvariantCheck {
    /// Blending weights of the curve's order sum to one at every sample.
    pub partition_of_unity: bool,
    /// Every curve point lies in the convex hull of the control points.
    pub within_hull: bool,
}

impl InvariantCheck {
    pub fn passed(&self) -> bool {
        self.partition_of_unity && self.within_hull
    }
}

/// A single highlighted sample: the curve point and every blending value
/// at its parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub index: usize,
    pub parameter: f64,
    pub point: Point2,
    /// `(order, weights)` for each level in the basis table.
    pub weights: Vec<(usize, Vec<f64>)>,
}

impl CurveSampling {
    /// Order of the level used to blend the curve points.
    pub fn order(&self) -> Option<usize> {
        self.basis.max_order()
    }

    /// Check partition of unity and convex-hull containment within the
    /// sampling tolerance.
    pub fn check_invariants(&self, control_points: &[Point2]) -> InvariantCheck {
        let partition_of_unity = match self.basis.max_order() {
            Some(order) => (0..self.samples.len()).all(|s| {
                self.basis
                    .weights_at(order, s)
                    .is_some_and(|w| self.tolerance.sums_to_one(w))
            }),
            None => false,
        };
        let within_hull = self
            .points
            .within_hull(control_points, self.tolerance.linear);

        let check = InvariantCheck {
            partition_of_unity,
            within_hull,
        };
        if !check.passed() {
            warn!(partition_of_unity, within_hull, "curve sampling failed invariant check");
        }
        check
    }

    /// Locate the sample for the highlight parameter `t`.
    ///
    /// Returns `None` when `t` maps outside the sampled range.
    pub fn highlight(&self, t: f64) -> Option<Highlight> {
        let index = highlight_index(
            t,
            self.samples.step(),
            self.highlight_scale,
            self.samples.len(),
        )?;
        let weights = self
            .basis
            .orders()
            .filter_map(|order| Some((order, self.basis.weights_at(order, index)?)))
            .collect();

        Some(Highlight {
            index,
            parameter: self.samples.get(index)?,
            point: self.points.get(index)?,
            weights,
        })
    }
}
