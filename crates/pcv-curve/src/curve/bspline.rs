//! Clamped B-spline curves blended with the Cox-de Boor basis.

use pcv_core::{PcvError, Result};
use pcv_math::Point2;
use serde::Serialize;
use tracing::debug;

use super::{CurveSampling, ParametricCurve};
use crate::blend::{BasisTable, KnotVector};
use crate::evaluate::{evaluate, validate_order};
use crate::sampling::{ParameterSamples, SamplingConfig};

/// A B-spline curve of order `k` over a clamped knot vector.
#[derive(Debug, Clone, Serialize)]
pub struct BSplineCurve {
    order: usize,
    knots: KnotVector,
    control_points: Vec<Point2>,
}

impl BSplineCurve {
    /// Build a curve of order `k` (degree `k - 1`).
    ///
    /// Fails with `DegreeTooHigh` when `k` exceeds the control point count
    /// and with `ZeroOrder` when `k == 0`.
    pub fn new(control_points: Vec<Point2>, order: usize) -> Result<Self> {
        validate_order(order, control_points.len())?;
        let n = control_points.len() - 1;
        let knots = KnotVector::clamped(n, order);
        Ok(Self {
            order,
            knots,
            control_points,
        })
    }

    pub fn degree(&self) -> usize {
        self.order - 1
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }
}

impl ParametricCurve for BSplineCurve {
    fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    fn order(&self) -> usize {
        self.order
    }

    fn domain(&self) -> (f64, f64) {
        // `new` guarantees order >= 1 and n + k + 1 knots
        self.knots.domain().unwrap_or((0.0, 0.0))
    }

    fn evaluate(&self, config: &SamplingConfig) -> Result<CurveSampling> {
        let (start, stop) = self.domain();
        let samples = ParameterSamples::range(start, stop, config.step)?;
        let basis = BasisTable::cox_de_boor(samples.values(), self.knots.as_slice(), self.order);
        let target = basis.level(self.order).ok_or_else(|| {
            PcvError::InvalidOperation(format!("Basis table is missing order {}", self.order))
        })?;
        let points = evaluate(target, &self.control_points)?;

        debug!(
            order = self.order,
            control_points = self.control_points.len(),
            samples = samples.len(),
            "evaluated B-spline curve"
        );

        Ok(CurveSampling {
            samples,
            highlight_scale: self.knots.last().unwrap_or(1.0),
            knots: Some(self.knots.clone()),
            basis,
            points,
            tolerance: config.tolerance,
        })
    }
}
