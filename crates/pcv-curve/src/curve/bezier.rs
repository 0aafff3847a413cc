//! Bézier curves blended with the Bernstein basis.

use pcv_core::{PcvError, Result};
use pcv_math::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CurveSampling, ParametricCurve};
use crate::blend::BasisTable;
use crate::evaluate::evaluate;
use crate::sampling::{ParameterSamples, SamplingConfig};

/// A Bézier curve of degree `n` over `n + 1` control points, parameterized
/// over `[0, 1)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    pub control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>) -> Result<Self> {
        if control_points.is_empty() {
            return Err(PcvError::EmptyControlPoints);
        }
        Ok(Self { control_points })
    }

    /// Polynomial degree, one less than the control point count.
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }
}

impl ParametricCurve for BezierCurve {
    fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    fn order(&self) -> usize {
        self.control_points.len()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn evaluate(&self, config: &SamplingConfig) -> Result<CurveSampling> {
        let (start, stop) = self.domain();
        let samples = ParameterSamples::range(start, stop, config.step)?;
        let basis = BasisTable::bernstein(self.degree(), samples.values());
        let target = basis
            .target()
            .ok_or_else(|| PcvError::InvalidOperation("Bernstein table has no level".into()))?;
        let points = evaluate(target, &self.control_points)?;

        debug!(
            degree = self.degree(),
            samples = samples.len(),
            "evaluated Bézier curve"
        );

        Ok(CurveSampling {
            samples,
            knots: None,
            basis,
            points,
            highlight_scale: 1.0,
            tolerance: config.tolerance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcv_math::dvec2;

    fn demo_points() -> Vec<Point2> {
        vec![dvec2(-2.0, 0.0), dvec2(-1.0, 2.0), dvec2(3.0, 2.0), dvec2(4.0, 0.0)]
    }

    #[test]
    fn test_bezier_rejects_empty() {
        assert!(matches!(
            BezierCurve::new(Vec::new()),
            Err(PcvError::EmptyControlPoints)
        ));
    }

    #[test]
    fn test_bezier_cubic_samples() {
        let curve = BezierCurve::new(demo_points()).unwrap();
        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.order(), 4);

        let sampling = curve.evaluate(&SamplingConfig::default()).unwrap();
        assert_eq!(sampling.samples.len(), 100);
        assert_eq!(sampling.points.len(), 100);
        assert!(sampling.knots.is_none());
        assert_eq!(sampling.order(), Some(4));

        // Starts on the first control point
        let p0 = sampling.points.get(0).unwrap();
        assert!((p0 - dvec2(-2.0, 0.0)).length() < 1e-12);

        let pm = sampling.points.get(50).unwrap();
        assert!((pm - dvec2(1.0, 1.5)).length() < 1e-12);
    }

    #[test]
    fn test_bezier_highlight() {
        let curve = BezierCurve::new(demo_points()).unwrap();
        let sampling = curve.evaluate(&SamplingConfig::default()).unwrap();

        let h = sampling.highlight(0.5).unwrap();
        assert_eq!(h.index, 50);
        assert_eq!(h.parameter, 0.5);
        assert_eq!(h.weights.len(), 1);
        assert_eq!(h.weights[0].0, 4);
        assert_eq!(h.weights[0].1, vec![0.125, 0.375, 0.375, 0.125]);

        assert!(sampling.highlight(1.0).is_none());
    }

    #[test]
    fn test_bezier_single_point_is_constant() {
        let curve = BezierCurve::new(vec![dvec2(3.0, -1.0)]).unwrap();
        let sampling = curve.evaluate(&SamplingConfig::with_step(0.25)).unwrap();
        assert_eq!(sampling.points.len(), 4);
        assert!(sampling.points.iter().all(|&p| p == dvec2(3.0, -1.0)));
    }
}
