//! Blending control points into sampled curve points.

use nalgebra::DMatrix;
use pcv_core::{PcvError, Result};
use pcv_math::{ConvexHull2, Point2};
use serde::Serialize;
use tracing::warn;

/// Sampled curve coordinates, aligned with the parameter samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CurvePoints(Vec<Point2>);

impl CurvePoints {
    pub fn as_slice(&self) -> &[Point2] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point2> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.0.iter()
    }

    /// Whether every point lies in the convex hull of `control_points`.
    pub fn within_hull(&self, control_points: &[Point2], tolerance: f64) -> bool {
        let hull = ConvexHull2::from_points(control_points);
        self.0.iter().all(|&p| hull.contains(p, tolerance))
    }
}

impl From<CurvePoints> for Vec<Point2> {
    fn from(points: CurvePoints) -> Self {
        points.0
    }
}

/// Check that a curve of order `k` can be built over `point_count` control
/// points.
///
/// An order above the point count is checked before a zero order.
pub fn validate_order(order: usize, point_count: usize) -> Result<()> {
    if order > point_count {
        warn!(order, point_count, "order exceeds control point count");
        return Err(PcvError::DegreeTooHigh {
            order,
            points: point_count,
        });
    }
    if order == 0 {
        warn!(point_count, "order must be positive");
        return Err(PcvError::ZeroOrder);
    }
    Ok(())
}

/// Blend control points with one level of basis functions.
///
/// `basis` has one row per control point and one column per sample. Each
/// curve point is `sum_i basis[i, s] * control_points[i]`.
pub fn evaluate(basis: &DMatrix<f64>, control_points: &[Point2]) -> Result<CurvePoints> {
    if basis.nrows() != control_points.len() {
        return Err(PcvError::DimensionMismatch {
            basis: basis.nrows(),
            points: control_points.len(),
        });
    }

    let mut points = Vec::with_capacity(basis.ncols());
    for s in 0..basis.ncols() {
        let mut x = 0.0;
        let mut y = 0.0;
        for (i, cp) in control_points.iter().enumerate() {
            let w = basis[(i, s)];
            x += w * cp.x;
            y += w * cp.y;
        }
        points.push(Point2::new(x, y));
    }

    Ok(CurvePoints(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::bernstein_basis;
    use pcv_math::dvec2;

    #[test]
    fn test_validate_order() {
        validate_order(4, 4).unwrap();
        validate_order(1, 1).unwrap();
        assert!(matches!(
            validate_order(5, 4),
            Err(PcvError::DegreeTooHigh { order: 5, points: 4 })
        ));
        assert!(matches!(validate_order(0, 4), Err(PcvError::ZeroOrder)));
        // Too-high wins over zero-order when there are no points at all
        assert!(matches!(
            validate_order(1, 0),
            Err(PcvError::DegreeTooHigh { .. })
        ));
        assert!(matches!(validate_order(0, 0), Err(PcvError::ZeroOrder)));
    }

    #[test]
    fn test_evaluate_linear_blend() {
        let basis = DMatrix::from_row_slice(2, 3, &[1.0, 0.5, 0.0, 0.0, 0.5, 1.0]);
        let cps = [dvec2(0.0, 0.0), dvec2(2.0, 4.0)];
        let curve = evaluate(&basis, &cps).unwrap();

        assert_eq!(curve.len(), 3);
        let expected = [dvec2(0.0, 0.0), dvec2(1.0, 2.0), dvec2(2.0, 4.0)];
        assert_eq!(curve.as_slice(), &expected);
    }

    #[test]
    fn test_evaluate_dimension_mismatch() {
        let basis = DMatrix::zeros(3, 5);
        let cps = [dvec2(0.0, 0.0), dvec2(1.0, 1.0)];
        assert!(matches!(
            evaluate(&basis, &cps),
            Err(PcvError::DimensionMismatch { basis: 3, points: 2 })
        ));
    }

    #[test]
    fn test_evaluate_cubic_midpoint() {
        let cps = [dvec2(-2.0, 0.0), dvec2(-1.0, 2.0), dvec2(3.0, 2.0), dvec2(4.0, 0.0)];
        let basis = bernstein_basis(3, &[0.5]);
        let p = evaluate(&basis, &cps).unwrap().get(0).unwrap();

        let expected = 0.125 * cps[0] + 0.375 * cps[1] + 0.375 * cps[2] + 0.125 * cps[3];
        assert!((p - expected).length() < 1e-12);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_within_hull() {
        let cps = [dvec2(-2.0, 0.0), dvec2(-1.0, 2.0), dvec2(3.0, 2.0), dvec2(4.0, 0.0)];
        let samples: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
        let curve = evaluate(&bernstein_basis(3, &samples), &cps).unwrap();
        assert!(curve.within_hull(&cps, 1e-9));
        assert!(!curve.within_hull(&cps[..2], 1e-9));
    }
}
