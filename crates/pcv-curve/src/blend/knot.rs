//! Clamped (non-periodic) knot vectors.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A non-decreasing knot sequence for a curve of order `k` over `n + 1`
/// control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector {
    knots: Vec<f64>,
    order: usize,
}

impl KnotVector {
    /// Build the clamped knot vector of length `n + k + 1`.
    ///
    /// The first `k` knots are `0`, the interior knots are unit spaced, and
    /// the last `k` knots equal `n - k + 2`.
    ///
    /// # Arguments
    /// * `n` - Number of control points minus 1
    /// * `k` - Order of the curve (degree + 1), expected to be at least 1
    pub fn clamped(n: usize, k: usize) -> Self {
        debug_assert!(k >= 1, "Curve order must be at least 1, got {}", k);

        let end = n as f64 - k as f64 + 2.0;
        let knots: Vec<f64> = (0..=n + k)
            .map(|i| {
                if i < k {
                    0.0
                } else if i <= n {
                    (i - k + 1) as f64
                } else {
                    end
                }
            })
            .collect();

        debug!(n, k, len = knots.len(), end, "built clamped knot vector");
        Self { knots, order: k }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.knots
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Number of control points this knot vector supports (`n + 1`).
    pub fn control_point_count(&self) -> usize {
        self.knots.len().saturating_sub(self.order)
    }

    /// The last knot value, which scales the highlight parameter.
    pub fn last(&self) -> Option<f64> {
        self.knots.last().copied()
    }

    /// Parameter domain `[knots[k - 1], knots[n + 1])` over which the basis
    /// functions of order `k` sum to one.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let start = *self.knots.get(self.order.checked_sub(1)?)?;
        let end = *self.knots.get(self.control_point_count())?;
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_cubic_bezier_equivalent() {
        let knots = KnotVector::clamped(3, 4);
        assert_eq!(knots.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(knots.domain(), Some((0.0, 1.0)));
        assert_eq!(knots.control_point_count(), 4);
    }

    #[test]
    fn test_clamped_linear() {
        let knots = KnotVector::clamped(3, 2);
        assert_eq!(knots.as_slice(), &[0.0, 0.0, 1.0, 2.0, 3.0, 3.0]);
        assert_eq!(knots.domain(), Some((0.0, 3.0)));
    }

    #[test]
    fn test_clamped_interior_knots() {
        // 8 control points, cubic
        let knots = KnotVector::clamped(7, 4);
        assert_eq!(
            knots.as_slice(),
            &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0]
        );
        assert_eq!(knots.last(), Some(5.0));
        assert_eq!(knots.domain(), Some((0.0, 5.0)));
    }

    #[test]
    fn test_clamped_order_one() {
        let knots = KnotVector::clamped(2, 1);
        assert_eq!(knots.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(knots.domain(), Some((0.0, 3.0)));
    }

    #[test]
    fn test_clamped_shape() {
        for n in 0..8 {
            for k in 1..=n + 1 {
                let knots = KnotVector::clamped(n, k);
                let s = knots.as_slice();
                assert_eq!(s.len(), n + k + 1);
                assert!(s.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", s);
                assert!(s[..k].iter().all(|&v| v == 0.0));
                let end = (n + 2 - k) as f64;
                assert!(s[s.len() - k..].iter().all(|&v| v == end));
            }
        }
    }
}
