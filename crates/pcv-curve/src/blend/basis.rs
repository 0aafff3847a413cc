//! Per-degree blending-function tables.
//!
//! A [`BasisTable`] stores one dense matrix per order level: row `i` holds
//! basis function `i` evaluated at every parameter sample. The number of
//! functions shrinks by one per level, so the table is triangular across
//! levels while each level stays rectangular.

use nalgebra::DMatrix;
use serde::Serialize;
use tracing::debug;

use super::bernstein::bernstein_basis;

/// Which algorithm produced a [`BasisTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisKind {
    /// Cox-de Boor recursion over a knot vector, one level per order.
    CoxDeBoor,
    /// Bernstein polynomials, a single flat level.
    Bernstein,
}

/// Blending functions of every order from `first_order` to `max_order`.
///
/// Levels are addressed by order (degree + 1). For a Cox-de Boor table,
/// order 1 holds the piecewise-constant indicator functions and order `k`
/// the functions used to blend a curve of order `k`. The knot vector is
/// kept as the order-0 bookkeeping row.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisTable {
    kind: BasisKind,
    knots: Vec<f64>,
    samples: Vec<f64>,
    first_order: usize,
    levels: Vec<DMatrix<f64>>,
}

impl BasisTable {
    /// Build every B-spline basis level up to order `k` with the Cox-de Boor
    /// recursion.
    ///
    /// Each level is computed from the previous full level only. A zero knot
    /// span contributes a zero term instead of dividing.
    ///
    /// # Arguments
    /// * `samples` - Parameter values to evaluate the functions at
    /// * `knots` - The knot vector
    /// * `k` - Highest order to build
    pub fn cox_de_boor(samples: &[f64], knots: &[f64], k: usize) -> Self {
        let mut levels: Vec<DMatrix<f64>> = Vec::with_capacity(k);

        for order in 1..=k {
            let count = knots.len().saturating_sub(order);
            let level = if order == 1 {
                indicator_level(samples, knots, count)
            } else {
                // Level `order - 1` is always the last one pushed.
                let prev = &levels[order - 2];
                recurse_level(samples, knots, prev, order, count)
            };
            levels.push(level);
        }

        debug!(
            orders = k,
            knots = knots.len(),
            samples = samples.len(),
            "built Cox-de Boor basis table"
        );

        Self {
            kind: BasisKind::CoxDeBoor,
            knots: knots.to_vec(),
            samples: samples.to_vec(),
            first_order: 1,
            levels,
        }
    }

    /// Build the Bernstein basis of degree `n` as a single flat level of
    /// order `n + 1`.
    pub fn bernstein(n: usize, samples: &[f64]) -> Self {
        let level = bernstein_basis(n, samples);
        debug!(degree = n, samples = samples.len(), "built Bernstein basis");
        Self {
            kind: BasisKind::Bernstein,
            knots: Vec::new(),
            samples: samples.to_vec(),
            first_order: n + 1,
            levels: vec![level],
        }
    }

    pub fn kind(&self) -> BasisKind {
        self.kind
    }

    /// The order-0 bookkeeping row: the knot vector the table was built
    /// from. Empty for a Bernstein table.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Highest order held by the table, or `None` if it has no levels.
    pub fn max_order(&self) -> Option<usize> {
        (!self.levels.is_empty()).then(|| self.first_order + self.levels.len() - 1)
    }

    /// Orders present in the table, lowest first.
    pub fn orders(&self) -> std::ops::Range<usize> {
        self.first_order..self.first_order + self.levels.len()
    }

    /// Basis functions of the given order; rows are functions, columns samples.
    pub fn level(&self, order: usize) -> Option<&DMatrix<f64>> {
        self.levels.get(order.checked_sub(self.first_order)?)
    }

    /// Basis functions of the given polynomial degree.
    pub fn degree(&self, degree: usize) -> Option<&DMatrix<f64>> {
        self.level(degree + 1)
    }

    /// The highest level, whose functions blend the curve.
    pub fn target(&self) -> Option<&DMatrix<f64>> {
        self.levels.last()
    }

    /// Number of basis functions at the given order.
    pub fn function_count(&self, order: usize) -> Option<usize> {
        self.level(order).map(|m| m.nrows())
    }

    /// Function `i` of the given order over all samples.
    pub fn row(&self, order: usize, i: usize) -> Option<Vec<f64>> {
        let level = self.level(order)?;
        (i < level.nrows()).then(|| level.row(i).iter().copied().collect())
    }

    /// Every function of the given order at sample index `sample`.
    pub fn weights_at(&self, order: usize, sample: usize) -> Option<Vec<f64>> {
        let level = self.level(order)?;
        (sample < level.ncols()).then(|| level.column(sample).iter().copied().collect())
    }

    /// All functions of the given order as nested rows, for plotting.
    pub fn rows(&self, order: usize) -> Option<Vec<Vec<f64>>> {
        let level = self.level(order)?;
        Some(
            level
                .row_iter()
                .map(|row| row.iter().copied().collect())
                .collect(),
        )
    }
}

/// Order-1 level: `1` where `knots[i] <= u < knots[i + 1]`, else `0`.
fn indicator_level(samples: &[f64], knots: &[f64], count: usize) -> DMatrix<f64> {
    DMatrix::from_fn(count, samples.len(), |i, s| {
        let u = samples[s];
        if knots[i] <= u && u < knots[i + 1] {
            1.0
        } else {
            0.0
        }
    })
}

/// Level of order `d >= 2` from the full level of order `d - 1`.
fn recurse_level(
    samples: &[f64],
    knots: &[f64],
    prev: &DMatrix<f64>,
    d: usize,
    count: usize,
) -> DMatrix<f64> {
    let mut level = DMatrix::zeros(count, samples.len());

    for i in 0..count {
        let left_den = knots[i + d - 1] - knots[i];
        let right_den = knots[i + d] - knots[i + 1];

        for (s, &u) in samples.iter().enumerate() {
            let left = if left_den == 0.0 {
                0.0
            } else {
                (u - knots[i]) * prev[(i, s)] / left_den
            };
            let right = if right_den == 0.0 {
                0.0
            } else {
                (knots[i + d] - u) * prev[(i + 1, s)] / right_den
            };
            level[(i, s)] = left + right;
        }
    }

    level
}
