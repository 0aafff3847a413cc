/// Tolerances for floating comparisons on curve points and basis values.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Distance tolerance for curve and control points (in model units)
    pub linear: f64,
    /// Tolerance for parameter-space values: knots, samples, basis weights
    pub parametric: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_PARAMETRIC: f64 = 1e-12;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            parametric: Self::DEFAULT_PARAMETRIC,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-6,
            parametric: 1e-9,
        }
    }

    /// Check if a set of blending weights sums to one.
    ///
    /// The bound grows with the number of weights since each contributes
    /// its own rounding error.
    pub fn sums_to_one(self, weights: impl IntoIterator<Item = f64>) -> bool {
        let mut sum = 0.0;
        let mut count = 0usize;
        for w in weights {
            sum += w;
            count += 1;
        }
        (sum - 1.0).abs() < self.parametric * count.max(1) as f64
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
