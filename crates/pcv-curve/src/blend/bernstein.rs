//! Bernstein polynomial basis for Bézier curves.

use nalgebra::DMatrix;

/// Binomial coefficient `C(n, i)` as a float.
pub fn binomial(n: usize, i: usize) -> f64 {
    if i > n {
        return 0.0;
    }
    let kk = i.min(n - i);
    let mut c = 1.0_f64;
    for j in 0..kk {
        c *= (n - j) as f64;
        c /= (j + 1) as f64;
    }
    c
}

/// Evaluate the `n + 1` Bernstein polynomials of degree `n` at every sample.
///
/// Row `i` holds `C(n, i) * u^i * (1 - u)^(n - i)`.
pub fn bernstein_basis(n: usize, samples: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(n + 1, samples.len(), |i, s| {
        let u = samples[s];
        binomial(n, i) * u.powi(i as i32) * (1.0 - u).powi((n - i) as i32)
    })
}
