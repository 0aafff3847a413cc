//! Blending functions: clamped knot vectors, the Cox-de Boor table, and
//! the Bernstein basis.

pub mod basis;
pub mod bernstein;
pub mod knot;

pub use basis::{BasisKind, BasisTable};
pub use bernstein::{bernstein_basis, binomial};
pub use knot::KnotVector;
