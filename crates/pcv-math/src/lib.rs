pub mod aabb;
pub mod hull;

pub use aabb::Aabb2;
pub use glam::{dvec2, DVec2};
pub use hull::ConvexHull2;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
