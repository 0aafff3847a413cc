//! Planar convex hull of a control polygon.

use serde::{Deserialize, Serialize};

use crate::Point2;

/// Convex hull of a point set, stored as counter-clockwise vertices.
///
/// Degenerate inputs collapse to one vertex (all points coincide) or two
/// vertices (all points collinear).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvexHull2 {
    vertices: Vec<Point2>,
}

/// Cross product of vectors OA and OB.
fn cross(o: Point2, a: Point2, b: Point2) -> f64 {
    (a - o).perp_dot(b - o)
}

fn distance_to_segment(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + t * ab)).length()
}

impl ConvexHull2 {
    /// Build the hull with Andrew's monotone chain.
    pub fn from_points(points: &[Point2]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
        sorted.dedup_by(|a, b| (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12);

        if sorted.len() < 3 {
            return Self { vertices: sorted };
        }

        let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
        for &p in &sorted {
            while let &[.., o, a] = lower.as_slice() {
                if cross(o, a, p) > 0.0 {
                    break;
                }
                lower.pop();
            }
            lower.push(p);
        }

        let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
        for &p in sorted.iter().rev() {
            while let &[.., o, a] = upper.as_slice() {
                if cross(o, a, p) > 0.0 {
                    break;
                }
                upper.pop();
            }
            upper.push(p);
        }

        // Endpoints of each chain are shared
        lower.pop();
        upper.pop();
        lower.extend(upper);

        Self { vertices: lower }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `p` lies inside or on the hull, allowing `tolerance` of slack
    /// outside each edge.
    pub fn contains(&self, p: Point2, tolerance: f64) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => (p - *a).length() <= tolerance,
            [a, b] => distance_to_segment(p, *a, *b) <= tolerance,
            verts => verts.iter().enumerate().all(|(i, &a)| {
                let b = verts[(i + 1) % verts.len()];
                let edge_len = (b - a).length();
                cross(a, b, p) / edge_len >= -tolerance
            }),
        }
    }
}
