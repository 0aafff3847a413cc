//! Control point sources: the built-in demo sets, JSON files, and the
//! `x,y` overrides for the demo points.

use std::path::Path;

use pcv_math::{dvec2, Point2};
use tracing::debug;

use crate::error::CliError;

/// Demo control polygon for Bézier curves.
pub fn default_bezier_points() -> Vec<Point2> {
    vec![
        dvec2(-2.0, 0.0),
        dvec2(-1.0, 2.0),
        dvec2(3.0, 2.0),
        dvec2(4.0, 0.0),
        dvec2(1.0, 1.0),
        dvec2(0.0, 0.5),
        dvec2(3.0, -0.5),
    ]
}

/// Demo control polygon for B-spline curves.
pub fn default_bspline_points() -> Vec<Point2> {
    vec![
        dvec2(-2.0, 0.0),
        dvec2(-1.0, 2.0),
        dvec2(3.0, 2.0),
        dvec2(4.0, 0.0),
        dvec2(1.0, 1.0),
        dvec2(0.0, 0.5),
        dvec2(2.0, -0.5),
        dvec2(0.0, -0.5),
    ]
}

/// Parse a point given as `x,y`.
pub fn parse_point(s: &str) -> Result<Point2, CliError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| CliError::InvalidPoint(s.to_string()))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidPoint(s.to_string()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidPoint(s.to_string()))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(CliError::InvalidPoint(s.to_string()));
    }
    Ok(dvec2(x, y))
}

/// Read control points from a JSON file holding `[[x, y], ...]`.
pub fn load_control_points(path: &Path) -> Result<Vec<Point2>, CliError> {
    let text = std::fs::read_to_string(path)?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&text)?;
    if let Some(bad) = pairs.iter().find(|p| !(p[0].is_finite() && p[1].is_finite())) {
        return Err(CliError::InvalidControlPoints(format!(
            "non-finite point [{}, {}]",
            bad[0], bad[1]
        )));
    }
    debug!(path = %path.display(), count = pairs.len(), "loaded control points");
    Ok(pairs.into_iter().map(|[x, y]| dvec2(x, y)).collect())
}

/// Keep the first `count` points; all of them if there are fewer.
pub fn select_points(mut points: Vec<Point2>, count: usize) -> Vec<Point2> {
    points.truncate(count);
    points
}

/// Replace the point at `index` when an override is given and the index
/// exists.
pub fn apply_override(points: &mut [Point2], index: usize, value: Option<Point2>) {
    if let (Some(value), Some(slot)) = (value, points.get_mut(index)) {
        *slot = value;
    }
}
