//! JSON reports handed to an external plotter.

use pcv_curve::{BasisKind, CurveSampling, Highlight, InvariantCheck};
use pcv_math::{Aabb2, Point2};
use serde::Serialize;

/// Margin added around the control polygon for plot limits.
const PLOT_MARGIN: f64 = 1.0;

/// One level of blending functions, as nested rows over the samples.
#[derive(Debug, Serialize)]
pub struct BasisLevel {
    pub order: usize,
    pub degree: usize,
    pub functions: Vec<Vec<f64>>,
}

/// Everything needed to draw a curve, its control polygon, and its
/// blending functions.
#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub kind: BasisKind,
    pub order: usize,
    pub control_points: Vec<Point2>,
    /// Control polygon bounds grown by the plot margin
    pub plot_bounds: Option<Aabb2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knots: Option<Vec<f64>>,
    pub samples: Vec<f64>,
    pub curve: Vec<Point2>,
    pub basis: Vec<BasisLevel>,
    pub highlight: Option<Highlight>,
    pub checks: InvariantCheck,
}

impl CurveReport {
    pub fn new(control_points: &[Point2], sampling: CurveSampling, t: f64) -> Self {
        let highlight = sampling.highlight(t);
        let checks = sampling.check_invariants(control_points);
        let basis = sampling
            .basis
            .orders()
            .filter_map(|order| {
                Some(BasisLevel {
                    order,
                    degree: order - 1,
                    functions: sampling.basis.rows(order)?,
                })
            })
            .collect();

        Self {
            kind: sampling.basis.kind(),
            order: sampling.order().unwrap_or(0),
            control_points: control_points.to_vec(),
            plot_bounds: Aabb2::from_points(control_points).map(|b| b.expand(PLOT_MARGIN)),
            knots: sampling.knots.map(|k| k.into_vec()),
            samples: sampling.samples.values().to_vec(),
            curve: sampling.points.into(),
            basis,
            highlight,
            checks,
        }
    }
}

/// Print a serializable value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcv_core::Tolerance;
    use pcv_curve::{BSplineCurve, ParametricCurve, SamplingConfig};
    use pcv_math::dvec2;

    #[test]
    fn test_report_for_bspline() {
        let cps = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0)];
        let curve = BSplineCurve::new(cps.clone(), 2).unwrap();
        let sampling = curve.evaluate(&SamplingConfig::with_step(0.5)).unwrap();
        let report = CurveReport::new(&cps, sampling, 0.5);

        assert_eq!(report.kind, BasisKind::CoxDeBoor);
        assert_eq!(report.order, 2);
        assert_eq!(report.knots, Some(vec![0.0, 0.0, 1.0, 2.0, 2.0]));
        assert_eq!(report.samples, vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(report.basis.len(), 2);
        assert_eq!(report.basis[1].degree, 1);
        assert_eq!(report.basis[1].functions.len(), 3);
        assert_eq!(report.highlight.as_ref().map(|h| h.index), Some(2));
        assert!(report.checks.passed());

        let bounds = report.plot_bounds.unwrap();
        assert_eq!(bounds.min, dvec2(-1.0, -1.0));
        assert_eq!(bounds.max, dvec2(3.0, 2.0));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "cox_de_boor");
        assert_eq!(json["curve"][2], serde_json::json!([1.0, 1.0]));
    }

    #[test]
    fn test_report_checks_follow_config_tolerance() {
        let cps = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0)];
        let curve = BSplineCurve::new(cps.clone(), 3).unwrap();

        let mut config = SamplingConfig::with_step(0.1);
        let report = CurveReport::new(&cps, curve.evaluate(&config).unwrap(), 0.5);
        assert!(report.checks.partition_of_unity);

        config.tolerance = Tolerance {
            parametric: 0.0,
            ..Tolerance::default()
        };
        let report = CurveReport::new(&cps, curve.evaluate(&config).unwrap(), 0.5);
        assert!(!report.checks.partition_of_unity);
        assert!(report.checks.within_hull);
    }
}
