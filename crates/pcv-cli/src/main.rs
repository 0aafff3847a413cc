//! pcv - parametric curve sampler
//!
//! Samples Bézier and clamped B-spline curves together with their blending
//! functions and prints the result as JSON for an external plotter.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod error;
mod output;
mod points;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pcv_core::{traits::Validate, PcvError};
use pcv_curve::{BSplineCurve, BezierCurve, KnotVector, ParametricCurve, SamplingConfig};
use pcv_math::Point2;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;
use crate::output::{print_json, CurveReport};

/// Exit status when a curve request is rejected for its order.
const EXIT_ORDER_DIAGNOSTIC: i32 = 2;

#[derive(Parser)]
#[command(name = "pcv")]
#[command(about = "Sample Bézier and B-spline curves and their blending functions")]
#[command(version)]
struct Cli {
    /// Distance between parameter samples
    #[arg(long, global = true, env = "PCV_STEP", allow_negative_numbers = true)]
    step: Option<f64>,

    /// JSON sampling configuration file
    #[arg(long, global = true, env = "PCV_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bézier curve blended with the Bernstein basis
    Bezier {
        /// JSON file with control points as [[x, y], ...]
        #[arg(long)]
        control_points: Option<PathBuf>,

        /// Number of control points to use
        #[arg(short, long, default_value_t = 4)]
        points: usize,

        /// Highlight parameter in [0, 1)
        #[arg(short = 't', long = "highlight", default_value_t = 0.5)]
        t: f64,

        /// Override demo control point P1 as x,y
        #[arg(
            long,
            value_parser = parse_point_arg,
            allow_hyphen_values = true,
            conflicts_with = "control_points"
        )]
        p1: Option<Point2>,

        /// Override demo control point P2 as x,y
        #[arg(
            long,
            value_parser = parse_point_arg,
            allow_hyphen_values = true,
            conflicts_with = "control_points"
        )]
        p2: Option<Point2>,
    },

    /// Clamped B-spline curve blended with the Cox-de Boor basis
    Bspline {
        /// JSON file with control points as [[x, y], ...]
        #[arg(long)]
        control_points: Option<PathBuf>,

        /// Number of control points to use
        #[arg(short, long, default_value_t = 8)]
        points: usize,

        /// Curve order (degree + 1); empty means 2
        #[arg(short = 'k', long, default_value = "4", value_parser = parse_order)]
        order: usize,

        /// Highlight parameter as a fraction of the domain
        #[arg(short = 't', long = "highlight", default_value_t = 0.5)]
        t: f64,

        /// Override demo control point P1 as x,y
        #[arg(
            long,
            value_parser = parse_point_arg,
            allow_hyphen_values = true,
            conflicts_with = "control_points"
        )]
        p1: Option<Point2>,
    },

    /// Print the clamped knot vector for n + 1 control points and order k
    Knots {
        /// Number of control points minus one
        #[arg(short)]
        n: usize,

        /// Curve order
        #[arg(short)]
        k: usize,
    },
}

fn parse_point_arg(s: &str) -> std::result::Result<Point2, String> {
    points::parse_point(s).map_err(|e| e.to_string())
}

fn parse_order(s: &str) -> std::result::Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(2);
    }
    s.parse()
        .map_err(|_| format!("invalid order '{}': expected a non-negative integer", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pcv={0},pcv_curve={0}", log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            // Order problems are reported to the user, not treated as faults
            if let Some(diag) = e.downcast_ref::<PcvError>().filter(|d| d.is_order_diagnostic()) {
                eprintln!("{}", diag);
                std::process::exit(EXIT_ORDER_DIAGNOSTIC);
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn sampling_config(cli: &Cli) -> Result<SamplingConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => SamplingConfig::default(),
    };
    if let Some(step) = cli.step {
        config.step = step;
    }
    config.validate()?;
    debug!(step = config.step, "sampling configuration");
    Ok(config)
}

fn read_config(path: &Path) -> Result<SamplingConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidConfiguration(e.to_string()).into())
}

/// Control points from `path`, or the demo set with `P1`, `P2`, ... overrides.
fn control_points(
    path: Option<&Path>,
    defaults: Vec<Point2>,
    overrides: &[Option<Point2>],
) -> Result<Vec<Point2>> {
    match path {
        Some(path) => Ok(points::load_control_points(path)?),
        None => {
            let mut pts = defaults;
            for (i, value) in overrides.iter().enumerate() {
                points::apply_override(&mut pts, i + 1, *value);
            }
            Ok(pts)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Bezier {
            control_points: path,
            points: count,
            t,
            p1,
            p2,
        } => {
            let pts = control_points(
                path.as_deref(),
                points::default_bezier_points(),
                &[*p1, *p2],
            )?;
            let pts = points::select_points(pts, *count);

            let curve = BezierCurve::new(pts)?;
            let config = sampling_config(cli)?;
            let sampling = curve.evaluate(&config)?;
            info!(
                degree = curve.degree(),
                samples = sampling.samples.len(),
                "Bézier curve sampled"
            );

            let report = CurveReport::new(curve.control_points(), sampling, *t);
            print_json(&report, cli.pretty)
        }
        Commands::Bspline {
            control_points: path,
            points: count,
            order,
            t,
            p1,
        } => {
            let pts = control_points(path.as_deref(), points::default_bspline_points(), &[*p1])?;
            let pts = points::select_points(pts, *count);

            let curve = BSplineCurve::new(pts, *order)?;
            let config = sampling_config(cli)?;
            let sampling = curve.evaluate(&config)?;
            info!(order, samples = sampling.samples.len(), "B-spline curve sampled");

            let report = CurveReport::new(curve.control_points(), sampling, *t);
            print_json(&report, cli.pretty)
        }
        Commands::Knots { n, k } => {
            pcv_curve::validate_order(*k, n.saturating_add(1))?;
            let knots = KnotVector::clamped(*n, *k);
            print_json(&knots.as_slice(), cli.pretty)
        }
    }
}
