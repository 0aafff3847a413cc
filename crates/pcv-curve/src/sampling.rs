//! Parameter sampling and the sampling configuration.

use pcv_core::{traits::Validate, PcvError, Result, Tolerance};
use serde::{Deserialize, Serialize};

/// Sampling configuration shared by all curve kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Distance between consecutive parameter samples
    pub step: f64,
    /// Tolerance used when checking basis and curve invariants
    pub tolerance: Tolerance,
}

impl SamplingConfig {
    pub const DEFAULT_STEP: f64 = 0.01;

    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
            tolerance: Tolerance::default(),
        }
    }
}

impl Validate for SamplingConfig {
    fn validate(&self) -> Result<()> {
        if self.step.is_finite() && self.step > 0.0 {
            Ok(())
        } else {
            Err(PcvError::InvalidStep(self.step))
        }
    }
}

/// Evenly spaced parameter values over a half-open interval `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSamples {
    start: f64,
    stop: f64,
    step: f64,
    values: Vec<f64>,
}

impl ParameterSamples {
    /// Sample `[start, stop)` with a fixed step.
    ///
    /// The count is `ceil((stop - start) / step)` and value `i` is
    /// `start + i * step`. Trailing values that round onto `stop` are
    /// dropped, so the end of the interval is never sampled.
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(PcvError::InvalidStep(step));
        }
        if !(start.is_finite() && stop.is_finite()) {
            return Err(PcvError::Geometry(format!(
                "Sampling interval [{}, {}) is not finite",
                start, stop
            )));
        }

        let span = (stop - start) / step;
        let count = if span > 0.0 { span.ceil() as usize } else { 0 };
        let values = (0..count)
            .map(|i| start + i as f64 * step)
            .take_while(|&u| u < stop)
            .collect();

        Ok(Self {
            start,
            stop,
            step,
            values,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Sample index for a highlight parameter `t`: `round((t / step) * scale)`.
///
/// `scale` is `1` for Bézier curves and the last knot for B-splines, so `t`
/// is a fraction of the curve's domain. Returns `None` when the index is not
/// a valid sample.
pub fn highlight_index(t: f64, step: f64, scale: f64, sample_count: usize) -> Option<usize> {
    let raw = ((t / step) * scale).round();
    if !raw.is_finite() || raw < 0.0 {
        return None;
    }
    let index = raw as usize;
    (index < sample_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_hundredths() {
        let samples = ParameterSamples::range(0.0, 1.0, 0.01).unwrap();
        assert_eq!(samples.len(), 100);
        assert_eq!(samples.get(0), Some(0.0));
        assert_eq!(samples.get(50), Some(0.5));
        assert!(samples.values().iter().all(|&u| u < 1.0));
    }

    #[test]
    fn test_end_of_interval_never_sampled() {
        // 9 / 0.009 rounds up to 1001, whose last value lands on 9.0
        let samples = ParameterSamples::range(0.0, 9.0, 0.009).unwrap();
        assert_eq!(samples.len(), 1000);
        assert!(samples.values().iter().all(|&u| u < 9.0));
    }

    #[test]
    fn test_empty_and_reversed_interval() {
        assert!(ParameterSamples::range(1.0, 1.0, 0.1).unwrap().is_empty());
        assert!(ParameterSamples::range(2.0, 1.0, 0.1).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_step() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ParameterSamples::range(0.0, 1.0, step),
                Err(PcvError::InvalidStep(_))
            ));
        }
        assert!(ParameterSamples::range(0.0, f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn test_config_default_and_validate() {
        let config = SamplingConfig::default();
        assert_eq!(config.step, 0.01);
        config.validate().unwrap();
        assert!(SamplingConfig::with_step(0.0).validate().is_err());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: SamplingConfig = serde_json::from_str(r#"{"step": 0.05}"#).unwrap();
        assert_eq!(config.step, 0.05);
        assert_eq!(config.tolerance, Tolerance::default());
    }

    #[test]
    fn test_highlight_index() {
        assert_eq!(highlight_index(0.5, 0.01, 1.0, 100), Some(50));
        assert_eq!(highlight_index(0.5, 0.01, 5.0, 500), Some(250));
        assert_eq!(highlight_index(1.0, 0.01, 1.0, 100), None);
        assert_eq!(highlight_index(-0.1, 0.01, 1.0, 100), None);
        assert_eq!(highlight_index(f64::NAN, 0.01, 1.0, 100), None);
    }
}
