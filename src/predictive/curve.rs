use crate::error::{PredictiveError, Result};
use crate::predictive::engine::check_interior;
use crate::predictive::{Curve, CurvePoint, TestCharacteristics};

pub const DEFAULT_CURVE_SAMPLES: usize = 1000;
pub const CURVE_PREVALENCE_MIN: f64 = 0.1;
pub const CURVE_PREVALENCE_MAX: f64 = 99.9;
pub const MAX_CURVE_SAMPLES: usize = 1_000_000;

/// Prevalence grid for a curve. Both bounds stay strictly inside (0, 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    pub samples: usize,
    pub prevalence_min: f64,
    pub prevalence_max: f64,
}

impl Default for CurveSpec {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CURVE_SAMPLES,
            prevalence_min: CURVE_PREVALENCE_MIN,
            prevalence_max: CURVE_PREVALENCE_MAX,
        }
    }
}

impl CurveSpec {
    pub fn with_samples(samples: usize) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(PredictiveError::invalid("curve needs at least one sample"));
        }
        if self.samples > MAX_CURVE_SAMPLES {
            return Err(PredictiveError::invalid(format!(
                "curve supports at most {} samples, got {}",
                MAX_CURVE_SAMPLES, self.samples
            )));
        }
        check_interior("prevalence_min", self.prevalence_min)?;
        check_interior("prevalence_max", self.prevalence_max)?;
        if self.samples > 1 && self.prevalence_min >= self.prevalence_max {
            return Err(PredictiveError::invalid(format!(
                "prevalence_min ({}) must be below prevalence_max ({})",
                self.prevalence_min, self.prevalence_max
            )));
        }
        if self.samples > 1 {
            // Each grid value carries up to one ulp of rounding error.
            let step = (self.prevalence_max - self.prevalence_min) / (self.samples - 1) as f64;
            let ulp = f64::from_bits(self.prevalence_max.to_bits() + 1) - self.prevalence_max;
            if step <= 4.0 * ulp {
                return Err(PredictiveError::invalid(format!(
                    "{} samples are too dense for [{}, {}]",
                    self.samples, self.prevalence_min, self.prevalence_max
                )));
            }
        }
        Ok(())
    }

    pub fn prevalences(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let grid = linspace(self.prevalence_min, self.prevalence_max, self.samples);
        if grid.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PredictiveError::invalid(format!(
                "{} samples are too dense for [{}, {}]",
                self.samples, self.prevalence_min, self.prevalence_max
            )));
        }
        Ok(grid)
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Curve over the reference range [0.1, 99.9].
pub fn sample_curve(characteristics: &TestCharacteristics, samples: usize) -> Result<Curve> {
    sample_curve_over(characteristics, &CurveSpec::with_samples(samples))
}

pub fn sample_curve_over(
    characteristics: &TestCharacteristics,
    spec: &CurveSpec,
) -> Result<Curve> {
    let grid = spec.prevalences()?;
    let mut points = Vec::with_capacity(grid.len());
    for prevalence in grid {
        let r = characteristics.evaluate(prevalence)?;
        points.push(CurvePoint {
            prevalence,
            ppv: r.ppv,
            npv: r.npv,
        });
    }
    Ok(Curve { points })
}
