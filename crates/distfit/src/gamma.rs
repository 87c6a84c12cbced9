//! Gamma distribution parameters, the Thom estimator, and the statrs bridge.

use crate::error::DistFitError;
use statrs::distribution::{ContinuousCDF, Gamma};

/// Minimum number of strictly positive values required for a gamma fit.
/// Below this the calendar month is treated as degenerate.
pub const MIN_GAMMA_SAMPLE: usize = 3;

/// Validated parameters for a Gamma distribution (shape/scale convention).
///
/// Both `shape` (alpha) and `scale` (beta) must be finite and positive.
/// Use [`GammaParams::new`] for direct construction or
/// [`GammaParams::from_sample`] to estimate from positive data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
}

impl GammaParams {
    /// Create new gamma parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Estimate gamma parameters from strictly positive sample values using
    /// Thom's approximation to the maximum-likelihood estimator:
    ///
    /// - `A = ln(mean) - mean(ln x)`
    /// - `shape = (1 + sqrt(1 + 4A/3)) / (4A)`
    /// - `scale = mean / shape`
    ///
    /// Returns `None` for fewer than [`MIN_GAMMA_SAMPLE`] values, for a
    /// sample with no log-spread (`A <= 0`, i.e. all values equal), or when
    /// the resulting parameters are invalid.
    pub fn from_sample(positives: &[f64]) -> Option<Self> {
        if positives.len() < MIN_GAMMA_SAMPLE {
            return None;
        }
        let n = positives.len() as f64;
        let mean = positives.iter().sum::<f64>() / n;
        if !mean.is_finite() || mean <= 0.0 {
            return None;
        }
        let log_mean = positives.iter().map(|&x| x.ln()).sum::<f64>() / n;

        // Zero when all values coincide; numerically tiny negatives can
        // appear for near-constant samples, both are degenerate.
        let a = mean.ln() - log_mean;
        if !a.is_finite() || a <= 0.0 {
            return None;
        }

        let shape = (1.0 + (1.0 + 4.0 * a / 3.0).sqrt()) / (4.0 * a);
        let scale = mean / shape;
        Self::new(shape, scale)
    }

    /// Shape parameter (alpha).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (beta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Distribution mean (shape * scale).
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Rate parameter (1 / scale), used by statrs which parameterises Gamma
    /// by (shape, rate) rather than (shape, scale).
    pub(crate) fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

/// A zero-inflated gamma distribution: a discrete probability mass at zero
/// mixed with a continuous gamma on the positive values.
///
/// Precipitation sums can be exactly zero, so the cumulative probability of
/// an observed value `v` is `p0 + (1 - p0) * GammaCDF(v)` for `v > 0` and
/// `p0` for `v <= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroInflatedGamma {
    prob_zero: f64,
    gamma: GammaParams,
}

impl ZeroInflatedGamma {
    /// Creates a zero-inflated gamma. `prob_zero` is clamped to `[0, 1]`.
    pub fn new(prob_zero: f64, gamma: GammaParams) -> Self {
        Self {
            prob_zero: prob_zero.clamp(0.0, 1.0),
            gamma,
        }
    }

    /// Probability mass at zero.
    pub fn prob_zero(&self) -> f64 {
        self.prob_zero
    }

    /// Parameters of the continuous component.
    pub fn gamma(&self) -> GammaParams {
        self.gamma
    }

    /// Mixed cumulative probability of `v` through a pre-built statrs
    /// distribution for the continuous component.
    pub(crate) fn cdf(&self, v: f64, dist: &Gamma) -> f64 {
        if v > 0.0 {
            self.prob_zero + (1.0 - self.prob_zero) * dist.cdf(v)
        } else {
            self.prob_zero
        }
    }
}

/// Build a [`statrs::distribution::Gamma`] from validated [`GammaParams`].
///
/// Note: `statrs::distribution::Gamma::new` takes `(shape, rate)` where
/// `rate = 1 / scale`.
pub(crate) fn gamma_dist(params: &GammaParams) -> Result<Gamma, DistFitError> {
    Gamma::new(params.shape(), params.rate()).map_err(|e| DistFitError::GammaConstruction {
        shape: params.shape(),
        scale: params.scale(),
        message: e.to_string(),
    })
}
