//! Pearson Type III parameters estimated by the method of moments.

use statrs::distribution::{ContinuousCDF, Gamma};

/// Minimum number of calibration values required for a Pearson III fit.
/// The third moment needs more support than the gamma fit does.
pub const MIN_PEARSON_SAMPLE: usize = 4;

/// Absolute skew below which a month is transformed as a plain normal
/// distribution. As skew approaches zero the moment-derived shape `4/skew^2`
/// blows up, so the limit distribution (normal) is used directly.
pub const NORMAL_SKEW_THRESHOLD: f64 = 1e-3;

/// Pearson Type III parameters, stored as the fitted sample moments.
///
/// The conventional three parameters are derived from the moments:
/// shape `alpha = 4/skew^2`, scale `beta = sd * skew / 2` (the sign of the
/// skew is carried by beta), location `xi = mean - alpha * beta`. Storing the
/// moment triple keeps the near-zero-skew normal fallback exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonParams {
    mean: f64,
    sd: f64,
    skew: f64,
}

impl PearsonParams {
    /// Estimate parameters from a calibration sample.
    ///
    /// Returns `None` for fewer than [`MIN_PEARSON_SAMPLE`] values or when
    /// the sample standard deviation is zero or non-finite.
    pub fn from_sample(values: &[f64]) -> Option<Self> {
        if values.len() < MIN_PEARSON_SAMPLE {
            return None;
        }
        let mean = notus_stats::mean(values);
        let sd = notus_stats::sd(values);
        let skew = notus_stats::skewness(values);
        if !mean.is_finite() || !sd.is_finite() || sd <= 0.0 || !skew.is_finite() {
            return None;
        }
        Some(Self { mean, sd, skew })
    }

    /// Sample mean of the calibration values.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the calibration values.
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Sample skewness of the calibration values.
    pub fn skew(&self) -> f64 {
        self.skew
    }

    /// Whether the skew is too small for a stable gamma-based transform.
    /// Such months are transformed as `z = (v - mean) / sd` directly.
    pub fn is_near_normal(&self) -> bool {
        self.skew.abs() < NORMAL_SKEW_THRESHOLD
    }

    /// Shape parameter `alpha = 4 / skew^2`.
    pub fn shape(&self) -> f64 {
        4.0 / (self.skew * self.skew)
    }

    /// Scale parameter `beta = sd * skew / 2`; negative for negative skew.
    pub fn scale(&self) -> f64 {
        self.sd * self.skew / 2.0
    }

    /// Location parameter `xi = mean - alpha * beta`.
    pub fn location(&self) -> f64 {
        self.mean - self.shape() * self.scale()
    }

    /// Cumulative probability of `v` through a pre-built unit-scale gamma
    /// distribution with shape [`PearsonParams::shape`].
    ///
    /// With `y = (v - xi) / beta`: for positive beta the distribution is
    /// bounded below at xi and `P = GammaCDF(y)`; for negative beta it is
    /// bounded above at xi and the tail mirrors, `P = 1 - GammaCDF(y)`.
    /// Values outside the support land on 0 or 1 and are clamped by the
    /// caller before the normal quantile.
    pub(crate) fn cdf(&self, v: f64, dist: &Gamma) -> f64 {
        let y = (v - self.location()) / self.scale();
        let g = if y > 0.0 { dist.cdf(y) } else { 0.0 };
        if self.scale() >= 0.0 {
            g
        } else {
            1.0 - g
        }
    }
}
