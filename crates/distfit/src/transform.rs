//! Fitted-distribution transforms to standard-normal index values.

use notus_calendar::{CalibrationPeriod, MONTHS_PER_YEAR};
use statrs::distribution::{ContinuousCDF, Gamma, Normal};
use tracing::warn;

use crate::error::DistFitError;
use crate::fit::{fit_gamma_monthly, fit_pearson_monthly};
use crate::gamma::{gamma_dist, GammaParams, ZeroInflatedGamma};
use crate::pearson::PearsonParams;

/// Epsilon constant used for clamping CDF probabilities away from 0 and 1.
/// Keeps the normal quantile finite at the distribution boundaries.
pub(crate) const EPS: f64 = 1e-12;

/// Transform a scaled monthly series to standard-normal values through
/// per-calendar-month zero-inflated gamma fits over the full series.
///
/// Each non-NaN value maps to its mixed cumulative probability under its
/// month's fitted distribution, clamped to `[EPS, 1 - EPS]`, then to the
/// standard-normal quantile of that probability. NaN inputs and values in
/// months with a degenerate fit come back as NaN. The output is unclipped;
/// index drivers clip to the valid index range.
pub fn transform_fitted_gamma(values: &[f64]) -> Vec<f64> {
    let fit = fit_gamma_monthly(values);

    // One statrs distribution per fitted month, built once up front.
    let prepared: [Option<(ZeroInflatedGamma, Gamma)>; 12] = std::array::from_fn(|m| {
        let zig = fit.params()[m]?;
        match gamma_dist(&zig.gamma()) {
            Ok(dist) => Some((zig, dist)),
            Err(e) => {
                warn!(month = m + 1, error = %e, "dropping unconstructible gamma month");
                None
            }
        }
    });

    let normal = Normal::standard();
    let mut out = vec![f64::NAN; values.len()];
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if let Some((zig, dist)) = &prepared[i % MONTHS_PER_YEAR] {
            let p = zig.cdf(v, dist).clamp(EPS, 1.0 - EPS);
            out[i] = normal.inverse_cdf(p);
        }
    }
    out
}

/// A calendar month prepared for the Pearson transform: either the
/// near-zero-skew normal fallback or the gamma-based general branch.
enum PreparedMonth {
    Normal(PearsonParams),
    Skewed(PearsonParams, Gamma),
}

/// Transform a scaled monthly series to standard-normal values through
/// per-calendar-month Pearson Type III fits over the calibration period.
///
/// Parameters are estimated from the calibration window only, then applied
/// to every value of the full series, so out-of-period values are measured
/// against the calibration-period "normal". Months whose fitted skew is
/// below the near-normal threshold transform as `z = (v - mean) / sd`
/// directly. NaN propagation and degenerate-month behavior match
/// [`transform_fitted_gamma`].
///
/// # Errors
///
/// Returns a calendar error before any fitting if the calibration window
/// starts before `data_start_year` or spans more months than the series.
pub fn transform_fitted_pearson(
    values: &[f64],
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> Result<Vec<f64>, DistFitError> {
    let range = calibration.month_range(data_start_year, values.len())?;
    let fit = fit_pearson_monthly(values, &range);

    let prepared: [Option<PreparedMonth>; 12] = std::array::from_fn(|m| {
        let pp = fit.params()[m]?;
        if pp.is_near_normal() {
            return Some(PreparedMonth::Normal(pp));
        }
        let unit = GammaParams::new(pp.shape(), 1.0)?;
        match gamma_dist(&unit) {
            Ok(dist) => Some(PreparedMonth::Skewed(pp, dist)),
            Err(e) => {
                warn!(month = m + 1, error = %e, "dropping unconstructible Pearson month");
                None
            }
        }
    });

    let normal = Normal::standard();
    let mut out = vec![f64::NAN; values.len()];
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match &prepared[i % MONTHS_PER_YEAR] {
            Some(PreparedMonth::Normal(pp)) => {
                out[i] = (v - pp.mean()) / pp.sd();
            }
            Some(PreparedMonth::Skewed(pp, dist)) => {
                let p = pp.cdf(v, dist).clamp(EPS, 1.0 - EPS);
                out[i] = normal.inverse_cdf(p);
            }
            None => {}
        }
    }
    Ok(out)
}
