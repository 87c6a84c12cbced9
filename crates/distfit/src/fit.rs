//! Per-calendar-month distribution fitting.

use std::ops::Range;

use notus_calendar::MONTHS_PER_YEAR;
use tracing::debug;

use crate::gamma::{GammaParams, ZeroInflatedGamma};
use crate::pearson::PearsonParams;

/// Result of fitting zero-inflated gamma distributions to a monthly series.
///
/// Contains one optional [`ZeroInflatedGamma`] per calendar month (12 total)
/// along with the 1-indexed months that could not be fitted. A skipped month
/// produces missing markers for every value in that month's group; the other
/// months remain usable.
#[derive(Debug, Clone)]
pub struct MonthlyGammaFit {
    params: [Option<ZeroInflatedGamma>; 12],
    skipped_months: Vec<u8>,
}

impl MonthlyGammaFit {
    pub(crate) fn new(params: [Option<ZeroInflatedGamma>; 12], skipped_months: Vec<u8>) -> Self {
        Self {
            params,
            skipped_months,
        }
    }

    /// Returns the fitted parameters for a 1-indexed calendar month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn params_for_month(&self, month: u8) -> Option<ZeroInflatedGamma> {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        self.params[(month - 1) as usize]
    }

    /// Returns a reference to the full 12-element parameter array (0-indexed).
    pub fn params(&self) -> &[Option<ZeroInflatedGamma>; 12] {
        &self.params
    }

    /// Returns the 1-indexed months that were skipped during fitting.
    pub fn skipped_months(&self) -> &[u8] {
        &self.skipped_months
    }

    /// Returns `true` if all 12 months are `None` (no successful fits).
    pub fn is_empty(&self) -> bool {
        self.params.iter().all(|p| p.is_none())
    }
}

/// Result of fitting Pearson Type III distributions to the calibration
/// subset of a monthly series. Same shape as [`MonthlyGammaFit`].
#[derive(Debug, Clone)]
pub struct MonthlyPearsonFit {
    params: [Option<PearsonParams>; 12],
    skipped_months: Vec<u8>,
}

impl MonthlyPearsonFit {
    pub(crate) fn new(params: [Option<PearsonParams>; 12], skipped_months: Vec<u8>) -> Self {
        Self {
            params,
            skipped_months,
        }
    }

    /// Returns the fitted parameters for a 1-indexed calendar month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn params_for_month(&self, month: u8) -> Option<PearsonParams> {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        self.params[(month - 1) as usize]
    }

    /// Returns a reference to the full 12-element parameter array (0-indexed).
    pub fn params(&self) -> &[Option<PearsonParams>; 12] {
        &self.params
    }

    /// Returns the 1-indexed months that were skipped during fitting.
    pub fn skipped_months(&self) -> &[u8] {
        &self.skipped_months
    }

    /// Returns `true` if all 12 months are `None` (no successful fits).
    pub fn is_empty(&self) -> bool {
        self.params.iter().all(|p| p.is_none())
    }
}

/// Non-NaN values of one calendar month's group. `month0` is 0-indexed and
/// `range` restricts to a sub-slice of the series; `range.start` must lie on
/// a January, which [`notus_calendar::CalibrationPeriod::month_range`]
/// guarantees.
fn month_group(values: &[f64], range: &Range<usize>, month0: usize) -> Vec<f64> {
    values[range.clone()]
        .iter()
        .copied()
        .skip(month0)
        .step_by(MONTHS_PER_YEAR)
        .filter(|v| !v.is_nan())
        .collect()
}

/// Fit a zero-inflated gamma per calendar month over the full series.
///
/// For each month, non-NaN values split into a zero mass (values `<= 0`,
/// which for precipitation sums means exactly zero) and a positive subset
/// the continuous gamma is fitted on. Months with too few positive values or
/// no log-spread are skipped.
pub fn fit_gamma_monthly(values: &[f64]) -> MonthlyGammaFit {
    let mut params: [Option<ZeroInflatedGamma>; 12] = [None; 12];
    let mut skipped_months = Vec::new();

    for m in 0..MONTHS_PER_YEAR {
        let group = month_group(values, &(0..values.len()), m);
        let month = m as u8 + 1;
        if group.is_empty() {
            debug!(month, "no values for gamma fit");
            skipped_months.push(month);
            continue;
        }

        let positives: Vec<f64> = group.iter().copied().filter(|&v| v > 0.0).collect();
        let prob_zero = (group.len() - positives.len()) as f64 / group.len() as f64;

        match GammaParams::from_sample(&positives) {
            Some(gp) => {
                params[m] = Some(ZeroInflatedGamma::new(prob_zero, gp));
            }
            None => {
                debug!(
                    month,
                    n_positive = positives.len(),
                    "degenerate positive sample for gamma fit"
                );
                skipped_months.push(month);
            }
        }
    }

    MonthlyGammaFit::new(params, skipped_months)
}

/// Fit Pearson Type III parameters per calendar month, restricted to the
/// calibration index range. Months whose calibration sample is too small or
/// has no spread are skipped.
pub fn fit_pearson_monthly(values: &[f64], calibration: &Range<usize>) -> MonthlyPearsonFit {
    let mut params: [Option<PearsonParams>; 12] = [None; 12];
    let mut skipped_months = Vec::new();

    for m in 0..MONTHS_PER_YEAR {
        let group = month_group(values, calibration, m);
        let month = m as u8 + 1;
        match PearsonParams::from_sample(&group) {
            Some(pp) => {
                params[m] = Some(pp);
            }
            None => {
                debug!(
                    month,
                    n = group.len(),
                    "degenerate calibration sample for Pearson fit"
                );
                skipped_months.push(month);
            }
        }
    }

    MonthlyPearsonFit::new(params, skipped_months)
}
