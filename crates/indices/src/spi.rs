//! Standardized Precipitation Index drivers.

use notus_calendar::CalibrationPeriod;
use notus_distfit::{transform_fitted_gamma, transform_fitted_pearson};
use notus_scale::sum_to_scale;

use crate::error::IndexError;

/// Computes monthly SPI using a fit to the gamma distribution.
///
/// `precips` holds monthly precipitation totals in any consistent unit, the
/// first value corresponding to January of the initial year. The values are
/// summed over `months_scale` trailing months, fitted per calendar month to
/// a zero-inflated gamma over the whole series, transformed to standard-
/// normal quantiles, and clipped to the valid index range. The result has
/// the same length as the input; the first `months_scale - 1` entries and
/// any month with a degenerate fit are NaN.
pub fn spi_gamma(precips: &[f64], months_scale: usize) -> Result<Vec<f64>, IndexError> {
    crate::validate_series_and_scale(precips, months_scale)?;

    let scaled = sum_to_scale(precips, months_scale);
    let mut spi = transform_fitted_gamma(&scaled);
    crate::clip_to_valid_range(&mut spi);
    Ok(spi)
}

/// Computes monthly SPI using a fit to the Pearson Type III distribution.
///
/// As [`spi_gamma`], except distribution parameters are estimated from the
/// calibration period only (the conventional reference period is
/// 1981-2010) and then applied to the full series. The calibration window
/// is validated against `data_start_year` and the series length before any
/// fitting happens.
pub fn spi_pearson(
    precips: &[f64],
    months_scale: usize,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> Result<Vec<f64>, IndexError> {
    crate::validate_series_and_scale(precips, months_scale)?;

    let scaled = sum_to_scale(precips, months_scale);
    let mut spi = transform_fitted_pearson(&scaled, data_start_year, calibration)?;
    crate::clip_to_valid_range(&mut spi);
    Ok(spi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rejected() {
        assert!(matches!(spi_gamma(&[], 3), Err(IndexError::EmptyData)));
    }

    #[test]
    fn zero_scale_rejected() {
        assert!(matches!(
            spi_gamma(&[1.0, 2.0], 0),
            Err(IndexError::InvalidScale)
        ));
    }

    #[test]
    fn pearson_invalid_calibration_rejected() {
        let precips = vec![10.0; 120];
        let calibration = CalibrationPeriod::new(1970, 1979).unwrap();
        let result = spi_pearson(&precips, 3, 1980, &calibration);
        assert!(matches!(result, Err(IndexError::DistFit(_))));
    }
}
