//! Percent-of-normal driver.

use notus_calendar::{CalibrationPeriod, MONTHS_PER_YEAR};
use notus_scale::sum_to_scale;

use crate::error::IndexError;

/// Computes percent-of-normal values at the given months scale.
///
/// The "normal" for each calendar month is the mean of that month's scaled
/// (trailing-sum) values over the calibration period, ignoring missing
/// entries. Each scaled value in the full series is then divided by its
/// calendar month's normal. The result is a ratio (1.0 = normal), not a
/// standardized index, so it is not clipped.
///
/// Positions where the normal is zero, negative, or undefined come back as
/// NaN, as do the first `months_scale - 1` positions of the series.
///
/// # Errors
///
/// The calibration window is validated against `data_start_year` and the
/// series length before any computation: a window starting before the data
/// or spanning more months than the data is rejected.
pub fn percentage_of_normal(
    monthly_values: &[f64],
    months_scale: usize,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> Result<Vec<f64>, IndexError> {
    crate::validate_series_and_scale(monthly_values, months_scale)?;
    let range = calibration.month_range(data_start_year, monthly_values.len())?;

    let sums = sum_to_scale(monthly_values, months_scale);

    // Calendar-month normals over the calibration slice. The slice starts on
    // a January, so offset within it is calendar month.
    let calibration_sums = &sums[range];
    let mut normals = [f64::NAN; MONTHS_PER_YEAR];
    for (m, normal) in normals.iter_mut().enumerate() {
        let group: Vec<f64> = calibration_sums
            .iter()
            .copied()
            .skip(m)
            .step_by(MONTHS_PER_YEAR)
            .collect();
        *normal = notus_stats::nanmean(&group);
    }

    Ok(sums
        .iter()
        .enumerate()
        .map(|(i, &sum)| {
            let normal = normals[i % MONTHS_PER_YEAR];
            // NaN normals fail the comparison and stay missing.
            if normal > 0.0 {
                sum / normal
            } else {
                f64::NAN
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_rejected() {
        let calibration = CalibrationPeriod::new(2000, 2000).unwrap();
        assert!(matches!(
            percentage_of_normal(&[], 3, 2000, &calibration),
            Err(IndexError::EmptyData)
        ));
    }

    #[test]
    fn calibration_before_data_rejected() {
        let calibration = CalibrationPeriod::new(1999, 2000).unwrap();
        let values = vec![1.0; 24];
        assert!(matches!(
            percentage_of_normal(&values, 1, 2000, &calibration),
            Err(IndexError::Calendar(_))
        ));
    }

    #[test]
    fn calibration_span_exceeding_data_rejected() {
        let calibration = CalibrationPeriod::new(2000, 2004).unwrap();
        let values = vec![1.0; 24];
        assert!(matches!(
            percentage_of_normal(&values, 1, 2000, &calibration),
            Err(IndexError::Calendar(_))
        ));
    }

    #[test]
    fn uniform_series_is_all_normal() {
        let values = vec![5.0; 48];
        let calibration = CalibrationPeriod::new(2000, 2003).unwrap();
        let out = percentage_of_normal(&values, 1, 2000, &calibration).unwrap();
        for &v in &out {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_normal_yields_missing() {
        // One calendar month entirely zero makes its normal zero.
        let mut values = vec![5.0; 48];
        for y in 0..4 {
            values[y * 12 + 6] = 0.0;
        }
        let calibration = CalibrationPeriod::new(2000, 2003).unwrap();
        let out = percentage_of_normal(&values, 1, 2000, &calibration).unwrap();
        for y in 0..4 {
            assert!(out[y * 12 + 6].is_nan());
        }
        assert_relative_eq!(out[0], 1.0, epsilon = 1e-12);
    }
}
