//! Moment statistics for monthly climate series.
//!
//! Degenerate inputs (empty, or too few elements for the moment in question)
//! return 0.0 rather than NaN, matching R's `mean`/`var`/`sd` conventions.
//! The one exception is [`nanmean`], which returns NaN when no finite values
//! remain — callers use that as the missing-value marker.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Skewness as the third standardized moment `m3 / m2^(3/2)` (the
/// moment-ratio definition, matching `scipy.stats.skew` with `bias=True`).
///
/// Returns 0.0 if fewer than 3 elements or if the second central moment is
/// zero (constant data).
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 3 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    for &x in data {
        let d = x - mean;
        m2 += d * d;
        m3 += d * d * d;
    }
    m2 /= nf;
    m3 /= nf;

    if m2 <= 0.0 {
        return 0.0;
    }
    m3 / m2.powf(1.5)
}

/// Mean of the non-NaN entries. Returns NaN if no finite entries remain,
/// so a fully-missing group stays missing.
pub fn nanmean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in data {
        if !x.is_nan() {
            sum += x;
            count += 1;
        }
    }
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_basic() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // variance = sd^2 = 2.138090^2 ≈ 4.571429
        assert_relative_eq!(variance(&data), 4.571429, epsilon = 1e-4);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_skewness_symmetric() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(skewness(&data), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_right_tail() {
        // scipy.stats.skew([1, 1, 1, 1, 10]) = 1.5
        let data = [1.0, 1.0, 1.0, 1.0, 10.0];
        assert_relative_eq!(skewness(&data), 1.5, epsilon = 1e-10);
    }

    #[test]
    fn test_skewness_left_tail() {
        let data = [-10.0, -1.0, -1.0, -1.0, -1.0];
        assert_relative_eq!(skewness(&data), -1.5, epsilon = 1e-10);
    }

    #[test]
    fn test_skewness_constant() {
        assert_eq!(skewness(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_skewness_too_few() {
        assert_eq!(skewness(&[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_nanmean_mixed() {
        let data = [1.0, f64::NAN, 3.0, f64::NAN, 5.0];
        assert_relative_eq!(nanmean(&data), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nanmean_no_nan() {
        assert_relative_eq!(nanmean(&[2.0, 4.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nanmean_all_nan() {
        assert!(nanmean(&[f64::NAN, f64::NAN]).is_nan());
    }

    #[test]
    fn test_nanmean_empty() {
        assert!(nanmean(&[]).is_nan());
    }
}
