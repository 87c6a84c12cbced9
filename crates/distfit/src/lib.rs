//! Distribution fitting and normalizing transforms for drought indices.
//!
//! This crate turns a scaled (moving-sum) monthly series into standardized
//! index values by fitting a parametric distribution per calendar month and
//! mapping each observation through `CDF -> standard-normal quantile`.
//!
//! # Pipeline
//!
//! 1. **Group** the series by calendar month (12 independent groups)
//! 2. **Fit** a distribution per group: zero-inflated gamma over the full
//!    series, or Pearson Type III over the calibration period only
//! 3. **Map** each value: CDF -> clamp -> inverse normal CDF
//!
//! NaN values pass through unchanged, and a calendar month whose fit is
//! degenerate (too few values, no spread) yields NaN for its whole group
//! rather than failing the series.
//!
//! # Glossary
//!
//! - **Thom estimator**: closed-form approximation to the gamma maximum-
//!   likelihood fit from the sample mean and mean log
//! - **Zero-inflated**: discrete probability mass at zero mixed with a
//!   continuous distribution on the positives
//! - **Pearson Type III**: gamma distribution generalized with a location
//!   parameter, fitted here by method of moments (mean, sd, skew)
//!
//! # Quick Start
//!
//! ```
//! use notus_distfit::transform_fitted_gamma;
//!
//! // Four years of a scaled monthly series (48 values).
//! let scaled: Vec<f64> = (0..48).map(|i| 40.0 + (i % 12) as f64 * 3.5).collect();
//! let index = transform_fitted_gamma(&scaled);
//! assert_eq!(index.len(), scaled.len());
//! ```

mod error;
pub(crate) mod fit;
pub(crate) mod gamma;
pub(crate) mod pearson;
pub(crate) mod transform;

pub use error::DistFitError;
pub use fit::{fit_gamma_monthly, fit_pearson_monthly, MonthlyGammaFit, MonthlyPearsonFit};
pub use gamma::{GammaParams, ZeroInflatedGamma, MIN_GAMMA_SAMPLE};
pub use pearson::{PearsonParams, MIN_PEARSON_SAMPLE, NORMAL_SKEW_THRESHOLD};
pub use transform::{transform_fitted_gamma, transform_fitted_pearson};
