//! Drought index drivers over monthly time series.
//!
//! Each driver takes a flat monthly series (index 0 = January of the data
//! start year, NaN = missing) and returns a same-length series of index
//! values. The fitted indices (SPI, SPEI) run the shared pipeline
//!
//! ```text
//! raw series -> moving sum -> per-month distribution fit -> normal quantile -> clip
//! ```
//!
//! and clip to [`FITTED_INDEX_VALID_MIN`, `FITTED_INDEX_VALID_MAX`]. Percent
//! of normal is a plain ratio against calibration-period means and is not
//! clipped. PET estimation and the Palmer model family are external
//! collaborators consumed through the [`ThornthwaiteModel`], [`PalmerModel`]
//! and [`LegacyPalmerModel`] traits.
//!
//! Every driver is pure and synchronous; concurrent calls over disjoint
//! series need no coordination.

mod error;
mod palmer;
mod percent_normal;
mod pet;
mod spei;
mod spi;

pub use error::IndexError;
pub use palmer::{
    pdinew_pdsi, pdsi, scpdsi, LegacyPalmerModel, PalmerModel, PalmerOutput, ScPalmerOutput,
};
pub use percent_normal::percentage_of_normal;
pub use pet::{pet, ThornthwaiteModel};
pub use spei::{spei_gamma, spei_pearson, PetSource};
pub use spi::{spi_gamma, spi_pearson};

// Calibration types come from notus-calendar; re-exported so callers of the
// drivers need only this crate.
pub use notus_calendar::{
    CalibrationPeriod, DEFAULT_CALIBRATION_END_YEAR, DEFAULT_CALIBRATION_START_YEAR,
};

/// Lower bound of the valid range for distribution-fitted index values.
pub const FITTED_INDEX_VALID_MIN: f64 = -3.09;

/// Upper bound of the valid range for distribution-fitted index values.
pub const FITTED_INDEX_VALID_MAX: f64 = 3.09;

/// Validates the common preconditions of the scaling drivers.
pub(crate) fn validate_series_and_scale(
    values: &[f64],
    months_scale: usize,
) -> Result<(), IndexError> {
    if values.is_empty() {
        return Err(IndexError::EmptyData);
    }
    if months_scale == 0 {
        return Err(IndexError::InvalidScale);
    }
    Ok(())
}

/// Clips fitted index values into the valid range in place. NaN (missing)
/// entries stay NaN.
pub(crate) fn clip_to_valid_range(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = v.clamp(FITTED_INDEX_VALID_MIN, FITTED_INDEX_VALID_MAX);
    }
}
