//! Palmer drought index family: collaborator traits and thin delegations.
//!
//! The Palmer water-balance model (and its self-calibrated and legacy
//! variants) is an external collaborator with substantial internal state; it
//! is consumed through traits here, not reimplemented. The drivers below only
//! fix the argument contracts. Precipitation, PET, and available water
//! capacity are in inches throughout the Palmer family.

use notus_calendar::CalibrationPeriod;

/// Monthly output series of the Palmer water-balance model.
#[derive(Debug, Clone, PartialEq)]
pub struct PalmerOutput {
    /// Palmer Drought Severity Index.
    pub pdsi: Vec<f64>,
    /// Palmer Hydrological Drought Index.
    pub phdi: Vec<f64>,
    /// Palmer moisture anomaly (Z) index.
    pub z_index: Vec<f64>,
}

/// Monthly output series of the self-calibrated Palmer model.
#[derive(Debug, Clone, PartialEq)]
pub struct ScPalmerOutput {
    /// Self-calibrated Palmer Drought Severity Index.
    pub scpdsi: Vec<f64>,
    /// Palmer Drought Severity Index.
    pub pdsi: Vec<f64>,
    /// Palmer Hydrological Drought Index.
    pub phdi: Vec<f64>,
    /// Palmer Modified Drought Index.
    pub pmdi: Vec<f64>,
    /// Palmer moisture anomaly (Z) index.
    pub z_index: Vec<f64>,
}

/// External Palmer water-balance model.
pub trait PalmerModel {
    /// Computes PDSI, PHDI, and Z-Index from precipitation and PET (inches)
    /// and the available water capacity soil constant.
    fn pdsi(
        &self,
        precip_inches: &[f64],
        pet_inches: &[f64],
        awc: f64,
        data_start_year: i32,
        calibration: &CalibrationPeriod,
    ) -> PalmerOutput;

    /// Computes the self-calibrated index family (SCPDSI, PDSI, PHDI, PMDI,
    /// Z-Index) from the same inputs as [`PalmerModel::pdsi`].
    fn scpdsi(
        &self,
        precip_inches: &[f64],
        pet_inches: &[f64],
        awc: f64,
        data_start_year: i32,
        calibration: &CalibrationPeriod,
    ) -> ScPalmerOutput;
}

/// External legacy-reference Palmer implementation, intended to numerically
/// match the historical reference code from climatology inputs.
pub trait LegacyPalmerModel {
    /// Computes the Palmer indices from precipitation and temperature
    /// climatology, with the `b` and `h` climate coefficients of the
    /// reference implementation.
    #[allow(clippy::too_many_arguments)]
    fn pdsi_from_climatology(
        &self,
        precip_inches: &[f64],
        temps: &[f64],
        awc: f64,
        latitude_degrees: f64,
        b: f64,
        h: f64,
        data_start_year: i32,
        calibration: &CalibrationPeriod,
    ) -> PalmerOutput;
}

/// Computes PDSI, PHDI, and Z-Index through the external Palmer model.
pub fn pdsi<M: PalmerModel>(
    model: &M,
    precip_inches: &[f64],
    pet_inches: &[f64],
    awc: f64,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> PalmerOutput {
    model.pdsi(precip_inches, pet_inches, awc, data_start_year, calibration)
}

/// Computes the self-calibrated Palmer index family through the external
/// Palmer model.
pub fn scpdsi<M: PalmerModel>(
    model: &M,
    precip_inches: &[f64],
    pet_inches: &[f64],
    awc: f64,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> ScPalmerOutput {
    model.scpdsi(precip_inches, pet_inches, awc, data_start_year, calibration)
}

/// Computes the Palmer indices through the legacy reference implementation.
#[allow(clippy::too_many_arguments)]
pub fn pdinew_pdsi<M: LegacyPalmerModel>(
    model: &M,
    precip_inches: &[f64],
    temps: &[f64],
    awc: f64,
    latitude_degrees: f64,
    b: f64,
    h: f64,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
) -> PalmerOutput {
    model.pdsi_from_climatology(
        precip_inches,
        temps,
        awc,
        latitude_degrees,
        b,
        h,
        data_start_year,
        calibration,
    )
}
