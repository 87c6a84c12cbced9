//! Standardized Precipitation-Evapotranspiration Index drivers.

use notus_calendar::CalibrationPeriod;
use notus_distfit::{transform_fitted_gamma, transform_fitted_pearson};
use notus_scale::sum_to_scale;
use tracing::error;

use crate::error::IndexError;
use crate::pet::{pet, ThornthwaiteModel};

/// Additive offset applied to `P - PET` so the series stays positive and
/// inside the gamma fitting domain.
const WATER_BALANCE_OFFSET_MM: f64 = 1000.0;

/// Where the PET series for SPEI comes from.
///
/// SPEI needs exactly one of two inputs: a ready PET series, or the
/// temperature/latitude/start-year triple the Thornthwaite collaborator
/// derives PET from. Encoding the choice as an enum makes the "both
/// supplied" and "neither supplied" argument mistakes unrepresentable;
/// what remains to check at runtime is length compatibility, the latitude
/// range, and start-year agreement.
#[derive(Debug, Clone, Copy)]
pub enum PetSource<'a> {
    /// Monthly PET values in millimeters, same length as the precipitation.
    Provided(&'a [f64]),

    /// Derive PET from monthly mean temperatures via Thornthwaite.
    Derived {
        /// Monthly mean temperatures in degrees Celsius.
        temps_celsius: &'a [f64],
        /// Latitude in degrees north, strictly inside (-90, 90).
        latitude_degrees: f64,
        /// Year of the first (January) temperature value.
        data_start_year: i32,
    },
}

impl<'a> PetSource<'a> {
    /// Resolves the source into a PET series of `n_months` values,
    /// validating input lengths and (for the derived path) the latitude.
    fn resolve<M: ThornthwaiteModel>(
        &self,
        n_months: usize,
        model: &M,
    ) -> Result<Vec<f64>, IndexError> {
        match *self {
            PetSource::Provided(pet_mm) => {
                if pet_mm.len() != n_months {
                    error!("incompatible precipitation and PET arrays");
                    return Err(IndexError::LengthMismatch {
                        field: "pet",
                        expected: n_months,
                        got: pet_mm.len(),
                    });
                }
                Ok(pet_mm.to_vec())
            }
            PetSource::Derived {
                temps_celsius,
                latitude_degrees,
                data_start_year,
            } => {
                if temps_celsius.len() != n_months {
                    error!("incompatible precipitation and temperature arrays");
                    return Err(IndexError::LengthMismatch {
                        field: "temps",
                        expected: n_months,
                        got: temps_celsius.len(),
                    });
                }
                pet(temps_celsius, latitude_degrees, data_start_year, model)
            }
        }
    }
}

/// `P - PET + offset`, elementwise. NaN in either input propagates.
fn water_balance(precips_mm: &[f64], pet_mm: &[f64]) -> Vec<f64> {
    precips_mm
        .iter()
        .zip(pet_mm)
        .map(|(&p, &e)| p - e + WATER_BALANCE_OFFSET_MM)
        .collect()
}

/// Computes monthly SPEI using a fit to the gamma distribution.
///
/// The PET series (supplied or derived per `pet_source`) is subtracted from
/// the precipitation, the offset water-balance series is summed over
/// `months_scale` trailing months, and the result runs through the same
/// gamma fit/transform/clip pipeline as SPI. Output length equals the
/// precipitation length.
pub fn spei_gamma<M: ThornthwaiteModel>(
    precips_mm: &[f64],
    months_scale: usize,
    pet_source: PetSource<'_>,
    model: &M,
) -> Result<Vec<f64>, IndexError> {
    crate::validate_series_and_scale(precips_mm, months_scale)?;
    let pet_mm = pet_source.resolve(precips_mm.len(), model)?;

    let scaled = sum_to_scale(&water_balance(precips_mm, &pet_mm), months_scale);
    let mut spei = transform_fitted_gamma(&scaled);
    crate::clip_to_valid_range(&mut spei);
    Ok(spei)
}

/// Computes monthly SPEI using a fit to the Pearson Type III distribution.
///
/// As [`spei_gamma`], with distribution parameters estimated over the
/// calibration period only. `data_start_year` anchors both the calibration
/// window and the series; a [`PetSource::Derived`] carrying a different
/// start year is rejected rather than silently misaligning the PET series.
pub fn spei_pearson<M: ThornthwaiteModel>(
    precips_mm: &[f64],
    months_scale: usize,
    data_start_year: i32,
    calibration: &CalibrationPeriod,
    pet_source: PetSource<'_>,
    model: &M,
) -> Result<Vec<f64>, IndexError> {
    crate::validate_series_and_scale(precips_mm, months_scale)?;

    if let PetSource::Derived {
        data_start_year: pet_start_year,
        ..
    } = pet_source
    {
        if pet_start_year != data_start_year {
            error!(
                pet_start_year,
                data_start_year, "PET source start year disagrees with data start year"
            );
            return Err(IndexError::StartYearMismatch {
                pet_start_year,
                data_start_year,
            });
        }
    }

    let pet_mm = pet_source.resolve(precips_mm.len(), model)?;

    let scaled = sum_to_scale(&water_balance(precips_mm, &pet_mm), months_scale);
    let mut spei = transform_fitted_pearson(&scaled, data_start_year, calibration)?;
    crate::clip_to_valid_range(&mut spei);
    Ok(spei)
}
