//! Potential evapotranspiration driver and the Thornthwaite collaborator
//! trait.

use tracing::error;

use crate::error::IndexError;

/// External PET estimator using Thornthwaite's equation.
///
/// Implementations take monthly mean temperatures in degrees Celsius, a
/// latitude in degrees north, and the year of the first (January) value, and
/// return PET in millimeters per month, same length as the input. The
/// estimation itself lives with the collaborator, not here.
pub trait ThornthwaiteModel {
    /// Estimates monthly PET from temperature and latitude.
    fn potential_evapotranspiration(
        &self,
        temps_celsius: &[f64],
        latitude_degrees: f64,
        data_start_year: i32,
    ) -> Vec<f64>;
}

/// Computes monthly potential evapotranspiration.
///
/// An all-NaN temperature series passes through unchanged without touching
/// the latitude, so a fully-missing station stays fully missing. Otherwise
/// the latitude must be a non-NaN value strictly inside (-90, 90) degrees
/// north, and the estimate is delegated to `model`.
pub fn pet<M: ThornthwaiteModel>(
    temps_celsius: &[f64],
    latitude_degrees: f64,
    data_start_year: i32,
    model: &M,
) -> Result<Vec<f64>, IndexError> {
    if temps_celsius.iter().all(|t| t.is_nan()) {
        return Ok(temps_celsius.to_vec());
    }

    if latitude_degrees.is_nan() || latitude_degrees <= -90.0 || latitude_degrees >= 90.0 {
        error!(latitude = latitude_degrees, "invalid latitude for PET");
        return Err(IndexError::InvalidLatitude {
            latitude: latitude_degrees,
        });
    }

    Ok(model.potential_evapotranspiration(temps_celsius, latitude_degrees, data_start_year))
}
