//! Error types for the notus-indices crate.

/// Error type for all fallible operations in the notus-indices crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the months scale is zero.
    #[error("months scale must be at least 1")]
    InvalidScale,

    /// Returned when array lengths don't match.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a latitude needed for PET derivation is out of range.
    #[error(
        "invalid latitude: {latitude} (must be in degrees north, between -90.0 and 90.0 exclusive)"
    )]
    InvalidLatitude {
        /// The offending latitude value.
        latitude: f64,
    },

    /// Returned when the start year carried by a derived PET source
    /// disagrees with the driver's data start year.
    #[error("PET source start year {pet_start_year} does not match data start year {data_start_year}")]
    StartYearMismatch {
        /// Start year carried by the PET source.
        pet_start_year: i32,
        /// Start year passed to the driver.
        data_start_year: i32,
    },

    /// Calibration window error.
    #[error(transparent)]
    Calendar(#[from] notus_calendar::CalendarError),

    /// Distribution fitting error.
    #[error(transparent)]
    DistFit(#[from] notus_distfit::DistFitError),
}
