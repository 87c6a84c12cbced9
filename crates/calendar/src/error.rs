//! Error types for the notus-calendar crate.

/// Error type for all fallible operations in the notus-calendar crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a calibration period's start year is after its end year.
    #[error("invalid calibration period: start year {start_year} is after end year {end_year}")]
    InvalidYearOrder {
        /// First year of the period.
        start_year: i32,
        /// Final year of the period.
        end_year: i32,
    },

    /// Returned when the calibration period begins before the data does.
    #[error(
        "calibration start year {calibration_start_year} precedes the data start year {data_start_year}"
    )]
    StartsBeforeData {
        /// First year of the calibration period.
        calibration_start_year: i32,
        /// First year of the data.
        data_start_year: i32,
    },

    /// Returned when the calibration span is longer than the available data.
    #[error(
        "calibration period of {calibration_months} months exceeds the {data_months} months of data"
    )]
    ExceedsData {
        /// Length of the calibration period in months.
        calibration_months: usize,
        /// Length of the data in months.
        data_months: usize,
    },
}
