//! Error types for the notus-distfit crate.

/// Error type for all fallible operations in the notus-distfit crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistFitError {
    /// Calibration window error.
    #[error(transparent)]
    Calendar(#[from] notus_calendar::CalendarError),

    /// Returned when a gamma distribution cannot be constructed.
    ///
    /// The `message` field is a `String` (not a statrs error type) because
    /// statrs errors do not implement `Clone`.
    #[error("gamma construction failed (shape={shape}, scale={scale}): {message}")]
    GammaConstruction {
        /// Shape parameter that caused the failure.
        shape: f64,
        /// Scale parameter that caused the failure.
        scale: f64,
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_gamma_construction() {
        let e = DistFitError::GammaConstruction {
            shape: -1.0,
            scale: 2.0,
            message: "shape must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "gamma construction failed (shape=-1, scale=2): shape must be positive"
        );
    }

    #[test]
    fn from_calendar_error() {
        let ce = notus_calendar::CalendarError::StartsBeforeData {
            calibration_start_year: 1979,
            data_start_year: 1980,
        };
        let de: DistFitError = ce.into();
        assert!(matches!(de, DistFitError::Calendar(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DistFitError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DistFitError>();
    }
}
