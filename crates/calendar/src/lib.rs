//! # notus-calendar
//!
//! Pure index arithmetic for monthly time series anchored at January.
//!
//! A monthly series is a flat `&[f64]` whose index 0 corresponds to January
//! of a known start year, so index `i` falls in calendar month
//! `(i % 12) + 1`. This crate provides that mapping plus the
//! [`CalibrationPeriod`] type that turns an inclusive year range into a
//! validated index range within such a series.
//!
//! ## Modules
//!
//! | Module   | Description                                      |
//! |----------|--------------------------------------------------|
//! | `month`  | Series-index to calendar-month conversion        |
//! | `period` | Calibration period and year-to-index arithmetic  |
//! | `error`  | Error types                                      |

mod error;
mod month;
mod period;

pub use error::CalendarError;
pub use month::{month_of_index, MONTHS_PER_YEAR};
pub use period::CalibrationPeriod;

/// First year of the conventional reference period (US normals, 1981-2010).
pub const DEFAULT_CALIBRATION_START_YEAR: i32 = 1981;

/// Final year of the conventional reference period (US normals, 1981-2010).
pub const DEFAULT_CALIBRATION_END_YEAR: i32 = 2010;
