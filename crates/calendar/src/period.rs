//! Calibration period and year-to-index arithmetic.

use std::ops::Range;

use crate::error::CalendarError;
use crate::month::MONTHS_PER_YEAR;

/// An inclusive `[start_year, end_year]` range of calendar years used to fit
/// distribution parameters representing "normal" conditions.
///
/// Construction validates only the year ordering; compatibility with a
/// particular series is checked by [`CalibrationPeriod::month_range`], which
/// needs the series' start year and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationPeriod {
    start_year: i32,
    end_year: i32,
}

impl CalibrationPeriod {
    /// Creates a calibration period after validating `start_year <= end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, CalendarError> {
        if start_year > end_year {
            return Err(CalendarError::InvalidYearOrder {
                start_year,
                end_year,
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// First year of the period.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Final year of the period.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of calendar years in the period (inclusive of both ends).
    pub fn n_years(&self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }

    /// Number of months in the period.
    pub fn n_months(&self) -> usize {
        self.n_years() * MONTHS_PER_YEAR
    }

    /// Converts the period into an index range within a monthly series that
    /// starts in January of `data_start_year` and has `data_months` entries.
    ///
    /// The returned range always starts on a January (a multiple of 12) and
    /// is clamped to the end of the series, so a period that begins late in
    /// the data may cover fewer than [`CalibrationPeriod::n_months`] entries.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::StartsBeforeData`] if the period begins before
    ///   `data_start_year`.
    /// - [`CalendarError::ExceedsData`] if the period spans more months than
    ///   the series holds.
    pub fn month_range(
        &self,
        data_start_year: i32,
        data_months: usize,
    ) -> Result<Range<usize>, CalendarError> {
        if self.start_year < data_start_year {
            return Err(CalendarError::StartsBeforeData {
                calibration_start_year: self.start_year,
                data_start_year,
            });
        }
        if self.n_months() > data_months {
            return Err(CalendarError::ExceedsData {
                calibration_months: self.n_months(),
                data_months,
            });
        }

        let start = (self.start_year - data_start_year) as usize * MONTHS_PER_YEAR;
        let end = (start + self.n_months()).min(data_months);
        Ok(start.min(data_months)..end)
    }
}
