//! Conversions between [`CalendarDateTime`] and `chrono::NaiveDateTime`.
//!
//! Enabled with the `chrono` feature. Sub-second precision is dropped going
//! into [`CalendarDateTime`]; the reverse direction fails for components chrono
//! cannot represent.

use crate::calendar::CalendarDateTime;
use crate::errors::TimeError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

impl From<NaiveDateTime> for CalendarDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        CalendarDateTime::new(
            dt.year(),
            dt.month() as i32,
            dt.day() as i32,
            dt.hour() as i32,
            dt.minute() as i32,
            dt.second() as i32,
        )
    }
}

impl TryFrom<CalendarDateTime> for NaiveDateTime {
    type Error = TimeError;

    fn try_from(dt: CalendarDateTime) -> Result<Self, Self::Error> {
        dt.validate()?;

        let date = NaiveDate::from_ymd_opt(dt.year(), dt.month() as u32, dt.day() as u32)
            .ok_or_else(|| {
                TimeError::out_of_range(&format!("year {} outside chrono's range", dt.year()))
            })?;

        date.and_hms_opt(dt.hour() as u32, dt.minute() as u32, dt.second() as u32)
            .ok_or_else(|| TimeError::out_of_range("time of day not representable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::{gregorian_to_julian, julian_to_gregorian};

    #[test]
    fn test_from_naive_date_time() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_milli_opt(12, 0, 0, 750)
            .unwrap();
        let dt = CalendarDateTime::from(naive);
        assert_eq!(dt, CalendarDateTime::new(2000, 1, 1, 12, 0, 0));
        assert_eq!(gregorian_to_julian(dt).value(), 2451545.0);
    }

    #[test]
    fn test_into_naive_date_time() {
        let dt = julian_to_gregorian(crate::JulianDate::new(2440587.5));
        let naive = NaiveDateTime::try_from(dt).unwrap();
        assert_eq!(naive.and_utc().timestamp(), 0);
    }

    #[test]
    fn test_invalid_components_rejected() {
        let err = NaiveDateTime::try_from(CalendarDateTime::from_date(2023, 2, 29)).unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { .. }));
    }

    #[test]
    fn test_year_outside_chrono_range() {
        let err =
            NaiveDateTime::try_from(CalendarDateTime::from_date(400_000, 1, 1)).unwrap_err();
        assert!(matches!(err, TimeError::OutOfRange { .. }));
    }
}
