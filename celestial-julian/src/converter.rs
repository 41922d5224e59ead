//! Gregorian calendar ↔ Julian Date transforms.
//!
//! Both directions follow the classic day-count formulation built on the
//! 365.25-day Julian year and the 30.6001-day mean month.
//!
//! # Calendar handling
//!
//! The two functions are deliberately not symmetric:
//!
//! | Direction | Calendar rules |
//! |-----------|----------------|
//! | [`gregorian_to_julian`] | Gregorian correction for every date (proleptic Gregorian) |
//! | [`julian_to_gregorian`] | Julian calendar below day 2299161, Gregorian from 1582-10-15 on |
//!
//! Round trips are exact to the second from 1582-10-15 onwards. A pre-reform
//! date goes in as proleptic Gregorian and comes back as proleptic Julian.
//!
//! # Day fraction
//!
//! Midnight maps to `.5` and noon to `.0`:
//!
//! ```
//! use celestial_julian::{gregorian_to_julian, julian_to_gregorian, CalendarDateTime};
//!
//! let jd = gregorian_to_julian(CalendarDateTime::new(2000, 1, 1, 12, 0, 0));
//! assert_eq!(jd.value(), 2451545.0);
//!
//! let dt = julian_to_gregorian(jd);
//! assert_eq!(dt, CalendarDateTime::new(2000, 1, 1, 12, 0, 0));
//! ```
//!
//! # Input checking
//!
//! The plain transforms accept anything and never panic; nonsense in gives
//! deterministic nonsense out. [`try_gregorian_to_julian`] and
//! [`try_julian_to_gregorian`] reject invalid input first and otherwise return
//! bit-identical results.

use crate::calendar::CalendarDateTime;
use crate::constants::{
    DAYS_PER_GREGORIAN_CENTURY, DAYS_PER_JULIAN_YEAR, EPOCH_DAY_OFFSET, EPOCH_YEAR_OFFSET,
    GREGORIAN_CENTURY_ANCHOR, GREGORIAN_REFORM_DAY_NUMBER, HOURS_PER_DAY, MINUTES_PER_HOUR,
    MONTH_LENGTH_FACTOR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::errors::{TimeError, TimeResult};
use crate::julian::JulianDate;
use crate::math::{floor, split_truncated, to_i32, trunc};

/// Converts calendar components to a Julian Date.
///
/// January and February count as months 13 and 14 of the previous year. The
/// Gregorian century correction is applied unconditionally.
pub fn gregorian_to_julian(date: CalendarDateTime) -> JulianDate {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    if date.month() <= 2 {
        year -= 1.0;
        month += 12.0;
    }

    let century = floor(year / 100.0);
    let correction = 2.0 - century + floor(century / 4.0);

    let day_number = floor(DAYS_PER_JULIAN_YEAR * (year + EPOCH_YEAR_OFFSET as f64))
        + floor(MONTH_LENGTH_FACTOR * (month + 1.0))
        + date.day() as f64
        + correction
        - EPOCH_DAY_OFFSET;

    let fraction = (date.hour() as f64
        + date.minute() as f64 / MINUTES_PER_HOUR
        + date.second() as f64 / SECONDS_PER_HOUR)
        / HOURS_PER_DAY;

    JulianDate::new(day_number + fraction)
}

/// Converts a Julian Date to calendar components.
///
/// Day numbers below 2299161 (before 1582-10-15) are read as proleptic Julian
/// calendar dates. Every intermediate is truncated toward zero. Non-finite
/// input saturates instead of panicking.
pub fn julian_to_gregorian(jd: JulianDate) -> CalendarDateTime {
    let (z, f) = split_truncated(jd.value() + 0.5);

    let a = if z < GREGORIAN_REFORM_DAY_NUMBER {
        log::trace!("{}: day {} uses the Julian calendar", jd, z);
        z
    } else {
        let alpha = trunc((z - GREGORIAN_CENTURY_ANCHOR) / DAYS_PER_GREGORIAN_CENTURY);
        log::trace!("{}: day {} uses the Gregorian calendar", jd, z);
        z + 1.0 + alpha - trunc(alpha / 4.0)
    };

    let b = a + 1524.0;
    let c = trunc((b - 122.1) / DAYS_PER_JULIAN_YEAR);
    let d = trunc(DAYS_PER_JULIAN_YEAR * c);
    let e = trunc((b - d) / MONTH_LENGTH_FACTOR);

    let day = trunc(b - d - trunc(MONTH_LENGTH_FACTOR * e));
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 {
        c - EPOCH_YEAR_OFFSET as f64
    } else {
        c - (EPOCH_YEAR_OFFSET - 1) as f64
    };

    let hours = f * HOURS_PER_DAY;
    let hour = trunc(hours);
    let minutes = (hours - hour) * MINUTES_PER_HOUR;
    let minute = trunc(minutes);
    let second = trunc((minutes - minute) * SECONDS_PER_MINUTE);

    CalendarDateTime::new(
        to_i32(year),
        to_i32(month),
        to_i32(day),
        to_i32(hour),
        to_i32(minute),
        to_i32(second),
    )
}

/// [`gregorian_to_julian`] after [`CalendarDateTime::validate`].
pub fn try_gregorian_to_julian(date: CalendarDateTime) -> TimeResult<JulianDate> {
    if let Err(err) = date.validate() {
        log::debug!("rejecting calendar input {}: {}", date, err);
        return Err(err);
    }
    Ok(gregorian_to_julian(date))
}

/// [`julian_to_gregorian`] for finite input only.
pub fn try_julian_to_gregorian(jd: JulianDate) -> TimeResult<CalendarDateTime> {
    if !jd.is_finite() {
        log::debug!("rejecting non-finite Julian Date {}", jd.value());
        return Err(TimeError::non_finite(jd.value()));
    }
    Ok(julian_to_gregorian(jd))
}
