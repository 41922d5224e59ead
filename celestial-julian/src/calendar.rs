//! Naive Gregorian calendar date and time of day.
//!
//! [`CalendarDateTime`] is the component form consumed and produced by the
//! converter. It carries no time zone. Components are signed and unchecked so
//! that any caller input can be represented and passed through the arithmetic
//! unchanged; [`CalendarDateTime::validate`] is available when a caller wants
//! calendar correctness enforced.
//!
//! Ordering is lexicographic over (year, month, day, hour, minute, second),
//! which is chronological for valid values.

use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{TimeError, TimeResult};
use crate::julian::JulianDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDateTime {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

impl CalendarDateTime {
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given day.
    pub const fn from_date(year: i32, month: i32, day: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn second(&self) -> i32 {
        self.second
    }

    /// Seconds elapsed since midnight. Not range checked.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR as i64
            + self.minute as i64 * SECONDS_PER_MINUTE as i64
            + self.second as i64
    }

    /// Converts to a Julian Date. Same as [`crate::gregorian_to_julian`].
    pub fn to_julian_date(&self) -> JulianDate {
        crate::converter::gregorian_to_julian(*self)
    }

    /// Checks the components against the proleptic Gregorian calendar.
    ///
    /// Dates inside the reform gap (1582-10-05 to 1582-10-14) are accepted,
    /// matching the forward transform, which applies the Gregorian rules to
    /// every date.
    pub fn validate(&self) -> TimeResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::invalid_date(
                self.year,
                self.month,
                self.day,
                "month out of range",
            ));
        }

        let last_day = days_in_month(self.year, self.month);
        if self.day < 1 || self.day > last_day {
            return Err(TimeError::invalid_date(
                self.year,
                self.month,
                self.day,
                &format!("day must be between 1 and {}", last_day),
            ));
        }

        if !(0..=23).contains(&self.hour) {
            return Err(self.time_error("hour out of range"));
        }
        if !(0..=59).contains(&self.minute) {
            return Err(self.time_error("minute out of range"));
        }
        if !(0..=59).contains(&self.second) {
            return Err(self.time_error("second out of range"));
        }

        Ok(())
    }

    fn time_error(&self, reason: &str) -> TimeError {
        TimeError::invalid_time(self.hour, self.minute, self.second, reason)
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl From<JulianDate> for CalendarDateTime {
    fn from(jd: JulianDate) -> Self {
        crate::converter::julian_to_gregorian(jd)
    }
}

/// Leap year under the proleptic Gregorian rule.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
