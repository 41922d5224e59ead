use crate::calendar::CalendarDateTime;
use crate::constants::{GREGORIAN_REFORM_JD, J2000_JD, SECONDS_PER_DAY_F64};
use crate::math::split_truncated;
use std::fmt;
use std::ops::Sub;

/// Julian Date as a single day count.
///
/// Midnight falls on `.5` and noon on `.0`, the same alignment the forward
/// transform produces.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDate(f64);

impl JulianDate {
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    pub const fn j2000() -> Self {
        Self(J2000_JD)
    }

    /// 1582-10-15 00:00, first day of the Gregorian calendar.
    pub const fn gregorian_reform() -> Self {
        Self(GREGORIAN_REFORM_JD)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: JulianDate) -> f64 {
        self.0 - earlier.0
    }

    /// Whole-day part of `jd + 0.5`, truncated toward zero.
    pub fn integer_part(&self) -> f64 {
        split_truncated(self.0 + 0.5).0
    }

    /// Fraction of the civil day elapsed since midnight, `jd + 0.5 - integer_part`.
    pub fn day_fraction(&self) -> f64 {
        split_truncated(self.0 + 0.5).1
    }

    /// Converts to calendar components. Same as [`crate::julian_to_gregorian`].
    pub fn to_calendar(&self) -> CalendarDateTime {
        crate::converter::julian_to_gregorian(*self)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd)
    }
}

impl From<JulianDate> for f64 {
    fn from(jd: JulianDate) -> Self {
        jd.0
    }
}

impl From<CalendarDateTime> for JulianDate {
    fn from(dt: CalendarDateTime) -> Self {
        crate::converter::gregorian_to_julian(dt)
    }
}

impl Sub for JulianDate {
    type Output = f64;

    fn sub(self, rhs: JulianDate) -> f64 {
        self.days_since(rhs)
    }
}
