pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of 1582-10-15 00:00, the first day of the Gregorian calendar.
pub const GREGORIAN_REFORM_JD: f64 = 2299160.5;

/// First integer day (of `jd + 0.5`) handled with the Gregorian correction.
pub const GREGORIAN_REFORM_DAY_NUMBER: f64 = 2299161.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Mean Gregorian century (100 years less one skipped leap day).
pub const DAYS_PER_GREGORIAN_CENTURY: f64 = 36524.25;

/// Mean month length used by the month/day split. Slightly above 30.6 so that
/// truncation never lands on the wrong side of a month boundary.
pub const MONTH_LENGTH_FACTOR: f64 = 30.6001;

/// Year offset placing the algorithm's epoch at -4716.
pub const EPOCH_YEAR_OFFSET: i32 = 4716;

/// Day offset between the algorithm's internal count and the Julian Date.
pub const EPOCH_DAY_OFFSET: f64 = 1524.5;

/// Origin of the century count in the inverse Gregorian correction.
pub const GREGORIAN_CENTURY_ANCHOR: f64 = 1867216.25;
