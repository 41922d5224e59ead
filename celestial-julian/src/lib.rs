//! Gregorian calendar ↔ Julian Date conversion.
//!
//! Two pure transforms sit at the core of the crate:
//!
//! - [`gregorian_to_julian`] turns naive calendar components into a [`JulianDate`].
//! - [`julian_to_gregorian`] turns a [`JulianDate`] back into components.
//!
//! Dates before the Gregorian reform (1582-10-15) come out of the inverse
//! transform in the proleptic Julian calendar. See [`converter`] for the exact
//! calendar and day-fraction conventions.
//!
//! ```
//! use celestial_julian::{CalendarDateTime, JulianDate};
//!
//! let reform = CalendarDateTime::from_date(1582, 10, 15);
//! assert_eq!(reform.to_julian_date(), JulianDate::gregorian_reform());
//!
//! let day_before = JulianDate::gregorian_reform().add_days(-1.0).to_calendar();
//! assert_eq!(day_before, CalendarDateTime::from_date(1582, 10, 4));
//! ```
//!
//! # Features
//!
//! | Feature | Adds |
//! |---------|------|
//! | `serde` | `Serialize`/`Deserialize` for [`CalendarDateTime`] and [`JulianDate`] |
//! | `chrono` | conversions to and from `chrono::NaiveDateTime` |

pub mod calendar;
pub mod constants;
pub mod converter;
pub mod errors;
#[cfg(feature = "chrono")]
pub mod interop;
pub mod julian;
pub mod math;

pub use calendar::{days_in_month, is_gregorian_leap_year, CalendarDateTime};
pub use converter::{
    gregorian_to_julian, julian_to_gregorian, try_gregorian_to_julian, try_julian_to_gregorian,
};
pub use errors::{TimeError, TimeResult};
pub use julian::JulianDate;
