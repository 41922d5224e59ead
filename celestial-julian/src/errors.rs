//! Error types for the checked conversions.
//!
//! The plain transforms in [`converter`](crate::converter) never fail. The
//! `try_` variants and the chrono interop report rejected input through
//! [`TimeError`].
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidDate`](TimeError::InvalidDate) | calendar validation |
//! | [`InvalidTime`](TimeError::InvalidTime) | time-of-day validation |
//! | [`NonFinite`](TimeError::NonFinite) | NaN or infinite Julian Date |
//! | [`OutOfRange`](TimeError::OutOfRange) | component not representable by the target type |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    #[error("Invalid time {hour:02}:{minute:02}:{second:02}: {message}")]
    InvalidTime {
        hour: i32,
        minute: i32,
        second: i32,
        message: String,
    },

    #[error("Julian Date is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("Value out of range: {message}")]
    OutOfRange { message: String },
}

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

impl TimeError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn invalid_time(hour: i32, minute: i32, second: i32, reason: &str) -> Self {
        Self::InvalidTime {
            hour,
            minute,
            second,
            message: reason.to_string(),
        }
    }

    pub fn non_finite(value: f64) -> Self {
        Self::NonFinite { value }
    }

    pub fn out_of_range(reason: &str) -> Self {
        Self::OutOfRange {
            message: reason.to_string(),
        }
    }
}
