//! Integer/fraction splitting used by both transforms.
//!
//! The forward transform floors its intermediates and the inverse truncates
//! toward zero. The two differ for negative values, so each call site picks
//! explicitly. Everything stays in `f64`; integers are only materialised at the
//! very end with saturating casts.

#[inline]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[inline]
pub fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}

/// Splits `x` into a truncated integer part and the remainder `x - trunc(x)`.
///
/// For negative `x` the remainder is negative too.
#[inline]
pub fn split_truncated(x: f64) -> (f64, f64) {
    let whole = trunc(x);
    (whole, x - whole)
}

/// Saturating conversion of an already-integral `f64`. NaN maps to 0.
#[inline]
pub fn to_i32(x: f64) -> i32 {
    x as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_and_trunc_differ_for_negatives() {
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(trunc(-1.5), -1.0);
        assert_eq!(floor(1.5), 1.0);
        assert_eq!(trunc(1.5), 1.0);
    }

    #[test]
    fn test_split_truncated() {
        assert_eq!(split_truncated(2451545.5), (2451545.0, 0.5));
        assert_eq!(split_truncated(-0.25), (-0.0, -0.25));
        assert_eq!(split_truncated(3.0), (3.0, 0.0));
    }

    #[test]
    fn test_to_i32_saturates() {
        assert_eq!(to_i32(f64::NAN), 0);
        assert_eq!(to_i32(f64::INFINITY), i32::MAX);
        assert_eq!(to_i32(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(to_i32(-7.0), -7);
    }
}
