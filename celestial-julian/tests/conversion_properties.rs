use celestial_julian::{
    days_in_month, gregorian_to_julian, julian_to_gregorian, CalendarDateTime, JulianDate,
};
use proptest::prelude::*;

fn post_reform_date_time() -> impl Strategy<Value = CalendarDateTime> {
    (1583i32..=9999, 1i32..=12)
        .prop_flat_map(|(year, month)| {
            (
                Just(year),
                Just(month),
                1..=days_in_month(year, month),
                0i32..24,
                0i32..60,
                0i32..60,
            )
        })
        .prop_map(|(y, mo, d, h, mi, s)| CalendarDateTime::new(y, mo, d, h, mi, s))
}

proptest! {
    #[test]
    fn round_trip_within_one_second(input in post_reform_date_time()) {
        let back = julian_to_gregorian(gregorian_to_julian(input));
        prop_assert_eq!(
            (back.year(), back.month(), back.day()),
            (input.year(), input.month(), input.day())
        );
        prop_assert!((back.seconds_of_day() - input.seconds_of_day()).abs() <= 1);
    }

    #[test]
    fn forward_is_monotonic(a in post_reform_date_time(), b in post_reform_date_time()) {
        let (ja, jb) = (gregorian_to_julian(a), gregorian_to_julian(b));
        if a < b {
            prop_assert!(ja < jb);
        } else if a == b {
            prop_assert_eq!(ja.value().to_bits(), jb.value().to_bits());
        } else {
            prop_assert!(ja > jb);
        }
    }

    #[test]
    fn consecutive_days_differ_by_one(input in post_reform_date_time()) {
        let today = gregorian_to_julian(CalendarDateTime::from_date(input.year(), input.month(), input.day()));
        let tomorrow = julian_to_gregorian(today.add_days(1.0));
        let expected_day = if input.day() == days_in_month(input.year(), input.month()) { 1 } else { input.day() + 1 };
        prop_assert_eq!(tomorrow.day(), expected_day);
        prop_assert_eq!(gregorian_to_julian(tomorrow) - today, 1.0);
    }

    #[test]
    fn inverse_never_panics(value in proptest::num::f64::ANY) {
        let _ = julian_to_gregorian(JulianDate::new(value));
    }

    #[test]
    fn forward_never_panics(
        y in any::<i16>(), mo in -20i32..40, d in -40i32..80,
        h in -30i32..50, mi in -100i32..100, s in -100i32..100,
    ) {
        let _ = gregorian_to_julian(CalendarDateTime::new(y as i32, mo, d, h, mi, s));
    }
}
