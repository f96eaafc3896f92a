//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};
use domain::value_objects::{
    DayBoundary, GeoLocation, celsius_to_fahrenheit, fahrenheit, interval_start,
};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Interval Property Tests
// ============================================================================

mod interval_tests {
    use super::*;

    fn instant() -> impl Strategy<Value = DateTime<FixedOffset>> {
        (
            2000i32..2100,
            1u32..=12,
            1u32..=28,
            0u32..24,
            -12i32..=14,
        )
            .prop_map(|(year, month, day, hour, offset_hours)| {
                let offset = FixedOffset::east_opt(offset_hours * 3600)
                    .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
                offset
                    .with_ymd_and_hms(year, month, day, hour, 0, 0)
                    .single()
                    .unwrap()
            })
    }

    proptest! {
        #[test]
        fn start_is_recovered_exactly(
            start in instant(),
            hours in 1u32..48
        ) {
            let encoded = format!("{}/PT{}H", start.to_rfc3339(), hours);
            let parsed = interval_start(&encoded).unwrap();
            prop_assert_eq!(parsed, start);
            prop_assert_eq!(parsed.offset(), start.offset());
            prop_assert_eq!(parsed.hour(), start.hour());
            prop_assert_eq!(parsed.day(), start.day());
        }

        #[test]
        fn strings_without_separator_fail(s in "[0-9T:+-]{0,32}") {
            prop_assert!(interval_start(&s).is_err());
        }

        #[test]
        fn calendar_date_implies_day_of_month(a in instant(), b in instant()) {
            if DayBoundary::CalendarDate.same_day(&a, &b) {
                prop_assert!(DayBoundary::DayOfMonth.same_day(&a, &b));
            }
        }
    }
}

// ============================================================================
// Temperature Property Tests
// ============================================================================

mod temperature_tests {
    use super::*;

    proptest! {
        #[test]
        fn conversion_is_monotonic(a in -90.0f64..60.0, b in -90.0f64..60.0) {
            if a < b {
                prop_assert!(fahrenheit(a) < fahrenheit(b));
            }
        }

        #[test]
        fn optional_conversion_matches_scalar(c in -90.0f64..60.0) {
            let converted = celsius_to_fahrenheit(Some(c)).unwrap();
            prop_assert!((converted - fahrenheit(c)).abs() < 1e-9);
        }
    }
}
