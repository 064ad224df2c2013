//! Property tests for the solar solver: total over its input domain and
//! shape-correct whenever the sun rises.

use proptest::prelude::*;
use suncurve::SunTime;
use suncurve::timefmt::SECONDS_PER_DAY;

fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

fn elevation_strategy() -> impl Strategy<Value = f64> {
    // Dead Sea shores to high mountain observatories.
    -430.0..=4000.0
}

/// Noon-ish instants between 1990 and 2050.
fn timestamp_strategy() -> impl Strategy<Value = i64> {
    631_152_000..=2_524_608_000i64
}

proptest! {
    /// The solver never panics and never returns out-of-shape values:
    /// sunrise lies within the civil day, sunset follows it by less than
    /// 24 hours, and at most one rollover offset applies.
    #[test]
    fn test_solver_is_total(
        timestamp in timestamp_strategy(),
        latitude in latitude_strategy(),
        longitude in longitude_strategy(),
        elevation in elevation_strategy(),
    ) {
        let suntime = SunTime::from_timestamp_and_location(
            timestamp,
            chrono_tz::UTC,
            latitude,
            longitude,
            elevation,
        );
        match suntime {
            SunTime::Polar => {}
            SunTime::Visible { sunrise, sunset } => {
                prop_assert!((0..SECONDS_PER_DAY).contains(&sunrise));
                prop_assert!(sunset >= sunrise);
                prop_assert!(sunset - sunrise <= SECONDS_PER_DAY);
                prop_assert!(sunset < 2 * SECONDS_PER_DAY);
            }
        }
    }

    /// Formatted output is always five characters, zero-padded, for
    /// non-rollover values, and folding is the identity below 24h.
    #[test]
    fn test_formatting_shape(seconds in 0..SECONDS_PER_DAY) {
        let hhmm = suncurve::timefmt::hours_minutes(seconds);
        prop_assert_eq!(hhmm.len(), 5);
        prop_assert_eq!(
            hhmm,
            suncurve::timefmt::hours_minutes_no_rollover(seconds)
        );
        let hhmmss = suncurve::timefmt::hours_minutes_seconds(seconds);
        prop_assert_eq!(hhmmss.len(), 8);
    }
}
