//! Exact sunrise/sunset scenarios for registry locations, matching the
//! reference values to the second, plus a registry-wide seasonal sweep.

use chrono::TimeZone;
use suncurve::{SunTime, locations, timefmt};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn suntime_at_noon(id: &str, year: i32, month: u32, day: u32) -> SunTime {
    let location = locations::require(id).unwrap();
    let noon = location
        .timezone
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap();
    SunTime::from_timestamp_and_location(
        noon.timestamp(),
        location.timezone,
        location.latitude,
        location.longitude,
        location.elevation,
    )
}

#[test]
fn test_stockholm_2024_01_16() {
    init_logging();
    let suntime = suntime_at_noon("stockholm_sweden", 2024, 1, 16);
    assert!(!suntime.is_polar());
    assert_eq!(suntime.sunrise_string(), "08:29:42");
    assert_eq!(suntime.sunset_string(), "15:26:54");
}

#[test]
fn test_montreal_2024_01_15() {
    init_logging();
    let suntime = suntime_at_noon("montreal_canada", 2024, 1, 15);
    assert!(!suntime.is_polar());
    assert_eq!(suntime.sunrise_string(), "07:28:15");
    assert_eq!(suntime.sunset_string(), "16:41:47");
}

#[test]
fn test_ilulissat_2024_01_13() {
    init_logging();
    let suntime = suntime_at_noon("ilulissat_greenland", 2024, 1, 13);
    assert!(!suntime.is_polar());
    assert_eq!(suntime.sunrise_string(), "12:50:49");
    assert_eq!(suntime.sunset_string(), "14:17:49");
}

#[test]
fn test_ilulissat_2024_01_01_polar_night() {
    init_logging();
    let suntime = suntime_at_noon("ilulissat_greenland", 2024, 1, 1);
    assert!(suntime.is_polar());
}

#[test]
#[should_panic(expected = "no sunrise")]
fn test_ilulissat_polar_night_sunrise_read_panics() {
    suntime_at_noon("ilulissat_greenland", 2024, 1, 1).sunrise();
}

#[test]
#[should_panic(expected = "no sunset")]
fn test_ilulissat_polar_night_sunset_read_panics() {
    suntime_at_noon("ilulissat_greenland", 2024, 1, 1).sunset();
}

#[test]
fn test_baku_2024_03_02() {
    init_logging();
    let suntime = suntime_at_noon("baku_azerbaijan", 2024, 3, 2);
    assert!(!suntime.is_polar());
    assert_eq!(suntime.sunrise_string(), "07:14:51");
    assert_eq!(suntime.sunset_string(), "18:33:11");
}

#[test]
fn test_mcmurdo_2024_02_21_rollover() {
    init_logging();
    let suntime = suntime_at_noon("mcmurdo_station_antarctica", 2024, 2, 21);
    assert!(!suntime.is_polar());
    assert_eq!(suntime.sunrise_string(), "03:05:55");
    assert_eq!(suntime.sunset_string(), "25:11:11");
    assert_eq!(timefmt::hours_minutes(suntime.sunset()), "01:11");
    assert_eq!(
        timefmt::hours_minutes_no_rollover(suntime.sunset()),
        "25:11"
    );
}

#[test]
fn test_every_location_across_the_seasons() {
    init_logging();
    // Four seasonally spread days; polar results are expected at the
    // extreme latitudes, anything else must produce well-formed times.
    for location in locations::all() {
        for (month, day) in [(1, 1), (4, 1), (7, 1), (10, 1)] {
            let suntime = suntime_at_noon(location.id, 2024, month, day);
            if suntime.is_polar() {
                continue;
            }
            for formatted in [suntime.sunrise_string(), suntime.sunset_string()] {
                let parts: Vec<&str> = formatted.split(':').collect();
                assert_eq!(parts.len(), 3, "{}: {formatted}", location.id);
                for part in parts {
                    assert_eq!(part.len(), 2, "{}: {formatted}", location.id);
                    assert!(
                        part.chars().all(|c| c.is_ascii_digit()),
                        "{}: {formatted}",
                        location.id
                    );
                }
            }
        }
    }
}
