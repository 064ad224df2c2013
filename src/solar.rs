//! Sunrise and sunset calculation for a location and day.
//!
//! Implements the standard sunrise-equation formulation
//! (<https://en.wikipedia.org/wiki/Sunrise_equation>) with an elevation
//! correction, then converts the resulting instants into seconds since
//! local midnight in the location's timezone.
//!
//! Two outcomes exist: a sunrise/sunset pair, or [`SunTime::Polar`] when
//! the sun never crosses the horizon threshold on that day (polar night or
//! midnight sun). Polar is an expected result near the poles, not an
//! error. When the sunset instant lands on the local calendar day after
//! the sunrise instant, the sunset value carries a full-day offset so it
//! still reads as "after sunrise on this civil day" (rollover, see
//! [`crate::timefmt`]).

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::timefmt::{self, SECONDS_PER_DAY};

/// Julian date of the Unix epoch.
const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;
/// Julian date of the J2000 epoch (2000-01-01 12:00 TT).
const J2000_JULIAN_DATE: f64 = 2_451_545.0;
/// Obliquity of the ecliptic, degrees.
const EARTH_OBLIQUITY_DEG: f64 = 23.4397;
/// Solar altitude defining sunrise/sunset at sea level, degrees
/// (solar disc radius plus atmospheric refraction).
const HORIZON_ALTITUDE_DEG: f64 = -0.833;

fn epoch_to_julian(timestamp: i64) -> f64 {
    timestamp as f64 / 86400.0 + UNIX_EPOCH_JULIAN_DATE
}

fn julian_to_epoch(julian_date: f64) -> f64 {
    (julian_date - UNIX_EPOCH_JULIAN_DATE) * 86400.0
}

/// Sunrise and sunset for one location and day, in seconds since local
/// midnight of the queried day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SunTime {
    /// The sun never crosses the horizon threshold on this day at this
    /// location (polar night, or midnight sun).
    Polar,
    /// Sunrise and sunset seconds-of-day. `sunset` exceeds 86400 when the
    /// sun sets after local midnight (rollover).
    Visible { sunrise: i64, sunset: i64 },
}

impl SunTime {
    /// Whether this is the polar night / midnight sun sentinel.
    pub fn is_polar(&self) -> bool {
        matches!(self, SunTime::Polar)
    }

    /// Sunrise in seconds since local midnight.
    ///
    /// # Panics
    /// Panics on [`SunTime::Polar`]: reading a sunrise from a day that has
    /// none is a caller bug. Match on the enum to branch on polar days.
    pub fn sunrise(&self) -> i64 {
        match self {
            SunTime::Visible { sunrise, .. } => *sunrise,
            SunTime::Polar => panic!("no sunrise: polar night/day"),
        }
    }

    /// Sunset in seconds since local midnight; above 86400 on rollover.
    ///
    /// # Panics
    /// Panics on [`SunTime::Polar`], like [`SunTime::sunrise`].
    pub fn sunset(&self) -> i64 {
        match self {
            SunTime::Visible { sunset, .. } => *sunset,
            SunTime::Polar => panic!("no sunset: polar night/day"),
        }
    }

    /// Sunrise as "HH:MM:SS". Panics on polar days.
    pub fn sunrise_string(&self) -> String {
        timefmt::hours_minutes_seconds(self.sunrise())
    }

    /// Sunset as "HH:MM:SS"; hour may exceed 23 on rollover. Panics on
    /// polar days.
    pub fn sunset_string(&self) -> String {
        timefmt::hours_minutes_seconds(self.sunset())
    }

    /// Compute sunrise/sunset for the civil day containing `timestamp`
    /// (epoch seconds; local noon of the queried day is the conventional
    /// choice) at the given coordinates and elevation in meters.
    ///
    /// Deterministic and pure: same inputs always produce the same output.
    pub fn from_timestamp_and_location(
        timestamp: i64,
        timezone: Tz,
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
    ) -> SunTime {
        let julian_date = epoch_to_julian(timestamp);
        let julian_day = (julian_date - (J2000_JULIAN_DATE + 0.0009) + 69.184 / 86400.0).ceil();

        let mean_solar_time = julian_day + 0.0009 - longitude_deg / 360.0;

        let mean_anomaly_deg = (357.5291 + 0.98560028 * mean_solar_time) % 360.0;
        let mean_anomaly = mean_anomaly_deg.to_radians();

        let center_deg = 1.9148 * mean_anomaly.sin()
            + 0.02 * (2.0 * mean_anomaly).sin()
            + 0.0003 * (3.0 * mean_anomaly).sin();

        let ecliptic_longitude_deg = (mean_anomaly_deg + center_deg + 180.0 + 102.9372) % 360.0;
        let ecliptic_longitude = ecliptic_longitude_deg.to_radians();

        let transit = J2000_JULIAN_DATE + mean_solar_time + 0.0053 * mean_anomaly.sin()
            - 0.0069 * (2.0 * ecliptic_longitude).sin();

        let sin_declination = ecliptic_longitude.sin() * EARTH_OBLIQUITY_DEG.to_radians().sin();
        let cos_declination = sin_declination.asin().cos();

        // Observer elevation widens (or, below sea level, narrows) the
        // visible horizon by about 2.076'·√elevation.
        let elevation_correction_deg = if elevation_m < 0.0 {
            2.076 * elevation_m.abs().sqrt() / 60.0
        } else {
            -2.076 * elevation_m.sqrt() / 60.0
        };

        let cos_hour_angle = ((HORIZON_ALTITUDE_DEG + elevation_correction_deg)
            .to_radians()
            .sin()
            - latitude_deg.to_radians().sin() * sin_declination)
            / (latitude_deg.to_radians().cos() * cos_declination);

        if !(-1.0..=1.0).contains(&cos_hour_angle) {
            return SunTime::Polar;
        }

        let hour_angle_deg = cos_hour_angle.acos().to_degrees();

        let rise = julian_to_epoch(transit - hour_angle_deg / 360.0);
        let set = julian_to_epoch(transit + hour_angle_deg / 360.0);
        SunTime::from_event_timestamps(rise, set, timezone)
    }

    /// Convert sunrise/sunset epoch instants to seconds-of-day in `timezone`,
    /// applying the rollover offset when the sunset falls on the next local
    /// calendar day.
    fn from_event_timestamps(rise_timestamp: f64, set_timestamp: f64, timezone: Tz) -> SunTime {
        let rise = to_zone(rise_timestamp, timezone);
        let set = to_zone(set_timestamp, timezone);

        let mut sunset = seconds_of_day(&set);
        if set.date_naive() > rise.date_naive() {
            sunset += SECONDS_PER_DAY;
        }
        SunTime::Visible {
            sunrise: seconds_of_day(&rise),
            sunset,
        }
    }
}

fn to_zone(timestamp: f64, timezone: Tz) -> DateTime<Tz> {
    // Truncate to whole seconds before conversion; display precision is
    // one second throughout.
    DateTime::from_timestamp(timestamp.floor() as i64, 0)
        .expect("sunrise/sunset instant outside the representable date range")
        .with_timezone(&timezone)
}

fn seconds_of_day(instant: &DateTime<Tz>) -> i64 {
    instant.num_seconds_from_midnight() as i64
}
