//! The static location registry.
//!
//! A fixed, ordered set of places the charting frontend can select from.
//! Each entry carries an id, display names per language tag, an IANA
//! timezone, coordinates in degrees, and elevation in meters (negative for
//! places below sea level). Loaded once, never mutated.
//!
//! An id that fails to resolve indicates corrupt hardcoded data somewhere
//! upstream; [`require`] surfaces that as a fatal error rather than
//! something to catch and retry.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Default language tag used for display-name fallback.
pub const DEFAULT_LANGUAGE: &str = "en-gb";

/// One place in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Stable unique id, e.g. `"stockholm_sweden"`.
    pub id: &'static str,
    /// (language tag, display name) pairs; `en-gb` is always present.
    pub names: &'static [(&'static str, &'static str)],
    pub timezone: Tz,
    /// Degrees, −90..90.
    pub latitude: f64,
    /// Degrees, −180..180.
    pub longitude: f64,
    /// Meters; may be negative.
    pub elevation: f64,
}

impl Location {
    /// Display name for a language tag, falling back to
    /// [`DEFAULT_LANGUAGE`].
    pub fn name(&self, language: &str) -> &'static str {
        self.names
            .iter()
            .find(|(l, _)| *l == language)
            .or_else(|| self.names.iter().find(|(l, _)| *l == DEFAULT_LANGUAGE))
            .map(|(_, n)| *n)
            .unwrap_or(self.id)
    }
}

macro_rules! loc {
    ($id:literal, $tz:expr, $lat:expr, $lon:expr, $elev:expr, $($lang:literal: $name:literal),+ $(,)?) => {
        Location {
            id: $id,
            names: &[$(($lang, $name)),+],
            timezone: $tz,
            latitude: $lat,
            longitude: $lon,
            elevation: $elev,
        }
    };
}

/// The registry, in selector display order.
static REGISTRY: &[Location] = &[
    loc!("stockholm_sweden", Tz::Europe__Stockholm, 59.3293, 18.0686, 17.0,
        "en-gb": "Stockholm", "sv-se": "Stockholm"),
    loc!("gothenburg_sweden", Tz::Europe__Stockholm, 57.7089, 11.9746, 12.0,
        "en-gb": "Gothenburg", "sv-se": "Göteborg"),
    loc!("malmo_sweden", Tz::Europe__Stockholm, 55.6050, 13.0038, 12.0,
        "en-gb": "Malmö", "sv-se": "Malmö"),
    loc!("kiruna_sweden", Tz::Europe__Stockholm, 67.8558, 20.2253, 530.0,
        "en-gb": "Kiruna", "sv-se": "Kiruna"),
    loc!("london_united_kingdom", Tz::Europe__London, 51.5074, -0.1278, 11.0,
        "en-gb": "London", "sv-se": "London"),
    loc!("paris_france", Tz::Europe__Paris, 48.8566, 2.3522, 35.0,
        "en-gb": "Paris", "sv-se": "Paris"),
    loc!("reykjavik_iceland", Tz::Atlantic__Reykjavik, 64.1466, -21.9426, 15.0,
        "en-gb": "Reykjavík", "sv-se": "Reykjavik"),
    loc!("longyearbyen_svalbard", Tz::Arctic__Longyearbyen, 78.2232, 15.6267, 2.0,
        "en-gb": "Longyearbyen", "sv-se": "Longyearbyen"),
    loc!("montreal_canada", Tz::America__Montreal, 45.5019, -73.5881, 213.0,
        "en-gb": "Montreal", "sv-se": "Montréal"),
    loc!("new_york_usa", Tz::America__New_York, 40.7128, -74.0060, 10.0,
        "en-gb": "New York", "sv-se": "New York"),
    loc!("death_valley_usa", Tz::America__Los_Angeles, 36.2461, -116.8172, -57.0,
        "en-gb": "Death Valley", "sv-se": "Döda dalen"),
    loc!("ilulissat_greenland", Tz::America__Nuuk, 69.2198, -51.0986, 11.0,
        "en-gb": "Ilulissat", "sv-se": "Ilulissat"),
    loc!("baku_azerbaijan", Tz::Asia__Baku, 40.4093, 49.8934, -22.0,
        "en-gb": "Baku", "sv-se": "Baku"),
    loc!("nairobi_kenya", Tz::Africa__Nairobi, -1.2921, 36.8219, 1795.0,
        "en-gb": "Nairobi", "sv-se": "Nairobi"),
    loc!("singapore_singapore", Tz::Asia__Singapore, 1.3521, 103.8198, 15.0,
        "en-gb": "Singapore", "sv-se": "Singapore"),
    loc!("tokyo_japan", Tz::Asia__Tokyo, 35.6762, 139.6503, 40.0,
        "en-gb": "Tokyo", "sv-se": "Tokyo"),
    loc!("sydney_australia", Tz::Australia__Sydney, -33.8688, 151.2093, 58.0,
        "en-gb": "Sydney", "sv-se": "Sydney"),
    loc!("ushuaia_argentina", Tz::America__Argentina__Ushuaia, -54.8019, -68.3030, 23.0,
        "en-gb": "Ushuaia", "sv-se": "Ushuaia"),
    loc!("mcmurdo_station_antarctica", Tz::Antarctica__McMurdo, -77.7335, 166.6670, 10.0,
        "en-gb": "McMurdo Station", "sv-se": "McMurdo-stationen"),
];

static BY_ID: Lazy<HashMap<&'static str, &'static Location>> =
    Lazy::new(|| REGISTRY.iter().map(|location| (location.id, location)).collect());

/// All registry entries, in display order.
pub fn all() -> &'static [Location] {
    REGISTRY
}

/// Look up a location by id.
pub fn get(id: &str) -> Option<&'static Location> {
    BY_ID.get(id).copied()
}

/// Look up a location by id, treating a miss as a fatal data-integrity
/// error.
pub fn require(id: &str) -> Result<&'static Location> {
    get(id).ok_or_else(|| anyhow!("unknown location id {id:?} in the location registry"))
}

/// Find a location by its display name in a language.
pub fn find_by_name(name: &str, language: &str) -> Option<&'static Location> {
    REGISTRY
        .iter()
        .find(|location| location.name(language) == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_resolvable() {
        let mut seen = std::collections::HashSet::new();
        for location in all() {
            assert!(seen.insert(location.id), "duplicate id {}", location.id);
            assert_eq!(require(location.id).unwrap().id, location.id);
        }
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        assert!(require("atlantis_lost").is_err());
        assert!(get("atlantis_lost").is_none());
    }

    #[test]
    fn test_coordinates_in_range() {
        for location in all() {
            assert!((-90.0..=90.0).contains(&location.latitude), "{}", location.id);
            assert!(
                (-180.0..=180.0).contains(&location.longitude),
                "{}",
                location.id
            );
        }
    }

    #[test]
    fn test_name_language_fallback() {
        let gothenburg = require("gothenburg_sweden").unwrap();
        assert_eq!(gothenburg.name("sv-se"), "Göteborg");
        assert_eq!(gothenburg.name("en-gb"), "Gothenburg");
        // Unknown language falls back to the default.
        assert_eq!(gothenburg.name("fr-fr"), "Gothenburg");
    }

    #[test]
    fn test_find_by_name() {
        let by_swedish = find_by_name("Göteborg", "sv-se").unwrap();
        assert_eq!(by_swedish.id, "gothenburg_sweden");
        assert!(find_by_name("Göteborg", "en-gb").is_none());
    }
}
