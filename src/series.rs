//! Sun-time series assembly with per-(location, quarter) memoization.
//!
//! Maps a quarter's day sequence through the solar calculation for a set
//! of locations and shapes the result for charting. Computed per-location
//! arrays are cached for the life of the process: a session only ever
//! visits a handful of quarters and locations, and recomputation when the
//! selected-location set changes is the common case worth avoiding. The
//! cache is purely an optimization; results are identical cold or warm.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::TimeZone;
use log::debug;
use serde::Serialize;

use crate::locations::Location;
use crate::quarter::{DateRange, Quarter};
use crate::solar::SunTime;

/// One location's sun times, index-aligned with the date range it was
/// computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunTimeSeries {
    pub location: Location,
    pub sun_times: Vec<SunTime>,
}

/// Chart-ready series data for one quarter and a set of locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunTimeData {
    /// Today's index into `dates`, if today is within the range.
    pub index_of_today: Option<usize>,
    /// 0-based numeric chart axis, one entry per date.
    pub days_since_first_date: Vec<i64>,
    pub dates: Vec<chrono::NaiveDate>,
    /// One series per requested location, in request order.
    pub series: Vec<SunTimeSeries>,
}

/// Process-lifetime memoization of date ranges and per-location sun times.
///
/// Single-threaded; a host that shares one across threads wraps it in a
/// mutex.
#[derive(Debug, Default)]
pub struct SunTimeCache {
    date_ranges: HashMap<String, DateRange>,
    sun_times: HashMap<String, Vec<SunTime>>,
}

impl SunTimeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble series data for `quarter` and `locations`.
    ///
    /// An empty location list yields an empty series set, not an error.
    pub fn get(&mut self, quarter: &Quarter, locations: &[Location]) -> Result<SunTimeData> {
        let range = self.date_range(quarter).clone();
        let mut series = Vec::with_capacity(locations.len());
        for &location in locations {
            let sun_times = self
                .sun_times(quarter, &range, &location)
                .with_context(|| format!("computing sun times for {}", location.id))?
                .clone();
            series.push(SunTimeSeries {
                location,
                sun_times,
            });
        }
        Ok(SunTimeData {
            index_of_today: range.index_of_today,
            days_since_first_date: range.days_since_first_date,
            dates: range.dates,
            series,
        })
    }

    fn date_range(&mut self, quarter: &Quarter) -> &DateRange {
        self.date_ranges
            .entry(quarter.to_string())
            .or_insert_with(|| quarter.days())
    }

    fn sun_times(
        &mut self,
        quarter: &Quarter,
        range: &DateRange,
        location: &Location,
    ) -> Result<&Vec<SunTime>> {
        let key = format!("{}_{}", location.id, quarter);
        if !self.sun_times.contains_key(&key) {
            debug!("cache miss, computing {key}");
            let mut computed = Vec::with_capacity(range.dates.len());
            for date in &range.dates {
                // Anchor at noon in the location's timezone; noon never
                // lands in a DST gap.
                let noon = location
                    .timezone
                    .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
                    .single()
                    .with_context(|| {
                        format!("ambiguous local noon on {date} in {}", location.timezone)
                    })?;
                computed.push(SunTime::from_timestamp_and_location(
                    noon.timestamp(),
                    location.timezone,
                    location.latitude,
                    location.longitude,
                    location.elevation,
                ));
            }
            self.sun_times.insert(key.clone(), computed);
        }
        Ok(&self.sun_times[&key])
    }
}
