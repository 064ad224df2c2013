//! # suncurve
//!
//! Sunrise and sunset clock-times for arbitrary locations and dates,
//! organized into quarter-aligned series suitable for charting.
//!
//! ## Architecture
//!
//! - [`solar`]: the sunrise-equation solver. Pure: an epoch instant,
//!   timezone, coordinates, and elevation in; a [`SunTime`] out, either a
//!   sunrise/sunset pair in seconds-of-day or the polar night/day sentinel.
//! - [`timefmt`]: seconds-of-day display formatting, with and without
//!   folding sunset-past-midnight "rollover" values back into a 24h clock.
//! - [`quarter`]: Monday-aligned calendar-quarter bounds, quarter stepping
//!   and string round-tripping, and day-sequence enumeration.
//! - [`series`]: maps a quarter's days through the solver for a set of
//!   locations, memoized per (location, quarter) for the process lifetime.
//! - [`locations`]: the static registry of selectable places.
//! - [`clock`]: the now/today source, overridable in tests.
//!
//! Everything is synchronous and does no I/O; timezone conversion comes
//! from chrono-tz. Presentation (charts, locale strings, persistence) is a
//! consumer of this crate, not part of it.

pub mod clock;
pub mod locations;
pub mod quarter;
pub mod series;
pub mod solar;
pub mod timefmt;

pub use locations::Location;
pub use quarter::{DateRange, Quarter};
pub use series::{SunTimeCache, SunTimeData, SunTimeSeries};
pub use solar::SunTime;
