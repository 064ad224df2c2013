//! Seconds-of-day display formatting.
//!
//! Sun times are carried as whole seconds since local midnight of the
//! queried day. A sunset past local midnight is represented as a value
//! above 86400 ("rollover", e.g. 25:11); these helpers format such values
//! either folded back into a 0–23 hour clock or left as-is.

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Format as "HH:MM", folding rollover values back into a 0–23 hour
/// display: anything above 24:00:00 has a full day subtracted first.
pub fn hours_minutes(seconds_of_day: i64) -> String {
    let folded = if seconds_of_day > SECONDS_PER_DAY {
        seconds_of_day - SECONDS_PER_DAY
    } else {
        seconds_of_day
    };
    format!("{:02}:{:02}", folded / 3600, folded % 3600 / 60)
}

/// Format as "HH:MM" without folding; the hour component may exceed 23
/// for rollover values (e.g. "25:11").
pub fn hours_minutes_no_rollover(seconds_of_day: i64) -> String {
    format!(
        "{:02}:{:02}",
        seconds_of_day / 3600,
        seconds_of_day % 3600 / 60
    )
}

/// Format as "HH:MM:SS" without folding.
pub fn hours_minutes_seconds(seconds_of_day: i64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds_of_day / 3600,
        seconds_of_day % 3600 / 60,
        seconds_of_day % 60
    )
}
