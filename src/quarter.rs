//! Calendar quarters with Monday-aligned charting bounds.
//!
//! A chart covers one calendar quarter, widened to whole weeks: the range
//! starts on the Monday on or before day 1 of the quarter and ends on the
//! first Monday of the following quarter. Quarters serialize as
//! `"{year}-{quarter}"` and malformed or out-of-range input recovers to
//! the current quarter instead of failing.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use log::warn;
use serde::Serialize;

use crate::clock;

/// One calendar quarter with its widened charting bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarter {
    year: i32,
    number: u32,
    first_day: NaiveDate,
    first_day_in_quarter: NaiveDate,
    last_day: NaiveDate,
    today: NaiveDate,
}

/// The enumerated day sequence of a quarter's bounds.
///
/// `dates` rises by exactly one calendar day per step;
/// `days_since_first_date` is the matching 0-based numeric chart axis;
/// `index_of_today` is today's position in `dates`, if today is in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub dates: Vec<NaiveDate>,
    pub days_since_first_date: Vec<i64>,
    pub index_of_today: Option<usize>,
}

impl Quarter {
    /// The quarter containing today.
    pub fn current() -> Self {
        Self::containing(clock::today())
    }

    /// Quarter `number` (1..=4) of `year`. An out-of-range number recovers
    /// to the current quarter.
    pub fn from_parts(year: i32, number: u32) -> Self {
        Self::build(year, number, clock::today())
    }

    /// Parse a `"{year}-{quarter}"` string, recovering to the current
    /// quarter on malformed input.
    pub fn parse(s: &str) -> Self {
        Self::parse_impl(s, clock::today())
    }

    /// Like [`Quarter::from_parts`] with an explicit "today", for
    /// deterministic tests.
    #[cfg(any(test, feature = "testing-support"))]
    pub fn from_parts_with_today(year: i32, number: u32, today: NaiveDate) -> Self {
        Self::build(year, number, today)
    }

    /// Like [`Quarter::parse`] with an explicit "today", for deterministic
    /// tests.
    #[cfg(any(test, feature = "testing-support"))]
    pub fn parse_with_today(s: &str, today: NaiveDate) -> Self {
        Self::parse_impl(s, today)
    }

    fn containing(today: NaiveDate) -> Self {
        Self::build(today.year(), today.month0() / 3 + 1, today)
    }

    fn build(year: i32, number: u32, today: NaiveDate) -> Self {
        if !(1..=4).contains(&number) {
            warn!("bad quarter number {number}, using the current quarter");
            return Self::containing(today);
        }
        let Some(first_day_in_quarter) = NaiveDate::from_ymd_opt(year, number * 3 - 2, 1) else {
            warn!("year {year} out of range, using the current quarter");
            return Self::containing(today);
        };
        let first_of_next_quarter = first_day_in_quarter
            .checked_add_months(Months::new(3))
            .expect("quarter start within the representable date range");
        Self {
            year,
            number,
            first_day: monday_on_or_before(first_day_in_quarter),
            first_day_in_quarter,
            last_day: monday_on_or_after(first_of_next_quarter),
            today,
        }
    }

    fn parse_impl(s: &str, today: NaiveDate) -> Self {
        let mut parts = s.split('-');
        if let (Some(year), Some(number), None) = (parts.next(), parts.next(), parts.next())
            && let (Ok(year), Ok(number)) = (year.parse::<i32>(), number.parse::<u32>())
        {
            return Self::build(year, number, today);
        }
        warn!("bad quarter representation {s:?}, using the current quarter");
        Self::containing(today)
    }

    /// The quarter three months earlier.
    pub fn previous(&self) -> Self {
        self.step(|d| d.checked_sub_months(Months::new(3)))
    }

    /// The quarter three months later.
    pub fn next(&self) -> Self {
        self.step(|d| d.checked_add_months(Months::new(3)))
    }

    fn step(&self, by: impl Fn(NaiveDate) -> Option<NaiveDate>) -> Self {
        // Step from the quarter's own first day (day 1 of its first month),
        // not the Monday-adjusted bound, then rebuild.
        let moved =
            by(self.first_day_in_quarter).expect("quarter within the representable date range");
        Self::build(moved.year(), moved.month0() / 3 + 1, self.today)
    }

    /// Walk `first_day..=last_day` one calendar day at a time.
    pub fn days(&self) -> DateRange {
        let mut dates = Vec::new();
        let mut index_of_today = None;
        let mut date = self.first_day;
        while date <= self.last_day {
            if date == self.today {
                index_of_today = Some(dates.len());
            }
            dates.push(date);
            date = date.succ_opt().expect("date within the representable range");
        }
        let days_since_first_date = (0..dates.len() as i64).collect();
        DateRange {
            dates,
            days_since_first_date,
            index_of_today,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Quarter number, always in 1..=4.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Monday on or before day 1 of the quarter.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// First Monday of the following quarter.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.number)
    }
}

fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

fn monday_on_or_after(date: NaiveDate) -> NaiveDate {
    date + Days::new(u64::from((7 - date.weekday().num_days_from_monday()) % 7))
}
