//! Clock abstraction for "now" and "today".
//!
//! The quarter logic needs the current date (to select the current quarter
//! and to mark today's index in a date range). This module provides a
//! global clock that defaults to system time and can be replaced with a
//! fixed clock in tests via the `testing-support` feature.

use chrono::{DateTime, Local, NaiveDate};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global clock instance, defaults to the system clock.
static CLOCK: OnceCell<Arc<dyn Clock>> = OnceCell::new();

/// Trait for abstracting the wall clock.
pub trait Clock: Send + Sync {
    /// Get the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// Real clock backed by the system time.
struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to one instant, for deterministic tests.
#[cfg(any(test, feature = "testing-support"))]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(any(test, feature = "testing-support"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Install a clock override. The first install wins for the rest of the
/// process; later calls are ignored.
#[cfg(any(test, feature = "testing-support"))]
pub fn install(clock: Arc<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

/// Get the current local time from the global clock.
pub fn now() -> DateTime<Local> {
    CLOCK.get_or_init(|| Arc::new(SystemClock)).now()
}

/// Today's calendar date in the local timezone.
pub fn today() -> NaiveDate {
    now().date_naive()
}
