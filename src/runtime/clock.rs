//! Deferred access to the local clock.

use chrono::{Local, NaiveDateTime};

use crate::effect::IO;

/// Source of the current local time.
pub trait Clock {
    /// Reads the current local date and time when forced.
    fn now(&self) -> IO<NaiveDateTime>;
}

/// Clock backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> IO<NaiveDateTime> {
        IO::new(|| {
            let now = Local::now().naive_local();
            tracing::debug!(%now, "read local time");
            now
        })
    }
}

/// Clock that always reports the same instant.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use deferred_io::runtime::{Clock, FixedClock};
///
/// let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|date| date.and_hms_opt(7, 0, 0))
///     .unwrap();
/// let clock = FixedClock::new(instant);
///
/// assert_eq!(clock.now().run_unsafe(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock stuck at `instant`.
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> IO<NaiveDateTime> {
        IO::pure(self.instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rstest::rstest;

    #[rstest]
    fn fixed_clock_reports_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(15, 30, 0))
            .expect("valid timestamp");
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now().run_unsafe().hour(), 15);
    }

    #[rstest]
    fn system_clock_is_deferred_and_memoized() {
        let now = SystemClock.now();
        assert!(!now.is_forced());

        let first = *now.force();
        let second = *now.force();
        assert_eq!(first, second);
    }
}
