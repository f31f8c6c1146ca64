//! Pure greeting decision.
//!
//! Nothing here performs I/O; the timestamp and name arrive from effects
//! and the resulting text is handed back to an effect.

use chrono::{NaiveDateTime, Timelike};

/// Salutation used when the hour falls outside every [`DayPeriod`].
///
/// Clock hours run from 0 to 23, so a timestamp never reaches it; it stays
/// as the catch-all for periods added later.
pub const DEFAULT_SALUTATION: &str = "Hello";

/// The part of the day a timestamp falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Hours 0 to 11.
    Morning,
    /// Hours 12 to 17.
    Afternoon,
    /// Hours 18 to 23.
    Evening,
}

impl DayPeriod {
    /// Classifies an hour of the day. Thresholds are tested in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferred_io::greeting::DayPeriod;
    ///
    /// assert_eq!(DayPeriod::from_hour(11), Some(DayPeriod::Morning));
    /// assert_eq!(DayPeriod::from_hour(12), Some(DayPeriod::Afternoon));
    /// assert_eq!(DayPeriod::from_hour(18), Some(DayPeriod::Evening));
    /// assert_eq!(DayPeriod::from_hour(24), None);
    /// ```
    pub const fn from_hour(hour: u32) -> Option<Self> {
        if hour < 12 {
            Some(Self::Morning)
        } else if hour < 18 {
            Some(Self::Afternoon)
        } else if hour < 24 {
            Some(Self::Evening)
        } else {
            None
        }
    }

    /// Returns the salutation for this period.
    pub const fn salutation(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }
}

/// Picks the salutation for `now`.
pub fn salutation(now: NaiveDateTime) -> &'static str {
    DayPeriod::from_hour(now.hour()).map_or(DEFAULT_SALUTATION, DayPeriod::salutation)
}

/// Builds the greeting for `name` at time `now`.
///
/// A blank name yields the salutation followed by a period; otherwise the
/// trimmed name follows the salutation.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use deferred_io::greeting::greet;
///
/// let morning = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|date| date.and_hms_opt(7, 0, 0))
///     .unwrap();
///
/// assert_eq!(greet(morning, "  Ada "), "Good morning, Ada");
/// assert_eq!(greet(morning, "   "), "Good morning.");
/// ```
pub fn greet(now: NaiveDateTime, name: &str) -> String {
    let salutation = salutation(now);
    let name = name.trim();

    if name.is_empty() {
        format!("{salutation}.")
    } else {
        format!("{salutation}, {name}")
    }
}
