use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single one-hour bookable window on some date.
///
/// Times are wall-clock in the provider's timezone; slots only become
/// absolute instants once anchored to a date and timezone with
/// [`crate::availability::slot_bounds_utc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Builds the one-hour slot beginning at `start`.
    ///
    /// A slot starting at 23:00 wraps its end to 00:00.
    pub fn starting_at(start: NaiveTime) -> Self {
        let (end, _) = start.overflowing_add_signed(Duration::hours(1));
        Self { start, end }
    }

    /// 12-hour display label, e.g. `"9:00 AM - 10:00 AM"`, as rendered on
    /// the calendar pages.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p")
        )
    }

    /// True when this slot and `other` share any span of time.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }
}
