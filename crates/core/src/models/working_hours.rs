use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening hours for a single weekday.
///
/// `start` and `end` carry the wall-clock `HH:MM` strings exactly as the
/// provider-profile API serves them. They are kept as strings on purpose:
/// a malformed value must degrade to an empty slot list when slots are
/// generated, not fail deserialization of the whole profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub start: String,
    pub end: String,
    pub enabled: bool,
}

impl DayHours {
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            enabled: true,
        }
    }

    pub fn closed() -> Self {
        Self {
            start: "00:00".to_string(),
            end: "00:00".to_string(),
            enabled: false,
        }
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self::closed()
    }
}

/// A provider's weekly working-hours template.
///
/// Each field mirrors one weekday entry of the working-hours object on the
/// provider profile. A day missing from the wire payload deserializes as
/// closed, so it contributes no slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default)]
    pub monday: DayHours,
    #[serde(default)]
    pub tuesday: DayHours,
    #[serde(default)]
    pub wednesday: DayHours,
    #[serde(default)]
    pub thursday: DayHours,
    #[serde(default)]
    pub friday: DayHours,
    #[serde(default)]
    pub saturday: DayHours,
    #[serde(default)]
    pub sunday: DayHours,
}

impl WorkingHours {
    /// Returns the entry for the given weekday.
    pub fn day(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

impl Default for WorkingHours {
    /// The stock schedule every provider starts with: weekdays 9-17,
    /// Saturday 10-14, Sunday closed.
    fn default() -> Self {
        Self {
            monday: DayHours::open("09:00", "17:00"),
            tuesday: DayHours::open("09:00", "17:00"),
            wednesday: DayHours::open("09:00", "17:00"),
            thursday: DayHours::open("09:00", "17:00"),
            friday: DayHours::open("09:00", "17:00"),
            saturday: DayHours::open("10:00", "14:00"),
            sunday: DayHours::closed(),
        }
    }
}
