//! Week schedule models.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Format used for slot labels.
pub const SLOT_LABEL_FORMAT: &str = "%H:%M";

/// A bookable start time on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// Start time label ("HH:MM")
    pub time: String,
    /// Whether the slot can be picked
    pub available: bool,
}

impl TimeSlot {
    /// Create a slot from a time of day.
    pub fn new(start: NaiveTime, available: bool) -> Self {
        Self {
            time: start.format(SLOT_LABEL_FORMAT).to_string(),
            available,
        }
    }

    /// Parse the label back into a time of day.
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, SLOT_LABEL_FORMAT).ok()
    }
}

/// One column of the week view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySchedule {
    /// Calendar date
    pub date: NaiveDate,
    /// Localized weekday name (e.g., "Lundi")
    pub day_name: String,
    /// Day of month
    pub day_number: u32,
    /// Localized short month name (e.g., "Oct.")
    pub month: String,
    /// Slots in chronological order
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Look up a slot by its label.
    pub fn slot(&self, time: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.time == time)
    }

    /// Check whether the given label exists and is available.
    pub fn is_slot_available(&self, time: &str) -> bool {
        self.slot(time).map(|slot| slot.available).unwrap_or(false)
    }

    /// Number of available slots ("Aucune disponibilité" when zero).
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.available).count()
    }

    /// Labels of the available slots.
    pub fn available_times(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.available)
            .map(|slot| slot.time.as_str())
            .collect()
    }

    /// Mark every slot of the day unavailable.
    pub fn close(&mut self) {
        for slot in &mut self.slots {
            slot.available = false;
        }
    }
}
