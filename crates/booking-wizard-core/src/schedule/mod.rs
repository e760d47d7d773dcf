//! Week schedule generation.
//!
//! Pipeline: reference date → Monday of its week → Mon..Fri → slot labels
//! from opening to closing → availability policy.

mod availability;
mod locale;
mod navigation;

pub use availability::*;
pub use locale::*;
pub use navigation::*;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::models::{DaySchedule, TimeSlot};

/// Days shown per week (Monday to Friday).
pub const DAYS_PER_WEEK: usize = 5;

/// Monday of the week containing `date`. Sunday belongs to the week before.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Builds the business-week view.
pub struct ScheduleGenerator {
    config: ScheduleConfig,
    policy: Box<dyn AvailabilityPolicy>,
}

impl ScheduleGenerator {
    /// Create a generator with an explicit availability policy.
    pub fn new(config: ScheduleConfig, policy: Box<dyn AvailabilityPolicy>) -> Self {
        Self { config, policy }
    }

    /// Generator with the simulated, entropy-seeded policy.
    pub fn simulated(config: ScheduleConfig) -> Self {
        let policy = SimulatedAvailability::from_entropy(&config);
        Self::new(config, Box::new(policy))
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Slot start times for one day, opening and closing inclusive.
    pub fn slot_times(&self) -> Vec<NaiveTime> {
        let step = Duration::minutes(self.config.slot_minutes.max(1) as i64);
        let mut times = Vec::with_capacity(self.config.slots_per_day());
        let mut current = self.config.opening;

        while current <= self.config.closing {
            times.push(current);
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 || next <= current {
                break;
            }
            current = next;
        }

        times
    }

    /// Schedule for a single day. Availability is drawn anew on each call.
    pub fn day(&mut self, date: NaiveDate) -> DaySchedule {
        let slots = self
            .slot_times()
            .into_iter()
            .map(|start| TimeSlot::new(start, self.policy.is_available(date, start)))
            .collect();

        DaySchedule {
            date,
            day_name: weekday_name(date).to_string(),
            day_number: date.day(),
            month: month_name(date).to_string(),
            slots,
        }
    }

    /// Monday-to-Friday schedule of the week containing `reference`.
    pub fn week(&mut self, reference: NaiveDate) -> Vec<DaySchedule> {
        let monday = monday_of(reference);
        let days: Vec<DaySchedule> = (0..DAYS_PER_WEEK as i64)
            .map(|offset| self.day(monday + Duration::days(offset)))
            .collect();

        debug!(
            "Generated week of {} with {} available slots",
            monday,
            days.iter().map(DaySchedule::available_count).sum::<usize>()
        );
        days
    }
}
