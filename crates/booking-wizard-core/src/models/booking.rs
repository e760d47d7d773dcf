//! Booking record and wizard step models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::patient::PatientInfo;
use super::service::Service;

/// Wizard step. Declared in flow order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    /// Choosing a service
    Services,
    /// Choosing a day and a slot
    #[serde(rename = "datetime")]
    DateTime,
    /// Entering patient details
    Info,
    /// Booking recorded, waiting for a new booking
    Confirmation,
}

/// Display state of a step in the progress indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// One entry of the progress indicator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepProgress {
    pub step: BookingStep,
    /// 1-based position
    pub number: u32,
    pub label: String,
    pub state: StepState,
}

impl BookingStep {
    /// All steps in order.
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Services,
        BookingStep::DateTime,
        BookingStep::Info,
        BookingStep::Confirmation,
    ];

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            BookingStep::Services => 0,
            BookingStep::DateTime => 1,
            BookingStep::Info => 2,
            BookingStep::Confirmation => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Services => "services",
            BookingStep::DateTime => "datetime",
            BookingStep::Info => "info",
            BookingStep::Confirmation => "confirmation",
        }
    }

    /// Indicator label.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Services => "Prestations",
            BookingStep::DateTime => "Date et heure",
            BookingStep::Info => "Informations",
            BookingStep::Confirmation => "Confirmation",
        }
    }

    /// The step a "continue" leads to, if any.
    pub fn next(&self) -> Option<BookingStep> {
        BookingStep::ALL.get(self.index() + 1).copied()
    }

    /// The step a "back" leads to. Confirmation has no way back.
    pub fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::DateTime => Some(BookingStep::Services),
            BookingStep::Info => Some(BookingStep::DateTime),
            BookingStep::Services | BookingStep::Confirmation => None,
        }
    }

    /// Progress indicator entries with `self` as the current step.
    pub fn progress(&self) -> Vec<StepProgress> {
        let current = self.index();
        BookingStep::ALL
            .iter()
            .map(|step| {
                let state = match step.index() {
                    i if i < current => StepState::Completed,
                    i if i == current => StepState::Active,
                    _ => StepState::Pending,
                };
                StepProgress {
                    step: *step,
                    number: step.index() as u32 + 1,
                    label: step.label().to_string(),
                    state,
                }
            })
            .collect()
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The accumulating booking record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingData {
    pub service: Option<Service>,
    pub date: Option<NaiveDate>,
    /// Slot label ("HH:MM")
    pub time: Option<String>,
    pub patient_info: Option<PatientInfo>,
}

impl BookingData {
    /// Empty record, as at the start of a booking.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Date and time both chosen.
    pub fn has_slot(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Non-optional view, present only once every field is filled.
    pub fn confirmed(&self) -> Option<ConfirmedBooking> {
        Some(ConfirmedBooking {
            service: self.service.clone()?,
            date: self.date?,
            time: self.time.clone()?,
            patient: self.patient_info.clone()?,
        })
    }
}

/// A fully populated booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedBooking {
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
    pub patient: PatientInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        assert!(BookingStep::Services < BookingStep::DateTime);
        assert!(BookingStep::Info < BookingStep::Confirmation);
        assert_eq!(BookingStep::Services.next(), Some(BookingStep::DateTime));
        assert_eq!(BookingStep::Confirmation.next(), None);
        assert_eq!(BookingStep::Info.previous(), Some(BookingStep::DateTime));
        assert_eq!(BookingStep::Confirmation.previous(), None);
    }

    #[test]
    fn test_progress() {
        let progress = BookingStep::Info.progress();
        assert_eq!(progress.len(), 4);
        assert_eq!(progress[0].state, StepState::Completed);
        assert_eq!(progress[1].state, StepState::Completed);
        assert_eq!(progress[2].state, StepState::Active);
        assert_eq!(progress[3].state, StepState::Pending);
        assert_eq!(progress[2].number, 3);
        assert_eq!(progress[2].label, "Informations");
    }

    #[test]
    fn test_step_serde_names() {
        let json = serde_json::to_string(&BookingStep::DateTime).unwrap();
        assert_eq!(json, "\"datetime\"");
        let step: BookingStep = serde_json::from_str("\"confirmation\"").unwrap();
        assert_eq!(step, BookingStep::Confirmation);
    }

    #[test]
    fn test_confirmed_requires_all_fields() {
        let mut booking = BookingData::new();
        assert!(booking.is_empty());
        assert!(booking.confirmed().is_none());

        booking.service = Some(Service::new("consultation", "Consultation", 15));
        booking.date = NaiveDate::from_ymd_opt(2026, 10, 19);
        booking.time = Some("09:30".into());
        assert!(booking.has_slot());
        assert!(booking.confirmed().is_none());

        booking.patient_info = Some(PatientInfo::new(
            "Jean",
            "Dupont",
            "jean@example.fr",
            "0612345678",
            "1990-01-01",
        ));
        let confirmed = booking.confirmed().unwrap();
        assert_eq!(confirmed.time, "09:30");
        assert_eq!(confirmed.service.id, "consultation");
    }
}
