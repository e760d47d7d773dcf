//! Booking Wizard Core Library
//!
//! Appointment-booking wizard for a medical practice: pick a service, pick a
//! slot, enter patient details, confirm. Everything runs in memory.
//!
//! # Architecture
//!
//! ```text
//!   ServiceCatalog          ScheduleGenerator ◄── AvailabilityPolicy
//!         │                        │                (simulated)
//!         ▼                        ▼
//!   ┌───────────┐  continue  ┌───────────┐  continue  ┌──────┐  submit  ┌──────────────┐
//!   │ services  │ ─────────► │ datetime  │ ─────────► │ info │ ───────► │ confirmation │
//!   └───────────┘ ◄───────── └───────────┘ ◄───────── └──────┘          └──────┬───────┘
//!         ▲           back                    back                            │
//!         └──────────────────────── new booking ──────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **The booking record only grows forward.** Going back never drops a choice;
//! only picking a different day drops the chosen time, and only "new booking"
//! clears everything.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Service, DaySchedule, PatientInfo, BookingData, ...)
//! - [`catalog`]: Service catalog with fuzzy search
//! - [`schedule`]: Week generation, availability policies, week navigation
//! - [`wizard`]: Booking flow state machine and patient form validation
//! - [`export`]: Printable confirmation summary
//! - [`config`]: Opening hours and simulation settings

pub mod catalog;
pub mod config;
pub mod export;
pub mod logging;
pub mod models;
pub mod schedule;
pub mod wizard;

// Re-export commonly used types
pub use catalog::ServiceCatalog;
pub use config::{ConfigError, ScheduleConfig, WizardConfig};
pub use export::ConfirmationSummary;
pub use models::{
    BookingData, BookingStep, ConfirmedBooking, DaySchedule, PatientField, PatientInfo,
    PracticeInfo, Service, StepProgress, StepState, TimeSlot,
};
pub use schedule::{
    AlwaysAvailable, AvailabilityPolicy, ScheduleGenerator, SimulatedAvailability, WeekNavigator,
};
pub use wizard::{BookingFlow, FieldErrors, FlowError, FlowResult, PatientForm};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use tracing::info;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum WizardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FlowError> for WizardError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::WrongStep { .. }
            | FlowError::InvalidTransition { .. }
            | FlowError::Incomplete(..) => WizardError::InvalidStep(e.to_string()),
            FlowError::UnknownService(_)
            | FlowError::DateNotDisplayed(_)
            | FlowError::DateInPast(_)
            | FlowError::NoDateSelected => WizardError::InvalidInput(e.to_string()),
            FlowError::SlotUnavailable { .. } => WizardError::Unavailable(e.to_string()),
            FlowError::Validation(_) => WizardError::Validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for WizardError {
    fn from(e: ConfigError) -> Self {
        WizardError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(e: serde_json::Error) -> Self {
        WizardError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for WizardError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        WizardError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Install the default tracing subscriber.
#[uniffi::export]
pub fn init_logging() -> bool {
    logging::init()
}

/// Open a wizard with environment configuration and simulated availability.
#[uniffi::export]
pub fn open_wizard() -> Arc<BookingWizard> {
    let config = WizardConfig::from_env();
    let flow = BookingFlow::new(&config, ServiceCatalog::default());
    info!("Booking wizard opened");
    BookingWizard::wrap(flow)
}

/// Open a wizard from a JSON configuration document.
#[uniffi::export]
pub fn open_wizard_with_config(config_json: String) -> Result<Arc<BookingWizard>, WizardError> {
    let config = WizardConfig::from_json_str(&config_json)?;
    let flow = BookingFlow::new(&config, ServiceCatalog::default());
    info!("Booking wizard opened with custom configuration");
    Ok(BookingWizard::wrap(flow))
}

/// Open a wizard whose availability draws are reproducible (for demos and UI tests).
#[uniffi::export]
pub fn open_wizard_seeded(seed: u64) -> Arc<BookingWizard> {
    let config = WizardConfig::default();
    let policy = SimulatedAvailability::seeded(&config.schedule, seed);
    let generator = ScheduleGenerator::new(config.schedule, Box::new(policy));
    let flow = BookingFlow::with_generator(
        ServiceCatalog::default(),
        generator,
        Local::now().date_naive(),
    );
    BookingWizard::wrap(flow)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe wizard wrapper for FFI.
#[derive(uniffi::Object)]
pub struct BookingWizard {
    flow: Arc<Mutex<BookingFlow>>,
    practice: PracticeInfo,
}

impl BookingWizard {
    fn wrap(flow: BookingFlow) -> Arc<Self> {
        Arc::new(Self {
            flow: Arc::new(Mutex::new(flow)),
            practice: PracticeInfo::default(),
        })
    }
}

#[uniffi::export]
impl BookingWizard {
    // =========================================================================
    // Navigation
    // =========================================================================

    /// Current step name ("services", "datetime", "info", "confirmation").
    pub fn current_step(&self) -> Result<String, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow.step().to_string())
    }

    /// Progress indicator entries.
    pub fn progress(&self) -> Result<Vec<FfiStepProgress>, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow.progress().into_iter().map(|p| p.into()).collect())
    }

    /// "Continue". Returns the new step name.
    pub fn advance(&self) -> Result<String, WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.advance()?.to_string())
    }

    /// "Back". Returns the new step name.
    pub fn go_back(&self) -> Result<String, WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.go_back()?.to_string())
    }

    /// Start over after a confirmation.
    pub fn start_new_booking(&self) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.start_new_booking()?)
    }

    // =========================================================================
    // Services
    // =========================================================================

    pub fn services(&self) -> Result<Vec<FfiService>, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow.catalog().services().iter().cloned().map(|s| s.into()).collect())
    }

    /// Search services by name/description.
    pub fn search_services(&self, query: String, limit: u32) -> Result<Vec<FfiService>, WizardError> {
        let flow = self.flow.lock()?;
        let matches = flow.catalog().search(&query, limit as usize);
        Ok(matches.into_iter().map(|m| m.service.into()).collect())
    }

    pub fn select_service(&self, service_id: String) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        flow.select_service(&service_id)?;
        Ok(())
    }

    // =========================================================================
    // Date and time
    // =========================================================================

    /// The displayed week.
    pub fn week_schedule(&self) -> Result<Vec<FfiDaySchedule>, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow.week().iter().cloned().map(|d| d.into()).collect())
    }

    pub fn can_go_previous_week(&self) -> Result<bool, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow.can_go_previous_week())
    }

    pub fn next_week(&self) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.next_week()?)
    }

    /// Returns whether the view moved.
    pub fn previous_week(&self) -> Result<bool, WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.previous_week()?)
    }

    /// Pick a day (`YYYY-MM-DD`).
    pub fn select_date(&self, date: String) -> Result<(), WizardError> {
        let date = parse_date(&date)?;
        let mut flow = self.flow.lock()?;
        Ok(flow.select_date(date)?)
    }

    /// Pick a slot (`YYYY-MM-DD`, `HH:MM`).
    pub fn select_slot(&self, date: String, time: String) -> Result<(), WizardError> {
        let date = parse_date(&date)?;
        let mut flow = self.flow.lock()?;
        Ok(flow.select_slot(date, &time)?)
    }

    // =========================================================================
    // Patient information
    // =========================================================================

    /// Edit one form field by its form name (e.g. "firstName").
    pub fn set_patient_field(&self, field: String, value: String) -> Result<(), WizardError> {
        let field = PatientField::parse(&field)
            .ok_or_else(|| WizardError::InvalidInput(format!("Unknown field: {}", field)))?;
        let mut flow = self.flow.lock()?;
        Ok(flow.set_patient_field(field, &value)?)
    }

    pub fn set_new_patient(&self, is_new_patient: bool) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.set_new_patient(is_new_patient)?)
    }

    /// Submit the current form.
    pub fn submit_form(&self) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.submit_patient_info()?)
    }

    /// Replace the form with `info` and submit it.
    pub fn submit_patient_info(&self, info: FfiPatientInfo) -> Result<(), WizardError> {
        let mut flow = self.flow.lock()?;
        Ok(flow.submit_patient(info.into())?)
    }

    // =========================================================================
    // Read-out
    // =========================================================================

    /// Everything a screen needs to render.
    pub fn snapshot(&self) -> Result<FfiBookingSnapshot, WizardError> {
        let flow = self.flow.lock()?;
        let booking = flow.booking();
        let form = flow.form();

        Ok(FfiBookingSnapshot {
            step: flow.step().to_string(),
            service: booking.service.clone().map(|s| s.into()),
            date: booking.date.map(format_date),
            time: booking.time.clone(),
            patient: booking.patient_info.clone().map(|p| p.into()),
            form: form.values().clone().into(),
            field_errors: form
                .errors()
                .iter()
                .map(|(field, message)| FfiFieldError {
                    field: field.as_str().to_string(),
                    message: message.to_string(),
                })
                .collect(),
        })
    }

    /// Printable confirmation, once confirmed.
    pub fn confirmation_text(&self) -> Result<Option<String>, WizardError> {
        let flow = self.flow.lock()?;
        Ok(flow
            .confirmed()
            .map(|booking| ConfirmationSummary::new(&booking, &self.practice).to_text()))
    }

    /// Confirmation summary as JSON, once confirmed.
    pub fn confirmation_json(&self) -> Result<Option<String>, WizardError> {
        let flow = self.flow.lock()?;
        match flow.confirmed() {
            Some(booking) => Ok(Some(ConfirmationSummary::new(&booking, &self.practice).to_json()?)),
            None => Ok(None),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, WizardError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| WizardError::InvalidInput(format!("Invalid date {:?}: {}", raw, e)))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe service.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub image: String,
}

impl From<Service> for FfiService {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            duration_minutes: service.duration_minutes,
            image: service.image,
        }
    }
}

/// FFI-safe time slot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTimeSlot {
    pub time: String,
    pub available: bool,
}

/// FFI-safe day column.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDaySchedule {
    pub date: String,
    pub day_name: String,
    pub day_number: u32,
    pub month: String,
    pub slots: Vec<FfiTimeSlot>,
}

impl From<DaySchedule> for FfiDaySchedule {
    fn from(day: DaySchedule) -> Self {
        Self {
            date: format_date(day.date),
            day_name: day.day_name,
            day_number: day.day_number,
            month: day.month,
            slots: day
                .slots
                .into_iter()
                .map(|slot| FfiTimeSlot {
                    time: slot.time,
                    available: slot.available,
                })
                .collect(),
        }
    }
}

/// FFI-safe patient details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub is_new_patient: bool,
    pub notes: String,
}

impl From<PatientInfo> for FfiPatientInfo {
    fn from(info: PatientInfo) -> Self {
        Self {
            first_name: info.first_name,
            last_name: info.last_name,
            email: info.email,
            phone: info.phone,
            birth_date: info.birth_date,
            is_new_patient: info.is_new_patient,
            notes: info.notes,
        }
    }
}

impl From<FfiPatientInfo> for PatientInfo {
    fn from(info: FfiPatientInfo) -> Self {
        PatientInfo {
            first_name: info.first_name,
            last_name: info.last_name,
            email: info.email,
            phone: info.phone,
            birth_date: info.birth_date,
            is_new_patient: info.is_new_patient,
            notes: info.notes,
        }
    }
}

/// FFI-safe field error.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}

/// FFI-safe progress indicator entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStepProgress {
    pub step: String,
    pub number: u32,
    pub label: String,
    pub state: String,
}

impl From<StepProgress> for FfiStepProgress {
    fn from(progress: StepProgress) -> Self {
        Self {
            step: progress.step.to_string(),
            number: progress.number,
            label: progress.label,
            state: match progress.state {
                StepState::Completed => "completed".to_string(),
                StepState::Active => "active".to_string(),
                StepState::Pending => "pending".to_string(),
            },
        }
    }
}

/// FFI-safe view of the flow.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookingSnapshot {
    pub step: String,
    pub service: Option<FfiService>,
    pub date: Option<String>,
    pub time: Option<String>,
    /// Submitted patient details (set on confirmation)
    pub patient: Option<FfiPatientInfo>,
    /// Values currently typed in the form
    pub form: FfiPatientInfo,
    pub field_errors: Vec<FfiFieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_to_info(wizard: &BookingWizard) -> (String, String) {
        wizard.select_service("consultation".into()).unwrap();
        wizard.advance().unwrap();

        // Find a bookable slot, moving forward if this week is exhausted
        for _ in 0..8 {
            let week = wizard.week_schedule().unwrap();
            if let Some((date, time)) = week.iter().find_map(|day| {
                day.slots
                    .iter()
                    .find(|slot| slot.available)
                    .map(|slot| (day.date.clone(), slot.time.clone()))
            }) {
                wizard.select_slot(date.clone(), time.clone()).unwrap();
                wizard.advance().unwrap();
                return (date, time);
            }
            wizard.next_week().unwrap();
        }
        panic!("no available slot in eight weeks");
    }

    #[test]
    fn test_ffi_happy_path() {
        let wizard = open_wizard_seeded(11);
        assert_eq!(wizard.current_step().unwrap(), "services");
        assert_eq!(wizard.services().unwrap().len(), 13);

        let (date, time) = fill_to_info(&wizard);
        assert_eq!(wizard.current_step().unwrap(), "info");

        wizard
            .submit_patient_info(FfiPatientInfo {
                first_name: "Jean".into(),
                last_name: "Dupont".into(),
                email: "jean@example.fr".into(),
                phone: "0612345678".into(),
                birth_date: "1990-01-01".into(),
                is_new_patient: false,
                notes: String::new(),
            })
            .unwrap();

        let snapshot = wizard.snapshot().unwrap();
        assert_eq!(snapshot.step, "confirmation");
        assert_eq!(snapshot.date.as_deref(), Some(date.as_str()));
        assert_eq!(snapshot.time.as_deref(), Some(time.as_str()));
        assert_eq!(snapshot.patient.unwrap().last_name, "Dupont");

        let text = wizard.confirmation_text().unwrap().unwrap();
        assert!(text.contains("Consultation"));
        assert!(wizard.confirmation_json().unwrap().is_some());
    }

    #[test]
    fn test_ffi_field_errors() {
        let wizard = open_wizard_seeded(5);
        fill_to_info(&wizard);

        wizard.set_patient_field("firstName".into(), "Jean".into()).unwrap();
        let err = wizard.submit_form().unwrap_err();
        assert!(matches!(err, WizardError::Validation(_)));

        let snapshot = wizard.snapshot().unwrap();
        assert_eq!(snapshot.step, "info");
        assert_eq!(snapshot.form.first_name, "Jean");
        assert_eq!(snapshot.field_errors.len(), 4);
        assert!(snapshot.field_errors.iter().all(|e| e.field != "firstName"));
    }

    #[test]
    fn test_ffi_rejects_bad_input() {
        let wizard = open_wizard_seeded(1);
        assert!(matches!(
            wizard.select_service("unknown".into()),
            Err(WizardError::InvalidInput(_))
        ));
        assert!(matches!(
            wizard.set_patient_field("age".into(), "30".into()),
            Err(WizardError::InvalidInput(_))
        ));
        assert!(matches!(wizard.advance(), Err(WizardError::InvalidStep(_))));
        assert!(matches!(
            wizard.select_date("17/10/2026".into()),
            Err(WizardError::InvalidInput(_))
        ));
        assert!(wizard.confirmation_text().unwrap().is_none());
    }

    #[test]
    fn test_ffi_config() {
        assert!(open_wizard_with_config(r#"{"schedule": {"slot_minutes": 15}}"#.into()).is_ok());
        assert!(matches!(
            open_wizard_with_config(r#"{"schedule": {"slot_minutes": 0}}"#.into()),
            Err(WizardError::Config(_))
        ));
    }
}
