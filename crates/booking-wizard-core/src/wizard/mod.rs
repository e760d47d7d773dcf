//! Booking flow state machine.
//!
//! Steps: services → datetime → info → confirmation
//!
//! Forward moves require the current step to be complete. Backward moves keep
//! every choice already made. Only "new booking" from the confirmation step
//! clears the record.

mod validation;

pub use validation::*;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::ServiceCatalog;
use crate::config::WizardConfig;
use crate::models::{
    BookingData, BookingStep, ConfirmedBooking, DaySchedule, PatientField, PatientInfo, Service,
    StepProgress,
};
use crate::schedule::{ScheduleGenerator, WeekNavigator};

/// Flow errors. The flow is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Operation requires step {expected}, current step is {actual}")]
    WrongStep {
        expected: BookingStep,
        actual: BookingStep,
    },

    #[error("Cannot go {direction} from step {step}")]
    InvalidTransition {
        step: BookingStep,
        direction: &'static str,
    },

    #[error("Step {0} is incomplete: {1}")]
    Incomplete(BookingStep, &'static str),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Date {0} is not in the displayed week")]
    DateNotDisplayed(NaiveDate),

    #[error("Date {0} is in the past")]
    DateInPast(NaiveDate),

    #[error("No date selected")]
    NoDateSelected,

    #[error("Slot {time} on {date} is not available")]
    SlotUnavailable { date: NaiveDate, time: String },

    #[error("Patient information is invalid: {0}")]
    Validation(FieldErrors),
}

pub type FlowResult<T> = Result<T, FlowError>;

/// The wizard controller. Owns the booking record and everything the four
/// screens display.
pub struct BookingFlow {
    step: BookingStep,
    booking: BookingData,
    form: PatientForm,
    catalog: ServiceCatalog,
    generator: ScheduleGenerator,
    navigator: WeekNavigator,
    week: Vec<DaySchedule>,
}

impl BookingFlow {
    /// Flow starting today with simulated availability.
    pub fn new(config: &WizardConfig, catalog: ServiceCatalog) -> Self {
        let generator = ScheduleGenerator::simulated(config.schedule.clone());
        Self::with_generator(catalog, generator, Local::now().date_naive())
    }

    /// Flow with an explicit generator and notion of "today".
    pub fn with_generator(
        catalog: ServiceCatalog,
        generator: ScheduleGenerator,
        today: NaiveDate,
    ) -> Self {
        let mut flow = Self {
            step: BookingStep::Services,
            booking: BookingData::new(),
            form: PatientForm::new(),
            catalog,
            generator,
            navigator: WeekNavigator::new(today),
            week: Vec::new(),
        };
        flow.refresh_week();
        flow
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn booking(&self) -> &BookingData {
        &self.booking
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// The week currently displayed by the date picker.
    pub fn week(&self) -> &[DaySchedule] {
        &self.week
    }

    pub fn navigator(&self) -> &WeekNavigator {
        &self.navigator
    }

    pub fn progress(&self) -> Vec<StepProgress> {
        self.step.progress()
    }

    /// The finalized booking, once on the confirmation step.
    pub fn confirmed(&self) -> Option<ConfirmedBooking> {
        if self.step != BookingStep::Confirmation {
            return None;
        }
        self.booking.confirmed()
    }

    // =========================================================================
    // Step transitions
    // =========================================================================

    /// "Continue". On the information step this submits the form.
    pub fn advance(&mut self) -> FlowResult<BookingStep> {
        match self.step {
            BookingStep::Services => {
                if self.booking.service.is_none() {
                    return Err(FlowError::Incomplete(self.step, "no service selected"));
                }
                self.refresh_week();
                self.move_to(BookingStep::DateTime);
            }
            BookingStep::DateTime => {
                if !self.booking.has_slot() {
                    return Err(FlowError::Incomplete(self.step, "no date and time selected"));
                }
                self.move_to(BookingStep::Info);
            }
            BookingStep::Info => self.submit_patient_info()?,
            BookingStep::Confirmation => {
                return Err(FlowError::InvalidTransition {
                    step: self.step,
                    direction: "forward",
                });
            }
        }
        Ok(self.step)
    }

    /// "Back". Keeps every selection.
    pub fn go_back(&mut self) -> FlowResult<BookingStep> {
        let previous = self.step.previous().ok_or(FlowError::InvalidTransition {
            step: self.step,
            direction: "back",
        })?;
        self.move_to(previous);
        Ok(self.step)
    }

    /// "New booking" from the confirmation screen.
    pub fn start_new_booking(&mut self) -> FlowResult<()> {
        self.require_step(BookingStep::Confirmation)?;
        self.booking = BookingData::new();
        self.form.clear();
        self.navigator.reset();
        self.refresh_week();
        self.move_to(BookingStep::Services);
        Ok(())
    }

    // =========================================================================
    // Services step
    // =========================================================================

    /// Pick a service. Moving on still takes an explicit [`advance`](Self::advance).
    pub fn select_service(&mut self, service_id: &str) -> FlowResult<&Service> {
        self.require_step(BookingStep::Services)?;
        let service = self
            .catalog
            .get(service_id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownService(service_id.to_string()))?;

        debug!("Service selected: {}", service.id);
        Ok(&*self.booking.service.insert(service))
    }

    // =========================================================================
    // Date/time step
    // =========================================================================

    /// Pick a day of the displayed week. A different day drops the chosen time.
    pub fn select_date(&mut self, date: NaiveDate) -> FlowResult<()> {
        self.require_step(BookingStep::DateTime)?;
        self.check_date(date)?;

        if self.booking.date != Some(date) {
            if let Some(time) = self.booking.time.take() {
                debug!("Day changed to {}, clearing time {}", date, time);
            }
            self.booking.date = Some(date);
        }
        Ok(())
    }

    /// Pick a time on the selected day.
    pub fn select_time(&mut self, time: &str) -> FlowResult<()> {
        self.require_step(BookingStep::DateTime)?;
        let date = self.booking.date.ok_or(FlowError::NoDateSelected)?;
        self.check_slot(date, time)?;

        debug!("Slot selected: {} {}", date, time);
        self.booking.time = Some(time.to_string());
        Ok(())
    }

    /// Pick a day and a time in one go, as clicking a slot does.
    pub fn select_slot(&mut self, date: NaiveDate, time: &str) -> FlowResult<()> {
        self.require_step(BookingStep::DateTime)?;
        self.check_date(date)?;
        self.check_slot(date, time)?;

        self.select_date(date)?;
        self.select_time(time)
    }

    pub fn can_go_previous_week(&self) -> bool {
        self.navigator.can_go_previous()
    }

    /// Show the next week. Availability is drawn anew.
    pub fn next_week(&mut self) -> FlowResult<()> {
        self.require_step(BookingStep::DateTime)?;
        self.navigator.next();
        self.refresh_week();
        Ok(())
    }

    /// Show the previous week, unless it starts before today.
    pub fn previous_week(&mut self) -> FlowResult<bool> {
        self.require_step(BookingStep::DateTime)?;
        if !self.navigator.previous() {
            debug!("Previous week blocked at {}", self.navigator.week_start());
            return Ok(false);
        }
        self.refresh_week();
        Ok(true)
    }

    // =========================================================================
    // Information step
    // =========================================================================

    pub fn set_patient_field(&mut self, field: PatientField, value: &str) -> FlowResult<()> {
        self.require_step(BookingStep::Info)?;
        self.form.set_field(field, value);
        Ok(())
    }

    pub fn set_new_patient(&mut self, is_new_patient: bool) -> FlowResult<()> {
        self.require_step(BookingStep::Info)?;
        self.form.set_new_patient(is_new_patient);
        Ok(())
    }

    /// Replace the whole form, then submit it.
    pub fn submit_patient(&mut self, info: PatientInfo) -> FlowResult<()> {
        self.require_step(BookingStep::Info)?;
        self.form.replace(info);
        self.submit_patient_info()
    }

    /// Validate the form and confirm the booking. Errors stay on the form.
    pub fn submit_patient_info(&mut self) -> FlowResult<()> {
        self.require_step(BookingStep::Info)?;
        if !self.booking.has_slot() || self.booking.service.is_none() {
            return Err(FlowError::Incomplete(self.step, "booking record is incomplete"));
        }

        match self.form.validate() {
            Ok(info) => {
                self.booking.patient_info = Some(info);
                self.move_to(BookingStep::Confirmation);
                Ok(())
            }
            Err(errors) => {
                info!("Patient form rejected: {} invalid field(s)", errors.len());
                Err(FlowError::Validation(errors))
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_step(&self, expected: BookingStep) -> FlowResult<()> {
        if self.step != expected {
            return Err(FlowError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    fn move_to(&mut self, step: BookingStep) {
        info!("Booking step {} -> {}", self.step, step);
        self.step = step;
    }

    fn check_date(&self, date: NaiveDate) -> FlowResult<&DaySchedule> {
        if date < self.navigator.today() {
            return Err(FlowError::DateInPast(date));
        }
        self.week
            .iter()
            .find(|day| day.date == date)
            .ok_or(FlowError::DateNotDisplayed(date))
    }

    fn check_slot(&self, date: NaiveDate, time: &str) -> FlowResult<()> {
        let day = self.check_date(date)?;
        if !day.is_slot_available(time) {
            return Err(FlowError::SlotUnavailable {
                date,
                time: time.to_string(),
            });
        }
        Ok(())
    }

    /// Regenerate the displayed week; days before today are closed.
    fn refresh_week(&mut self) {
        let today = self.navigator.today();
        let mut week = self.generator.week(self.navigator.week_start());
        for day in week.iter_mut().filter(|day| day.date < today) {
            day.close();
        }
        self.week = week;
    }
}
