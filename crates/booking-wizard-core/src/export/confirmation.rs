//! Printable confirmation of a booking.

use serde::{Deserialize, Serialize};

use crate::models::{ConfirmedBooking, PracticeInfo};
use crate::schedule::format_long_date;

/// Notes printed under every confirmation.
const IMPORTANT_NOTES: [&str; 3] = [
    "Merci de vous munir de votre carte vitale et mutuelle",
    "En cas d'empêchement, veuillez annuler au moins 24h à l'avance",
    "Moyens de paiement: virement bancaire, chèques, espèces",
];

/// Everything the confirmation screen shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmationSummary {
    /// "Un email de confirmation a été envoyé à ..." (display text only)
    pub headline: String,
    pub service: ServiceLine,
    pub appointment: AppointmentLine,
    pub location: LocationLine,
    pub patient: PatientLine,
    pub important_notes: Vec<String>,
    pub emergency_notice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceLine {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentLine {
    /// ISO date
    pub date: String,
    /// Long French date, e.g. "lundi 19 octobre 2026"
    pub date_label: String,
    pub time: String,
    pub doctor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationLine {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientLine {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub is_new_patient: bool,
    pub notes: Option<String>,
}

impl ConfirmationSummary {
    /// Build the summary for a confirmed booking at the given practice.
    pub fn new(booking: &ConfirmedBooking, practice: &PracticeInfo) -> Self {
        let patient = &booking.patient;
        let notes = patient.notes.trim();

        Self {
            headline: format!(
                "Un email de confirmation a été envoyé à {}",
                patient.email
            ),
            service: ServiceLine {
                id: booking.service.id.clone(),
                name: booking.service.name.clone(),
                duration_minutes: booking.service.duration_minutes,
            },
            appointment: AppointmentLine {
                date: booking.date.format("%Y-%m-%d").to_string(),
                date_label: format_long_date(booking.date),
                time: booking.time.clone(),
                doctor: practice.doctor_name.clone(),
            },
            location: LocationLine {
                name: practice.address.name.clone(),
                address: practice.address.one_line(),
            },
            patient: PatientLine {
                full_name: patient.full_name(),
                email: patient.email.clone(),
                phone: patient.phone.trim().to_string(),
                is_new_patient: patient.is_new_patient,
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            },
            important_notes: IMPORTANT_NOTES.iter().map(|s| s.to_string()).collect(),
            emergency_notice: format!(
                "Urgence : En cas d'urgence, veuillez téléphoner directement au {} ou au {}",
                practice.emergency, practice.phone
            ),
        }
    }

    /// Export as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering for printing.
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "Rendez-vous confirmé !".to_string(),
            self.headline.clone(),
            String::new(),
            "Détails du rendez-vous".to_string(),
            format!(
                "Prestation : {} ({} minutes)",
                self.service.name, self.service.duration_minutes
            ),
            format!(
                "Date et heure : {} à {}",
                self.appointment.date_label, self.appointment.time
            ),
            format!("Praticien : {}", self.appointment.doctor),
            format!("Lieu : {}, {}", self.location.name, self.location.address),
            format!("Patient : {} <{}>", self.patient.full_name, self.patient.email),
        ];

        if let Some(notes) = &self.patient.notes {
            lines.push(format!("Notes : {}", notes));
        }

        lines.push(String::new());
        lines.push("Informations importantes".to_string());
        for note in &self.important_notes {
            lines.push(format!("• {}", note));
        }
        lines.push(String::new());
        lines.push(self.emergency_notice.clone());

        lines.join("\n")
    }
}
