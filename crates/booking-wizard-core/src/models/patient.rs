//! Patient models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient details captured on the information step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    /// First name (required)
    pub first_name: String,
    /// Last name (required)
    pub last_name: String,
    /// Contact email (required, `local@domain.tld`)
    pub email: String,
    /// Contact phone (required)
    pub phone: String,
    /// Birth date as entered (required)
    pub birth_date: String,
    /// First visit to the practice
    pub is_new_patient: bool,
    /// Free-text reason for the visit
    pub notes: String,
}

impl PatientInfo {
    /// Create patient info with the required fields.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        birth_date: &str,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            birth_date: birth_date.to_string(),
            is_new_patient: false,
            notes: String::new(),
        }
    }

    /// "First Last" as shown on the confirmation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Read a text field.
    pub fn field(&self, field: PatientField) -> &str {
        match field {
            PatientField::FirstName => &self.first_name,
            PatientField::LastName => &self.last_name,
            PatientField::Email => &self.email,
            PatientField::Phone => &self.phone,
            PatientField::BirthDate => &self.birth_date,
            PatientField::Notes => &self.notes,
        }
    }

    /// Overwrite a text field.
    pub fn set_field(&mut self, field: PatientField, value: String) {
        match field {
            PatientField::FirstName => self.first_name = value,
            PatientField::LastName => self.last_name = value,
            PatientField::Email => self.email = value,
            PatientField::Phone => self.phone = value,
            PatientField::BirthDate => self.birth_date = value,
            PatientField::Notes => self.notes = value,
        }
    }
}

/// Text fields of the patient form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PatientField {
    FirstName,
    LastName,
    Email,
    Phone,
    BirthDate,
    Notes,
}

impl PatientField {
    /// Fields that must be filled before confirming.
    pub const REQUIRED: [PatientField; 5] = [
        PatientField::FirstName,
        PatientField::LastName,
        PatientField::Email,
        PatientField::Phone,
        PatientField::BirthDate,
    ];

    /// Form field name as used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientField::FirstName => "firstName",
            PatientField::LastName => "lastName",
            PatientField::Email => "email",
            PatientField::Phone => "phone",
            PatientField::BirthDate => "birthDate",
            PatientField::Notes => "notes",
        }
    }

    /// Parse a form field name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(PatientField::FirstName),
            "lastName" => Some(PatientField::LastName),
            "email" => Some(PatientField::Email),
            "phone" => Some(PatientField::Phone),
            "birthDate" => Some(PatientField::BirthDate),
            "notes" => Some(PatientField::Notes),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, PatientField::Notes)
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let patient = PatientInfo::new(" Jean ", "Dupont", "jean@example.fr", "0612345678", "1990-01-01");
        assert_eq!(patient.full_name(), "Jean Dupont");
        assert!(!patient.is_new_patient);
    }

    #[test]
    fn test_field_accessors() {
        let mut patient = PatientInfo::default();
        patient.set_field(PatientField::Phone, "0612345678".into());
        assert_eq!(patient.field(PatientField::Phone), "0612345678");
        assert_eq!(patient.field(PatientField::Email), "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in PatientField::REQUIRED {
            assert_eq!(PatientField::parse(field.as_str()), Some(field));
            assert!(field.is_required());
        }
        assert!(!PatientField::Notes.is_required());
        assert_eq!(PatientField::parse("isNewPatient"), None);
    }

    #[test]
    fn test_json_keys_match_form_names() {
        let patient = PatientInfo::new("Jean", "Dupont", "jean@example.fr", "0612345678", "1990-01-01");
        let value = serde_json::to_value(&patient).unwrap();

        for field in PatientField::REQUIRED {
            assert!(value.get(field.as_str()).is_some(), "missing key {}", field.as_str());
        }
        assert_eq!(value["isNewPatient"], false);
        assert!(value.get("first_name").is_none());
    }
}
