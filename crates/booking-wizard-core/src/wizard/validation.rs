//! Patient form state and validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{PatientField, PatientInfo};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Per-field validation messages, in field order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldErrors(BTreeMap<PatientField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: PatientField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: PatientField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: PatientField) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message of one field.
    pub fn clear_field(&mut self, field: PatientField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatientField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Check the shape of an email address (`local@domain.tld`). Surrounding
/// whitespace makes it invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate the required patient fields.
pub fn validate_patient(info: &PatientInfo) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if info.first_name.trim().is_empty() {
        errors.insert(PatientField::FirstName, "Le prénom est requis");
    }
    if info.last_name.trim().is_empty() {
        errors.insert(PatientField::LastName, "Le nom est requis");
    }
    if info.email.trim().is_empty() {
        errors.insert(PatientField::Email, "L'email est requis");
    } else if !is_valid_email(&info.email) {
        errors.insert(PatientField::Email, "Email invalide");
    }
    if info.phone.trim().is_empty() {
        errors.insert(PatientField::Phone, "Le téléphone est requis");
    }
    if info.birth_date.trim().is_empty() {
        errors.insert(PatientField::BirthDate, "La date de naissance est requise");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Values typed on the information step plus their current errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientForm {
    values: PatientInfo,
    errors: FieldErrors,
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with previously submitted details.
    pub fn prefilled(info: PatientInfo) -> Self {
        Self {
            values: info,
            errors: FieldErrors::new(),
        }
    }

    pub fn values(&self) -> &PatientInfo {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Edit a field. Its error, if any, goes away.
    pub fn set_field(&mut self, field: PatientField, value: &str) {
        self.values.set_field(field, value.to_string());
        self.errors.clear_field(field);
    }

    pub fn set_new_patient(&mut self, is_new_patient: bool) {
        self.values.is_new_patient = is_new_patient;
    }

    /// Replace every value at once, as a host submitting a whole form does.
    pub fn replace(&mut self, info: PatientInfo) {
        self.values = info;
        self.errors = FieldErrors::new();
    }

    /// Validate and keep the outcome for display.
    pub fn validate(&mut self) -> Result<PatientInfo, FieldErrors> {
        match validate_patient(&self.values) {
            Ok(()) => {
                self.errors = FieldErrors::new();
                Ok(self.values.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
