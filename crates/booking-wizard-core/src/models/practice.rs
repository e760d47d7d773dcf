//! Practice contact information.

use serde::{Deserialize, Serialize};

/// Postal address of the practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// "street, postal_code city"
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.street, self.postal_code, self.city)
    }
}

/// Doctor and practice details shown around the booking flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeInfo {
    pub doctor_name: String,
    pub title: String,
    pub specialty: String,
    pub convention: String,
    pub credentials: String,
    pub address: Address,
    pub phone: String,
    /// Emergency number to dial instead of booking
    pub emergency: String,
    pub email: String,
    pub website: String,
}

impl Default for PracticeInfo {
    fn default() -> Self {
        Self {
            doctor_name: "Dr. Laurent GRIMAUD".into(),
            title: "Médecin Généraliste".into(),
            specialty: "Médecine Générale et Spécialisée Urgences".into(),
            convention: "Conventionné Secteur 2 avec l'Assurance Maladie".into(),
            credentials: "Maître de Stage des Universités".into(),
            address: Address {
                name: "Centre Médical Pont de l'Arc".into(),
                street: "4 Rue Frédéric ROSA".into(),
                postal_code: "13090".into(),
                city: "Aix-en-Provence".into(),
                country: "France".into(),
            },
            phone: "04 86 31 94 11".into(),
            emergency: "15".into(),
            email: "aixecho462@gmail.com".into(),
            website: "www.ameli.direct.amelie.fr".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_one_line() {
        let practice = PracticeInfo::default();
        assert_eq!(
            practice.address.one_line(),
            "4 Rue Frédéric ROSA, 13090 Aix-en-Provence"
        );
        assert_eq!(practice.emergency, "15");
    }
}
