//! Bookable service models.

use serde::{Deserialize, Serialize};

/// A single service offered by the practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Stable identifier (e.g., "consultation")
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description, may be empty
    pub description: String,
    /// Duration in minutes (display only, slot length comes from config)
    pub duration_minutes: u32,
    /// Icon or image reference for the presentation layer
    pub image: String,
}

impl Service {
    /// Create a new service with required fields.
    pub fn new(id: &str, name: &str, duration_minutes: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            duration_minutes,
            image: String::new(),
        }
    }

    /// Builder-style description setter.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder-style image setter.
    pub fn with_image(mut self, image: &str) -> Self {
        self.image = image.to_string();
        self
    }

    /// Human-readable duration, e.g. "15 min".
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service() {
        let service = Service::new("suture", "Suture", 30)
            .with_description("ClosedSolution")
            .with_image("/images/suture.jpg");

        assert_eq!(service.id, "suture");
        assert_eq!(service.description, "ClosedSolution");
        assert_eq!(service.image, "/images/suture.jpg");
        assert_eq!(service.duration_label(), "30 min");
    }
}
