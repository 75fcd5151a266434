//! Trip request model sent to the itinerary service

use serde::{Deserialize, Serialize};

/// Shortest trip the form accepts
pub const MIN_DAYS: u32 = 1;
/// Longest trip the form accepts
pub const MAX_DAYS: u32 = 30;
/// Budget used when the input cannot be read
pub const DEFAULT_BUDGET: f64 = 100.0;
/// Smallest budget the input layer lets through
pub const MIN_BUDGET: f64 = 1.0;

/// Destination, duration and budget of a requested trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination name (city, region, etc.)
    pub location: String,
    /// Trip length in days
    pub days: u32,
    /// Total budget in dollars
    pub budget: f64,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            location: String::new(),
            days: MIN_DAYS,
            budget: DEFAULT_BUDGET,
        }
    }
}

impl TripRequest {
    /// Create a new trip request
    #[must_use]
    pub fn new<S: Into<String>>(location: S, days: u32, budget: f64) -> Self {
        Self {
            location: location.into(),
            days,
            budget,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: TripField) {
        match field {
            TripField::Location(location) => self.location = location,
            TripField::Days(days) => self.days = days,
            TripField::Budget(budget) => self.budget = budget,
        }
    }

    /// Whether the destination has any non-whitespace content
    #[must_use]
    pub fn has_destination(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// A single edit of one draft field
#[derive(Debug, Clone, PartialEq)]
pub enum TripField {
    Location(String),
    Days(u32),
    Budget(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = TripRequest::default();
        assert_eq!(draft.location, "");
        assert_eq!(draft.days, 1);
        assert_eq!(draft.budget, 100.0);
        assert!(!draft.has_destination());
    }

    #[test]
    fn test_set_replaces_only_named_field() {
        let mut draft = TripRequest::new("Paris", 3, 250.0);
        draft.set(TripField::Days(5));
        assert_eq!(draft, TripRequest::new("Paris", 5, 250.0));

        draft.set(TripField::Location("Tokyo".to_string()));
        assert_eq!(draft, TripRequest::new("Tokyo", 5, 250.0));
    }

    #[test]
    fn test_serializes_wire_shape() {
        let request = TripRequest::new("New York", 2, 150.5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "location": "New York", "days": 2, "budget": 150.5 })
        );
    }
}
