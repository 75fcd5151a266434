//! Itinerary response model returned by the itinerary service

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A recommended place with its cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    /// Cost in dollars, never negative
    pub price: f64,
    /// Category label assigned by the service
    pub category: String,
}

/// Generated itinerary for a destination, duration and budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub location: String,
    pub days: u32,
    pub budget: f64,
    /// Sum of all place prices, computed by the service
    pub total_cost: f64,
    pub places: CategoryMap,
}

impl ItineraryResponse {
    /// Number of places across all categories
    #[must_use]
    pub fn place_count(&self) -> usize {
        self.places.iter().map(|(_, places)| places.len()).sum()
    }
}

/// Category name to places, in the order the service sent them.
///
/// A repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap(Vec<(String, Vec<Place>)>);

impl CategoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: String, places: Vec<Place>) {
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = places,
            None => self.0.push((category, places)),
        }
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[Place]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, places)| places.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Place])> {
        self.0
            .iter()
            .map(|(name, places)| (name.as_str(), places.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, places) in &self.0 {
            map.serialize_entry(category, places)?;
        }
        map.end()
    }
}

struct CategoryMapVisitor;

impl<'de> Visitor<'de> for CategoryMapVisitor {
    type Value = CategoryMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to lists of places")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = CategoryMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((category, places)) = access.next_entry::<String, Vec<Place>>()? {
            map.insert(category, places);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

/// Error body sent with non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub detail: Option<String>,
}

impl ErrorPayload {
    /// Parse an error body, returning the `detail` message when it is present and non-empty
    #[must_use]
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.detail)
            .filter(|detail| !detail.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "location": "Paris",
        "days": 2,
        "budget": 300.0,
        "total_cost": 245.5,
        "places": {
            "Scenic & Natural Places": [],
            "Food Places": [
                {"name": "Cafe A", "description": "Coffee", "price": 12.5, "category": "Food Places"}
            ],
            "Historical Museums & Art Galleries": []
        }
    }"#;

    #[test]
    fn test_parses_response_in_wire_order() {
        let response: ItineraryResponse = serde_json::from_str(RESPONSE).unwrap();
        let categories: Vec<&str> = response.places.categories().collect();
        assert_eq!(
            categories,
            vec![
                "Scenic & Natural Places",
                "Food Places",
                "Historical Museums & Art Galleries"
            ]
        );
        assert_eq!(response.place_count(), 1);
        assert_eq!(response.places.get("Food Places").unwrap()[0].price, 12.5);
        assert!(response.places.get("Partying").is_none());
    }

    #[test]
    fn test_repeated_key_keeps_first_position() {
        let json = r#"{
            "A": [],
            "B": [],
            "A": [{"name": "x", "description": "", "price": 1.0, "category": "A"}]
        }"#;
        let map: CategoryMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.categories().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(map.get("A").unwrap().len(), 1);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let response: ItineraryResponse = serde_json::from_str(RESPONSE).unwrap();
        let text = serde_json::to_string(&response.places).unwrap();
        let scenic = text.find("Scenic").unwrap();
        let food = text.find("Food Places").unwrap();
        assert!(scenic < food);
    }

    #[test]
    fn test_error_payload_detail() {
        assert_eq!(
            ErrorPayload::detail_from(r#"{"detail": "Budget too low"}"#),
            Some("Budget too low".to_string())
        );
        assert_eq!(ErrorPayload::detail_from(r#"{"detail": ""}"#), None);
        assert_eq!(ErrorPayload::detail_from(r#"{"message": "nope"}"#), None);
        assert_eq!(ErrorPayload::detail_from("<html>502</html>"), None);
        assert_eq!(
            ErrorPayload::detail_from(r#"{"detail": [{"loc": ["body"], "msg": "x"}]}"#),
            None
        );
    }
}
