//! Data models for the Trippin client
//!
//! This module contains the wire contract with the itinerary service:
//! - Trip: the request draft edited by the user
//! - Itinerary: the generated recommendations grouped by category

pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::{CategoryMap, ErrorPayload, ItineraryResponse, Place};
pub use trip::{TripField, TripRequest};
