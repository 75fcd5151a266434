//! `Trippin` - Budget-aware trip itinerary planning client
//!
//! This library collects a trip request, submits it to the itinerary
//! service, and turns the returned recommendations into a themed,
//! category-grouped presentation.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod presenter;
pub mod render;
pub mod theme;
pub mod view_model;

// Re-export core types for public API
pub use api::{ItineraryApi, ItineraryClient};
pub use config::TrippinConfig;
pub use error::TrippinError;
pub use form::{FormInput, RequestFormController};
pub use models::{CategoryMap, ItineraryResponse, Place, TripField, TripRequest};
pub use presenter::{CategoryPresenter, CategoryView, ColorToken, IconToken, ItinerarySummary};
pub use render::Renderer;
pub use theme::{Theme, ThemeContext};
pub use view_model::{ItineraryViewModel, RequestState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TrippinError>;
