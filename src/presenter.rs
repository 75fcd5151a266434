//! Category presentation
//!
//! Turns an itinerary's category mapping into an ordered list of
//! display-ready [`CategoryView`]s. Classification walks [`CATEGORY_RULES`]
//! top to bottom and the first label contained in the category name wins.

use crate::models::{ItineraryResponse, Place};

/// Icon shown next to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    Building,
    Utensils,
    Mountain,
    Party,
    Pin,
}

/// Accent color of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Blue,
    Orange,
    Green,
    Purple,
    Gray,
}

/// Label matched by substring, with the tokens it maps to
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub label: &'static str,
    pub icon: IconToken,
    pub color: ColorToken,
}

impl CategoryRule {
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        category.contains(self.label)
    }
}

/// Known categories in priority order
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        label: "Historical",
        icon: IconToken::Building,
        color: ColorToken::Blue,
    },
    CategoryRule {
        label: "Food",
        icon: IconToken::Utensils,
        color: ColorToken::Orange,
    },
    CategoryRule {
        label: "Scenic",
        icon: IconToken::Mountain,
        color: ColorToken::Green,
    },
    CategoryRule {
        label: "Partying",
        icon: IconToken::Party,
        color: ColorToken::Purple,
    },
];

/// Tokens for categories no rule matches
pub const FALLBACK_TOKENS: (IconToken, ColorToken) = (IconToken::Pin, ColorToken::Gray);

/// Icon and color for a category name
#[must_use]
pub fn classify(category: &str) -> (IconToken, ColorToken) {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(category))
        .map_or(FALLBACK_TOKENS, |rule| (rule.icon, rule.color))
}

/// One category ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub icon: IconToken,
    pub color: ColorToken,
    pub places: &'a [Place],
    /// Set when the category has no places within budget
    pub no_recommendations: bool,
}

impl CategoryView<'_> {
    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        self.places.len()
    }

    /// "1 recommendation" or "N recommendations"
    #[must_use]
    pub fn recommendation_label(&self) -> String {
        match self.places.len() {
            1 => "1 recommendation".to_string(),
            n => format!("{n} recommendations"),
        }
    }
}

/// Header figures of an itinerary
#[derive(Debug, Clone, PartialEq)]
pub struct ItinerarySummary<'a> {
    pub location: &'a str,
    pub days: u32,
    pub total_cost: f64,
    pub budget: f64,
}

impl ItinerarySummary<'_> {
    /// "1 Day" or "N Days"
    #[must_use]
    pub fn days_label(&self) -> String {
        match self.days {
            1 => "1 Day".to_string(),
            n => format!("{n} Days"),
        }
    }

    #[must_use]
    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.total_cost
    }
}

pub struct CategoryPresenter;

impl CategoryPresenter {
    /// Categories in the order the service sent them, each classified
    #[must_use]
    pub fn present(response: &ItineraryResponse) -> Vec<CategoryView<'_>> {
        response
            .places
            .iter()
            .map(|(name, places)| {
                let (icon, color) = classify(name);
                CategoryView {
                    name,
                    icon,
                    color,
                    places,
                    no_recommendations: places.is_empty(),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn summarize(response: &ItineraryResponse) -> ItinerarySummary<'_> {
        ItinerarySummary {
            location: &response.location,
            days: response.days,
            total_cost: response.total_cost,
            budget: response.budget,
        }
    }
}

/// Dollar amount at two decimals
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}
