//! Terminal rendering of the request state
//!
//! The renderer reads the [`RequestState`] and the [`ThemeContext`]; it never
//! changes either.

use owo_colors::{OwoColorize, Rgb};
use std::fmt::{self, Display};

use crate::presenter::{CategoryPresenter, CategoryView, ColorToken, IconToken, format_price};
use crate::theme::{Theme, ThemeContext};
use crate::view_model::RequestState;

pub const IDLE_TEXT: &str =
    "Enter your destination, trip duration, and budget to get a personalized itinerary";
pub const LOADING_TEXT: &str = "Generating Itinerary...";
pub const EMPTY_CATEGORY_TEXT: &str =
    "No recommendations available for this category within your budget.";

impl IconToken {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            IconToken::Building => "🏛️",
            IconToken::Utensils => "🍴",
            IconToken::Mountain => "⛰️",
            IconToken::Party => "🎉",
            IconToken::Pin => "📍",
        }
    }
}

impl ColorToken {
    /// Accent shade for the theme: deep on light backgrounds, pale on dark ones
    #[must_use]
    pub fn shade(self, theme: Theme) -> Rgb {
        match (self, theme) {
            (ColorToken::Blue, Theme::Light) => Rgb(0x1e, 0x40, 0xaf),
            (ColorToken::Blue, Theme::Dark) => Rgb(0x93, 0xc5, 0xfd),
            (ColorToken::Orange, Theme::Light) => Rgb(0x9a, 0x34, 0x12),
            (ColorToken::Orange, Theme::Dark) => Rgb(0xfd, 0xba, 0x74),
            (ColorToken::Green, Theme::Light) => Rgb(0x16, 0x65, 0x34),
            (ColorToken::Green, Theme::Dark) => Rgb(0x86, 0xef, 0xac),
            (ColorToken::Purple, Theme::Light) => Rgb(0x6b, 0x21, 0xa8),
            (ColorToken::Purple, Theme::Dark) => Rgb(0xd8, 0xb4, 0xfe),
            (ColorToken::Gray, Theme::Light) => Rgb(0x1f, 0x29, 0x37),
            (ColorToken::Gray, Theme::Dark) => Rgb(0xd1, 0xd5, 0xdb),
        }
    }
}

fn error_shade(theme: Theme) -> Rgb {
    match theme {
        Theme::Light => Rgb(0xb9, 0x1c, 0x1c),
        Theme::Dark => Rgb(0xf8, 0x71, 0x71),
    }
}

fn total_shade(theme: Theme) -> Rgb {
    match theme {
        Theme::Light => Rgb(0x16, 0xa3, 0x4a),
        Theme::Dark => Rgb(0x4a, 0xde, 0x80),
    }
}

pub struct Renderer<'a> {
    theme: &'a ThemeContext,
    color: bool,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(theme: &'a ThemeContext, color: bool) -> Self {
        Self { theme, color }
    }

    /// Displayable view of the state
    #[must_use]
    pub fn render<'s>(&self, state: &'s RequestState) -> StateView<'s> {
        StateView {
            state,
            theme: self.theme.theme(),
            color: self.color,
        }
    }
}

pub struct StateView<'s> {
    state: &'s RequestState,
    theme: Theme,
    color: bool,
}

impl StateView<'_> {
    fn paint(&self, text: &str, shade: Rgb) -> String {
        if self.color {
            text.color(shade).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_category(&self, f: &mut fmt::Formatter<'_>, view: &CategoryView<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} ({})",
            view.icon.glyph(),
            self.paint(view.name, view.color.shade(self.theme)),
            view.recommendation_label()
        )?;

        if view.no_recommendations {
            writeln!(f, "   {EMPTY_CATEGORY_TEXT}")?;
        }

        for place in view.places {
            writeln!(
                f,
                "   • {} [{}]",
                place.name,
                self.paint(&format_price(place.price), view.color.shade(self.theme))
            )?;
            writeln!(f, "     {}", place.description)?;
        }
        Ok(())
    }
}

impl Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            RequestState::Idle => writeln!(f, "{IDLE_TEXT}"),
            RequestState::Loading => writeln!(f, "⏳ {LOADING_TEXT}"),
            RequestState::Failure(message) => {
                writeln!(f, "{}", self.paint(message, error_shade(self.theme)))
            }
            RequestState::Success(itinerary) => {
                let summary = CategoryPresenter::summarize(itinerary);
                writeln!(
                    f,
                    "✈️  Your {} Itinerary ({})",
                    summary.location,
                    summary.days_label()
                )?;
                writeln!(
                    f,
                    "   Total Cost: {}",
                    self.paint(&format_price(summary.total_cost), total_shade(self.theme))
                )?;
                writeln!(f, "   Budget: {}", format_price(summary.budget))?;

                for view in CategoryPresenter::present(itinerary) {
                    writeln!(f)?;
                    self.write_category(f, &view)?;
                }
                Ok(())
            }
        }
    }
}
