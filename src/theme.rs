//! Light and dark display themes
//!
//! The active theme lives in a [`ThemeContext`] that the caller owns and hands
//! to the renderer. It never touches request or itinerary state.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::TrippinError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = TrippinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TrippinError::validation(format!(
                "Unknown theme '{other}'. Use: light, dark"
            ))),
        }
    }
}

/// Scoped holder of the active theme, passed to whoever renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut context = ThemeContext::new(Theme::Light);
        assert_eq!(context.toggle(), Theme::Dark);
        assert!(context.is_dark());
        assert_eq!(context.toggle(), Theme::Light);
        assert_eq!(context, ThemeContext::new(Theme::Light));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
