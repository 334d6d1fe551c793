//! Theme system for the greeting card.
//!
//! The card ships in two color variants of the same flow: a warm rose theme
//! and a violet one. Each theme is a set of CSS custom properties selected
//! through the `data-theme` attribute on the themed root.

use dioxus::prelude::*;

/// Available themes for the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Warm rose palette.
    #[default]
    Blush,
    /// Soft violet palette.
    Lavender,
}

impl Theme {
    /// Returns the CSS `data-theme` attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Blush => "blush",
            Theme::Lavender => "lavender",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Blush => "Blush",
            Theme::Lavender => "Lavender",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Blush, Theme::Lavender]
    }

    /// Parses a theme from its CSS value, e.g. a command line argument.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "blush" => Some(Theme::Blush),
            "lavender" => Some(Theme::Lavender),
            _ => None,
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
