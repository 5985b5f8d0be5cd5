//! Light and dark colour themes.
//!
//! The chosen theme is stored under a single key in the preference table
//! and applied when pages are rendered. Toggling the theme re-renders the
//! dashboard charts with colours for the new theme.

mod endpoint;
mod preference;

use std::fmt::Display;

use maud::PreEscaped;

pub use endpoint::toggle_theme_endpoint;
pub use preference::{create_preference_table, get_theme, save_theme, toggle_theme};

/// The colour theme of the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    DarkMode,
}

impl Theme {
    /// The string used to store the theme and as the CSS class on the page body.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::DarkMode => "dark-mode",
        }
    }

    /// Parse a stored theme string, returning `None` for unknown values.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark-mode" => Some(Theme::DarkMode),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::DarkMode,
            Theme::DarkMode => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::DarkMode
    }
}

/// JavaScript that sets the page classes for `theme`.
///
/// Rendered alongside the charts so that swapping in charts for a new theme
/// also switches the Tailwind `dark` class and the body's theme class.
pub fn apply_theme_script(theme: Theme) -> PreEscaped<String> {
    PreEscaped(format!(
        "document.documentElement.classList.toggle('dark', {is_dark});
        document.body.classList.remove('{light}', '{dark}');
        document.body.classList.add('{current}');",
        is_dark = theme.is_dark(),
        light = Theme::Light.as_str(),
        dark = Theme::DarkMode.as_str(),
        current = theme.as_str(),
    ))
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
