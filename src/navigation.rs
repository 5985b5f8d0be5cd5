//! The navigation bar shown at the top of the dashboard.

use maud::{Markup, html};
use time::Date;

use crate::{endpoints, ledger::format_form_date, theme::Theme};

/// The ID of the theme toggle button, used to swap the button after the theme changes.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub struct NavBar {
    today: Date,
    theme: Theme,
}

impl NavBar {
    /// Get the navigation bar showing `today` in the date picker and a
    /// toggle for switching away from `theme`.
    pub fn new(today: Date, theme: Theme) -> Self {
        Self { today, theme }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        img
                            src="/static/favicon-128x128.png"
                            alt="Money Master Logo"
                            class="h-8"
                        ;

                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Money Master"
                        }
                    }

                    div class="flex items-center gap-4"
                    {
                        label for="navbar-date" class="sr-only" { "Date" }
                        input
                            id="navbar-date"
                            type="date"
                            value=(format_form_date(self.today))
                            readonly
                            class="p-2 rounded text-sm text-gray-900 dark:text-white
                                bg-gray-50 dark:bg-gray-700 border border-gray-300
                                dark:border-gray-600";

                        (theme_toggle(self.theme, false))
                    }
                }
            }
        )
    }
}

/// The button that switches to the other theme.
///
/// Shows a moon while the light theme is active and a sun while the dark theme is active.
/// The response replaces the chart section. Set `swap_oob` to render the
/// button as an out-of-band replacement for the current one.
pub fn theme_toggle(theme: Theme, swap_oob: bool) -> Markup {
    let (icon, label) = if theme.is_dark() {
        ("☀", "Switch to light mode")
    } else {
        ("☾", "Switch to dark mode")
    };

    html!(
        button
            id=(THEME_TOGGLE_ID)
            type="button"
            title=(label)
            aria-label=(label)
            hx-post=(endpoints::THEME)
            hx-target="#charts"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-swap-oob=[swap_oob.then_some("true")]
            class="p-2 text-xl rounded-full text-gray-700 hover:bg-gray-100
                dark:text-gray-200 dark:hover:bg-gray-700"
        {
            (icon)
        }
    )
}

#[cfg(test)]
mod nav_bar_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{endpoints, test_utils::assert_valid_html, theme::Theme};

    use super::{NavBar, THEME_TOGGLE_ID, theme_toggle};

    #[test]
    fn date_picker_shows_today() {
        let html = Html::parse_fragment(
            &NavBar::new(date!(2025 - 04 - 01), Theme::Light)
                .into_html()
                .into_string(),
        );
        assert_valid_html(&html);

        let input = html
            .select(&Selector::parse("#navbar-date").unwrap())
            .next()
            .expect("No date input found");

        assert_eq!(input.value().attr("type"), Some("date"));
        assert_eq!(input.value().attr("value"), Some("2025-04-01"));
    }

    #[test]
    fn theme_toggle_posts_to_theme_endpoint() {
        let html = Html::parse_fragment(&theme_toggle(Theme::Light, false).into_string());

        let button = html
            .select(&Selector::parse(&format!("#{THEME_TOGGLE_ID}")).unwrap())
            .next()
            .expect("No theme toggle found");

        assert_eq!(button.value().attr("hx-post"), Some(endpoints::THEME));
        assert_eq!(button.value().attr("hx-target"), Some("#charts"));
        assert_eq!(button.value().attr("hx-swap-oob"), None);
    }

    #[test]
    fn out_of_band_theme_toggle() {
        let markup = theme_toggle(Theme::DarkMode, true).into_string();

        assert!(markup.contains(r#"hx-swap-oob="true""#));
    }

    #[test]
    fn theme_toggle_icon_matches_theme() {
        let light = theme_toggle(Theme::Light, false).into_string();
        let dark = theme_toggle(Theme::DarkMode, false).into_string();

        assert!(light.contains("☾"));
        assert!(light.contains("Switch to dark mode"));
        assert!(dark.contains("☀"));
        assert!(dark.contains("Switch to light mode"));
    }
}
