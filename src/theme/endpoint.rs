//! Defines the endpoint for switching between the light and dark themes.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;
use rusqlite::Connection;

use crate::{
    AppState, Error, dashboard::charts_section, navigation::theme_toggle, theme::toggle_theme,
};

/// The state needed to toggle the theme.
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// The database connection where the theme preference is stored.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ThemeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that switches to the other theme and saves it.
///
/// Responds with the chart section drawn for the new theme, which also
/// applies the theme to the page, and an out-of-band replacement of the
/// theme toggle button.
pub async fn toggle_theme_endpoint(State(state): State<ThemeState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    let theme = match toggle_theme(&connection) {
        Ok(theme) => theme,
        Err(error) => {
            tracing::error!("could not toggle theme: {error}");
            return error.into_alert_response();
        }
    };

    html! {
        (charts_section(theme))
        (theme_toggle(theme, true))
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        db::initialize,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_fragment},
        theme::{Theme, get_theme},
    };

    use super::{ThemeState, toggle_theme_endpoint};

    fn get_test_state() -> ThemeState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        ThemeState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn switches_to_dark_mode_and_saves_it() {
        let state = get_test_state();

        let response = toggle_theme_endpoint(State(state.clone())).await;

        assert_status_ok(&response);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_theme(&connection).unwrap(), Theme::DarkMode);
    }

    #[tokio::test]
    async fn toggling_twice_restores_light_theme() {
        let state = get_test_state();

        toggle_theme_endpoint(State(state.clone())).await;
        toggle_theme_endpoint(State(state.clone())).await;

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_theme(&connection).unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn responds_with_charts_for_new_theme() {
        let state = get_test_state();

        let response = toggle_theme_endpoint(State(state)).await;

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let charts = html
            .select(&Selector::parse("section#charts").unwrap())
            .next()
            .expect("No chart section found");
        assert_eq!(charts.value().attr("data-theme"), Some("dark-mode"));
        let script = charts.html();
        assert!(script.contains("#f3f4f6"), "want dark palette in charts");
        assert!(script.contains("add('dark-mode')"));

        let toggle = html
            .select(&Selector::parse("#theme-toggle").unwrap())
            .next()
            .expect("No theme toggle found");
        assert_eq!(toggle.value().attr("hx-swap-oob"), Some("true"));
        assert_eq!(toggle.value().attr("title"), Some("Switch to light mode"));
    }
}
