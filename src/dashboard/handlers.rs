//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    dashboard::{cards::summary_cards_view, charts_section, data::MonthlyData},
    html::{HeadElement, base},
    ledger::{Ledger, TransactionRecord},
    navigation::NavBar,
    theme::{Theme, get_theme},
    timezone::local_today,
    transaction::transactions_view,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading the theme preference.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The transactions shown in the transaction list.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the dashboard with the summary, charts and transaction list.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let theme = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_theme(&connection)
            .inspect_err(|error| tracing::error!("could not get theme: {error}"))?
    };

    let records = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?
        .all()
        .to_vec();

    Ok(dashboard_view(today, theme, &records).into_response())
}

fn dashboard_view(today: Date, theme: Theme, records: &[TransactionRecord]) -> Markup {
    let nav_bar = NavBar::new(today, theme).into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(&MonthlyData::example()))

            (charts_section(theme))

            (transactions_view(records))
        }
    );

    let scripts = [HeadElement::ScriptLink(
        "/static/echarts.6.0.0.min.js".to_owned(),
    )];

    base("Dashboard", theme, &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{
        Error,
        db::initialize,
        ledger::Ledger,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
        theme::{Theme, save_theme},
    };

    use super::{DashboardState, get_dashboard_page};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn dashboard_state(connection: Connection) -> DashboardState {
        DashboardState {
            db_connection: Arc::new(Mutex::new(connection)),
            ledger: Arc::new(Mutex::new(Ledger::seeded())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let state = dashboard_state(get_test_connection());

        let response = get_dashboard_page(State(state)).await.into_response();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_chart_exists(&html, "overview-chart");
        assert_chart_exists(&html, "category-chart");
        assert_eq!(count(&html, "tbody#transactions-body tr"), 5);
        assert_eq!(count(&html, "#summary div[aria-label]"), 3);
        assert_eq!(count(&html, "#modal-container"), 1);
        assert_eq!(count(&html, "#alert-container"), 1);
    }

    #[tokio::test]
    async fn uses_saved_theme() {
        let connection = get_test_connection();
        save_theme(Theme::DarkMode, &connection).unwrap();
        let state = dashboard_state(connection);

        let response = get_dashboard_page(State(state)).await.into_response();

        let html = parse_html_document(response).await;
        assert_eq!(count(&html, "body.dark-mode"), 1);
        assert_eq!(count(&html, "html.dark"), 1);
    }

    #[tokio::test]
    async fn defaults_to_light_theme() {
        let state = dashboard_state(get_test_connection());

        let response = get_dashboard_page(State(state)).await.into_response();

        let html = parse_html_document(response).await;
        assert_eq!(count(&html, "body.light"), 1);
        assert_eq!(count(&html, "html.dark"), 0);
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let mut state = dashboard_state(get_test_connection());
        state.local_timezone = "Not/AZone".to_owned();

        let result = get_dashboard_page(State(state)).await;

        let error = result.err().expect("want an error for an invalid timezone");
        assert_eq!(error, Error::InvalidTimezoneError("Not/AZone".to_owned()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    fn count(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{chart_id}")).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "want chart with id {chart_id}, got none"
        );
    }
}
