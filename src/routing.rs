//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    theme::toggle_theme_endpoint,
    transaction::{
        create_transaction_endpoint, export_transactions_endpoint, get_new_transaction_form,
        remove_last_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_form))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(
            endpoints::LAST_TRANSACTION,
            delete(remove_last_transaction_endpoint),
        )
        .route(
            endpoints::EXPORT_TRANSACTIONS,
            get(export_transactions_endpoint),
        )
        .route(endpoints::THEME, post(toggle_theme_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap(), "Etc/UTC")
            .expect("Could not create app state");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn dashboard_route_renders_page() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("transactions-body"));
    }

    #[tokio::test]
    async fn add_remove_and_export_through_router() {
        let server = get_test_server();

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&[
                ("date", "2025-04-01"),
                ("category", "Food"),
                ("amount", "42.5"),
                ("description", "lunch"),
            ])
            .await
            .assert_status_ok();

        let export = server.get(endpoints::EXPORT_TRANSACTIONS).await;
        export.assert_status_ok();
        let csv = export.text();
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.ends_with("Apr 1 2025,Food,42.50,Success,\"lunch\""));

        let removed = server.delete(endpoints::LAST_TRANSACTION).await;
        removed.assert_status_ok();
        assert!(removed.text().contains("transaction-row-5"));

        let export = server.get(endpoints::EXPORT_TRANSACTIONS).await;
        assert_eq!(export.text().lines().count(), 6);
    }

    #[tokio::test]
    async fn theme_toggle_through_router() {
        let server = get_test_server();

        server.post(endpoints::THEME).await.assert_status_ok();

        let page = server.get(endpoints::DASHBOARD_VIEW).await;
        assert!(page.text().contains(r#"data-theme="dark-mode""#));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_page_is_internal_server_error() {
        let server = get_test_server();

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
