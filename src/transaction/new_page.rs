//! Defines the route handler for the modal form for adding a transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    ledger::{CATEGORIES, format_form_date},
    timezone::local_today,
    transaction::{
        LedgerState,
        form::{TransactionForm, transaction_modal},
    },
};

/// Renders the modal form with the date set to today.
pub async fn get_new_transaction_form(State(state): State<LedgerState>) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let defaults = TransactionForm {
        date: format_form_date(today),
        category: CATEGORIES[0].to_owned(),
        ..Default::default()
    };

    transaction_modal(&defaults, None).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use time::OffsetDateTime;

    use crate::{
        ledger::format_form_date,
        test_utils::{
            assert_form_input_with_value, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_fragment,
        },
        transaction::test_utils::ledger_state,
    };

    use super::get_new_transaction_form;

    #[tokio::test]
    async fn date_defaults_to_today() {
        let response = get_new_transaction_form(State(ledger_state())).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        let today = format_form_date(OffsetDateTime::now_utc().date());
        assert_form_input_with_value(&form, "date", "date", &today);
    }

    #[tokio::test]
    async fn invalid_timezone_shows_alert() {
        let mut state = ledger_state();
        state.local_timezone = "Not/AZone".to_owned();

        let response = get_new_transaction_form(State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
