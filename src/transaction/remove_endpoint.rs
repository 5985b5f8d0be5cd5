//! Defines the endpoint for removing the most recently added transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    Error,
    alert::Alert,
    html::format_currency,
    transaction::{LedgerState, table::ledger_event_view},
};

/// A route handler for removing the last transaction from the ledger.
///
/// Responds with an alert describing the removed transaction and deletes its
/// row from the transaction table. Removing from an empty ledger does nothing
/// and shows an informational alert instead.
pub async fn remove_last_transaction_endpoint(State(state): State<LedgerState>) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let (record, event) = match ledger.remove_last() {
        Ok(removed) => removed,
        Err(error) => {
            tracing::info!("Ignored request to remove a transaction: {error}");
            return error.into_alert_response();
        }
    };

    tracing::info!(
        "Removed {} transaction of {} on {}",
        record.category,
        record.amount,
        record.date
    );

    let alert = Alert::Success {
        message: "Transaction removed".to_owned(),
        details: format!(
            "{} {} on {}",
            record.category,
            format_currency(record.amount.value()),
            record.date
        ),
    };

    html! {
        (alert.into_html())
        (ledger_event_view(event, &record))
    }
    .into_response()
}
