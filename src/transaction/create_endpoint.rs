//! Defines the endpoint for adding a transaction to the ledger.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;

use crate::{
    Error,
    ledger::{Amount, TransactionRecord, format_display_date, parse_form_date},
    transaction::{
        LedgerState,
        form::{TransactionForm, transaction_modal},
        table::ledger_event_view,
    },
};

/// A route handler for adding a transaction to the end of the ledger.
///
/// On success the response closes the modal and appends the new row to the
/// transaction table. Invalid input re-renders the form with an error
/// message and leaves the ledger unchanged.
pub async fn create_transaction_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let record = match validate_form(&form) {
        Ok(record) => record,
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");
            return transaction_modal(&form, Some(&error.to_string())).into_response();
        }
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let event = ledger.add(record.clone());
    tracing::info!(
        "Added {} transaction of {} on {}",
        record.category,
        record.amount,
        record.date
    );

    ledger_event_view(event, &record).into_response()
}

fn validate_form(form: &TransactionForm) -> Result<TransactionRecord, Error> {
    let date = parse_form_date(&form.date)?;
    let amount = Amount::parse(&form.amount)?;

    Ok(TransactionRecord::new(
        &format_display_date(date),
        &form.category,
        amount,
        &form.description,
    ))
}
