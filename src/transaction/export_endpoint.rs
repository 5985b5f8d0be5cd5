//! Defines the endpoint for downloading the transactions as a CSV file.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    ledger::{suggest_filename, to_csv},
    timezone::local_today,
    transaction::LedgerState,
};

/// A route handler that sends the ledger as a CSV file attachment.
///
/// The file is named after today's date in the local timezone.
pub async fn export_transactions_endpoint(
    State(state): State<LedgerState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let csv = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)?;

        to_csv(ledger.all())
            .inspect_err(|error| tracing::error!("could not export transactions: {error}"))?
    };

    let filename = suggest_filename(today);
    tracing::info!("Exporting transactions as {filename}");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use time::OffsetDateTime;

    use crate::{
        Error,
        ledger::{Ledger, suggest_filename},
        test_utils::{assert_content_type, assert_status_ok, get_body_text, get_header},
        transaction::{
            export_transactions_endpoint,
            test_utils::{ledger_state, ledger_state_with},
        },
    };

    #[tokio::test]
    async fn sends_csv_attachment() {
        let response = export_transactions_endpoint(State(ledger_state()))
            .await
            .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/csv; charset=utf-8");
        let filename = suggest_filename(OffsetDateTime::now_utc().date());
        assert_eq!(
            get_header(&response, "content-disposition"),
            format!("attachment; filename=\"{filename}\"")
        );

        let body = get_body_text(response).await;
        let lines = body.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Date,Category,Amount,Status,Description");
        assert_eq!(
            lines[1],
            "Jan 25 2025,Health,500.00,Success,\"Medical checkup\""
        );
    }

    #[tokio::test]
    async fn empty_ledger_exports_header_only() {
        let response = export_transactions_endpoint(State(ledger_state_with(Ledger::new())))
            .await
            .unwrap();

        let body = get_body_text(response).await;
        assert_eq!(body, "Date,Category,Amount,Status,Description");
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let mut state = ledger_state();
        state.local_timezone = "Not/AZone".to_owned();

        let result = export_transactions_endpoint(State(state)).await;

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Not/AZone".to_owned()))
        );
    }
}
