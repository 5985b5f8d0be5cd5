//! The transaction list and the endpoints for changing it.
//!
//! Each endpoint that changes the ledger renders the [LedgerEvent](crate::ledger::LedgerEvent)
//! it gets back as an out-of-band update of the transaction table, so the
//! table always shows exactly what the ledger holds.

mod create_endpoint;
mod export_endpoint;
mod form;
mod new_page;
mod remove_endpoint;
mod table;

#[cfg(test)]
mod test_utils;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

pub use create_endpoint::create_transaction_endpoint;
pub use export_endpoint::export_transactions_endpoint;
pub use new_page::get_new_transaction_form;
pub use remove_endpoint::remove_last_transaction_endpoint;
pub use table::transactions_view;

use crate::{AppState, ledger::Ledger};

/// The state needed to read or change the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The transactions shown on the dashboard.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
