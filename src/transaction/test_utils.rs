use std::sync::{Arc, Mutex};

use crate::{ledger::Ledger, transaction::LedgerState};

/// A ledger state holding the seed transactions in the UTC timezone.
pub(super) fn ledger_state() -> LedgerState {
    ledger_state_with(Ledger::seeded())
}

pub(super) fn ledger_state_with(ledger: Ledger) -> LedgerState {
    LedgerState {
        ledger: Arc::new(Mutex::new(ledger)),
        local_timezone: "Etc/UTC".to_owned(),
    }
}
