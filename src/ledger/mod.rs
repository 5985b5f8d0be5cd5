//! The in-memory transaction ledger.
//!
//! The ledger is an ordered list of [TransactionRecord]s. Records can only be
//! appended to the end or removed from the end, so insertion order is also
//! the order records are displayed and exported in.
//!
//! The ledger does not know how it is displayed. Each mutation returns a
//! [LedgerEvent] that callers use to bring any view of the ledger up to date.

mod csv_export;
mod record;

pub use csv_export::{suggest_filename, to_csv};
pub use record::{
    Amount, CATEGORIES, TransactionRecord, format_display_date, format_form_date,
    parse_form_date, seed_records,
};

use crate::Error;

/// A change made to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A record was added at `index`, which is now the last position.
    Appended { index: usize },
    /// The record at `index` was removed. It was the last record.
    Removed { index: usize },
}

/// An ordered, append and remove-last only collection of transactions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding the example transactions from [seed_records].
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Append `record` to the end of the ledger.
    pub fn add(&mut self, record: TransactionRecord) -> LedgerEvent {
        self.records.push(record);

        LedgerEvent::Appended {
            index: self.records.len() - 1,
        }
    }

    /// Remove the last record from the ledger and return it.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyLedger] if there are no records. The ledger is
    /// left unchanged.
    pub fn remove_last(&mut self) -> Result<(TransactionRecord, LedgerEvent), Error> {
        let record = self.records.pop().ok_or(Error::EmptyLedger)?;

        Ok((
            record,
            LedgerEvent::Removed {
                index: self.records.len(),
            },
        ))
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
