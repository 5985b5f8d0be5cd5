//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, ledger::Ledger};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection, used for the theme preference.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The transactions shown on the dashboard.
    ///
    /// The ledger is kept in memory and starts from the example transactions
    /// each time the server starts.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection and a ledger
    /// holding the example transactions.
    ///
    /// This function will initialize the database by adding the tables for the preferences.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            ledger: Arc::new(Mutex::new(Ledger::seeded())),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
