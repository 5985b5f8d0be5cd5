//! Sets up the application's database.

use rusqlite::Connection;

use crate::{Error, theme::create_preference_table};

/// Create the application tables if they do not exist yet.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_preference_table(connection)?;

    tracing::debug!("database initialized");

    Ok(())
}
