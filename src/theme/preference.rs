//! Theme preference storage.
//!
//! The preference table is a small key-value store. Only the theme is kept
//! in it at the moment.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, theme::Theme};

const THEME_KEY: &str = "theme";

/// Create the preference table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_preference_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS preference (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Gets the saved theme.
///
/// Returns [Theme::Light] if no theme has been saved yet, or if the saved
/// value is not a theme this version of the app knows about.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_theme(connection: &Connection) -> Result<Theme, Error> {
    let stored: Option<String> = connection
        .query_row(
            "SELECT value FROM preference WHERE key = ?1",
            [THEME_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let theme = match stored {
        Some(value) => Theme::from_stored(&value).unwrap_or_else(|| {
            tracing::warn!("Unknown theme \"{value}\" in preferences, using the light theme");
            Theme::default()
        }),
        None => Theme::default(),
    };

    Ok(theme)
}

/// Saves `theme`, replacing any previously saved theme.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn save_theme(theme: Theme, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO preference (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (THEME_KEY, theme.as_str()),
    )?;

    Ok(())
}

/// Switches to the other theme, saves it and returns it.
///
/// # Errors
/// Returns [Error::SqlError] if the saved theme cannot be read or written.
pub fn toggle_theme(connection: &Connection) -> Result<Theme, Error> {
    let theme = get_theme(connection)?.toggled();
    save_theme(theme, connection)?;
    tracing::info!("Switched to the {theme} theme");

    Ok(theme)
}
