//! The transaction record type and the values it is built from.

use std::fmt::Display;

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The categories offered by the transaction form.
pub const CATEGORIES: [&str; 5] = ["Food", "Health", "Shopping", "Entertainment", "Others"];

/// The format of dates shown in the transaction table and CSV export, e.g. "Jan 25 2025".
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none] [year]");

/// The format of dates submitted by the browser's date picker, e.g. "2025-01-25".
const FORM_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// An amount of money, guaranteed to be finite and zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `value` is NaN, infinite or negative.
    pub fn new(value: f64) -> Result<Self, Error> {
        if value.is_finite() && value >= 0.0 {
            // Avoids displaying "-0.00" for negative zero.
            Ok(Self(value.abs()))
        } else {
            Err(Error::InvalidAmount(value.to_string()))
        }
    }

    /// Parse an amount from text entered by the user.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `text` is not a number or if the
    /// number is not a valid amount.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();

        trimmed
            .parse::<f64>()
            .ok()
            .and_then(|value| Self::new(value).ok())
            .ok_or_else(|| Error::InvalidAmount(trimmed.to_owned()))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for Amount {
    /// Formats the amount with exactly two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The outcome of a transaction. Only successful transactions are recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Success,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "Success"),
        }
    }
}

/// One financial event in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The date formatted for display, e.g. "Jan 25 2025".
    pub date: String,
    pub category: String,
    pub amount: Amount,
    pub status: Status,
    pub description: String,
}

impl TransactionRecord {
    /// Create a successful transaction record.
    pub fn new(date: &str, category: &str, amount: Amount, description: &str) -> Self {
        Self {
            date: date.to_owned(),
            category: category.to_owned(),
            amount,
            status: Status::Success,
            description: description.to_owned(),
        }
    }
}

/// Format `date` the way dates are displayed in the ledger, e.g. "Jan 25 2025".
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|error| {
            tracing::error!("could not format date {date}: {error}");
            date.to_string()
        })
}

/// Parse a date submitted by a date picker, e.g. "2025-01-25".
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` is not a date in the format YYYY-MM-DD.
pub fn parse_form_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), FORM_DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Format `date` for a date picker's `value` attribute, e.g. "2025-01-25".
pub fn format_form_date(date: Date) -> String {
    date.format(FORM_DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format date {date}: {error}");
        date.to_string()
    })
}

/// The transactions the ledger starts with.
pub fn seed_records() -> Vec<TransactionRecord> {
    [
        ("Jan 25 2025", "Health", 500.0, "Medical checkup"),
        ("Feb 5 2025", "Shopping", 800.0, "Clothes purchase"),
        ("Feb 12 2025", "Food", 300.0, "Restaurant dinner"),
        ("Mar 1 2025", "Entertainment", 450.0, "Movie tickets"),
        ("Mar 15 2025", "Others", 200.0, "Miscellaneous"),
    ]
    .into_iter()
    .map(|(date, category, amount, description)| {
        TransactionRecord::new(date, category, Amount(amount), description)
    })
    .collect()
}
