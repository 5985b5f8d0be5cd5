//! Exports the ledger as CSV.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, ledger::TransactionRecord};

const HEADERS: [&str; 5] = ["Date", "Category", "Amount", "Status", "Description"];

const FILENAME_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");

/// Convert `records` to CSV text with a header row.
///
/// Rows are separated by a single newline and there is no trailing newline.
/// Amounts have exactly two decimal places. The description is always
/// wrapped in double quotes, other fields are only quoted when they contain a
/// comma, a double quote or a line break. Double quotes inside a quoted field
/// are doubled.
///
/// # Errors
///
/// Returns [Error::CsvError] if a field cannot be encoded.
pub fn to_csv(records: &[TransactionRecord]) -> Result<String, Error> {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header = HEADERS
        .iter()
        .map(|header| encode_field(header, QuoteStyle::Necessary))
        .collect::<Result<Vec<_>, _>>()?;
    lines.push(header.join(","));

    for record in records {
        let fields = [
            encode_field(&record.date, QuoteStyle::Necessary)?,
            encode_field(&record.category, QuoteStyle::Necessary)?,
            encode_field(&record.amount.to_string(), QuoteStyle::Necessary)?,
            encode_field(&record.status.to_string(), QuoteStyle::Necessary)?,
            encode_field(&record.description, QuoteStyle::Always)?,
        ];
        lines.push(fields.join(","));
    }

    Ok(lines.join("\n"))
}

/// The name to save an export created on `date` as, e.g.
/// "MoneyMaster_Transactions_2025-03-07.csv".
pub fn suggest_filename(date: Date) -> String {
    let date_string = date.format(FILENAME_DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format date {date}: {error}");
        date.to_string()
    });

    format!("MoneyMaster_Transactions_{date_string}.csv")
}

/// Escape a single CSV field according to `quote_style`.
///
/// The field is written as a one-field record so the writer closes any open
/// quote, then the record terminator is stripped.
fn encode_field(field: &str, quote_style: QuoteStyle) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record([field])?;

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))?;

    match text.strip_suffix('\n') {
        Some(encoded) => Ok(encoded.to_owned()),
        None => Ok(text),
    }
}
