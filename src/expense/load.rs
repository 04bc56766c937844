//! Load the initial expense list from a CSV or JSON file.

use std::{fs, io::Read, path::Path};

use serde::Deserialize;

use crate::Error;

use super::models::{Amount, Expense};

/// One row of an expense CSV file. Every cell is read as text.
#[derive(Debug, Deserialize)]
struct ExpenseCsvRow {
    date: String,
    department: String,
    description: String,
    amount: String,
    day: String,
}

impl From<ExpenseCsvRow> for Expense {
    fn from(row: ExpenseCsvRow) -> Self {
        Self {
            date: row.date,
            department: row.department,
            description: row.description,
            amount: Amount::from_field(&row.amount),
            day: row.day,
        }
    }
}

/// Load expenses from the file at `path`.
///
/// Files with a `.json` extension must hold a JSON array of expenses. Any
/// other file is read as CSV with the header
/// `date,department,description,amount,day` (columns may appear in any order).
///
/// # Errors
/// Returns [Error::Io] if the file cannot be read, or [Error::InvalidJSON] /
/// [Error::InvalidCSV] if its contents cannot be parsed.
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>, Error> {
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    let text = fs::read_to_string(path)
        .map_err(|error| Error::Io(format!("could not read {}: {error}", path.display())))?;

    let expenses = if is_json {
        parse_json_expenses(&text)?
    } else {
        parse_csv_expenses(text.as_bytes())?
    };

    tracing::info!("Loaded {} expenses from {}", expenses.len(), path.display());

    Ok(expenses)
}

/// Parse a JSON array of expenses.
pub fn parse_json_expenses(text: &str) -> Result<Vec<Expense>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidJSON(error.to_string()))
}

/// Parse CSV expense rows from `reader`.
///
/// Amount cells that are entirely numeric become numeric amounts, all other
/// amounts are kept as text.
pub fn parse_csv_expenses(reader: impl Read) -> Result<Vec<Expense>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    csv_reader
        .deserialize::<ExpenseCsvRow>()
        .enumerate()
        .map(|(index, row)| {
            row.map(Expense::from).map_err(|error| {
                // Row numbers are 1-based and skip the header.
                Error::InvalidCSV(format!("row {}: {error}", index + 2))
            })
        })
        .collect()
}
