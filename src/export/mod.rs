//! Downloads of the filtered expense list as an Excel workbook or a PDF document.
//!
//! Both exports take the same `date` and `department` query parameters as the
//! dashboard, so the buttons on the page export exactly the rows on display.

mod document;
mod helvetica;
mod spreadsheet;

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseFilter, get_filtered_expenses},
};

use document::{DOCUMENT_CONTENT_TYPE, DOCUMENT_FILE_NAME, build_document};
use spreadsheet::{SPREADSHEET_CONTENT_TYPE, SPREADSHEET_FILE_NAME, build_spreadsheet};

/// The state needed for exporting expenses.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The shared expense list.
    pub expenses: Arc<Mutex<Vec<Expense>>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
        }
    }
}

/// Download the filtered expenses as `Filtered_Expenses_Report.xlsx`.
pub async fn export_spreadsheet(
    State(state): State<ExportState>,
    Query(filter): Query<ExpenseFilter>,
) -> Result<Response, Error> {
    let expenses = get_filtered_expenses(&state.expenses, &filter)?;
    let bytes = build_spreadsheet(&expenses)?;

    tracing::info!(
        "Exported {} expenses to {SPREADSHEET_FILE_NAME}",
        expenses.len()
    );

    Ok(attachment(SPREADSHEET_CONTENT_TYPE, SPREADSHEET_FILE_NAME, bytes))
}

/// Download the filtered expenses as `Filtered_Expenses_Report.pdf`.
pub async fn export_document(
    State(state): State<ExportState>,
    Query(filter): Query<ExpenseFilter>,
) -> Result<Response, Error> {
    let expenses = get_filtered_expenses(&state.expenses, &filter)?;
    let bytes = build_document(&expenses)?;

    tracing::info!(
        "Exported {} expenses to {DOCUMENT_FILE_NAME}",
        expenses.len()
    );

    Ok(attachment(DOCUMENT_CONTENT_TYPE, DOCUMENT_FILE_NAME, bytes))
}

/// A response that makes the browser save `bytes` as `file_name`.
fn attachment(content_type: &str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (CONTENT_TYPE, content_type.to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
