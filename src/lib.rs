//! Darkwave Pictures expense dashboard.
//!
//! A small web app that shows a production's expenses in a table, filtered by
//! date and department, and exports the filtered list as an Excel workbook or
//! a PDF document.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod department;
mod endpoints;
mod error_pages;
mod export;
mod expense;
mod html;
mod logging;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use expense::{Amount, Expense, ExpenseFilter, load_expenses};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::error_pages::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Could not acquire the expense list lock because another thread
    /// panicked while holding it.
    #[error("could not acquire the expense list lock")]
    ExpenseLockError,

    /// The Excel workbook could not be written.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not write the spreadsheet: {0}")]
    SpreadsheetExport(String),

    /// The PDF document could not be written.
    #[error("could not write the PDF document: {0}")]
    DocumentExport(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// The JSON file was not an array of expense records.
    #[error("Could not parse the JSON file: {0}")]
    InvalidJSON(String),

    /// A file could not be opened or read.
    #[error("could not read file: {0}")]
    Io(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An error occurred while handling a request: {}", self);

        match self {
            Error::SpreadsheetExport(_) | Error::DocumentExport(_) => InternalServerError {
                description: "Export Failed",
                fix: "The report could not be created. Try again or check the server logs.",
            }
            .into_response(),
            // Load errors only happen at start up, so these get the generic page too.
            _ => InternalServerError::default().into_response(),
        }
    }
}
