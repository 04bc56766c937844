//! JSON endpoints for reading and replacing the expense list.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};

use crate::{AppState, Error};

use super::models::Expense;

/// The state needed to read and replace the expense list.
#[derive(Debug, Clone)]
pub struct ExpenseListState {
    /// The shared expense list.
    pub expenses: Arc<Mutex<Vec<Expense>>>,
}

impl FromRef<AppState> for ExpenseListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
        }
    }
}

/// Get the full, unfiltered expense list.
pub async fn get_expenses(
    State(state): State<ExpenseListState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let expenses = state
        .expenses
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense lock: {error}"))
        .map_err(|_| Error::ExpenseLockError)?;

    Ok(Json(expenses.clone()))
}

/// Replace the whole expense list with the one in the request body.
pub async fn replace_expenses(
    State(state): State<ExpenseListState>,
    Json(new_expenses): Json<Vec<Expense>>,
) -> Result<StatusCode, Error> {
    let mut expenses = state
        .expenses
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense lock: {error}"))
        .map_err(|_| Error::ExpenseLockError)?;

    tracing::info!(
        "Replacing {} expenses with {} expenses",
        expenses.len(),
        new_expenses.len()
    );
    *expenses = new_expenses;

    Ok(StatusCode::NO_CONTENT)
}
