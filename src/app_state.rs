//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::expense::Expense;

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The expense list shown on the dashboard.
    ///
    /// The list is only ever replaced as a whole, never edited in place.
    pub expenses: Arc<Mutex<Vec<Expense>>>,
}

impl AppState {
    /// Create a new [AppState] holding `expenses`.
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Arc::new(Mutex::new(expenses)),
        }
    }
}
