//! Filtering expenses by date and department.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::Error;

use super::models::Expense;

/// The active dashboard filter.
///
/// An empty field places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Only keep expenses with exactly this date.
    #[serde(default)]
    pub date: String,
    /// Only keep expenses from exactly this department.
    #[serde(default)]
    pub department: String,
}

impl ExpenseFilter {
    /// Whether `expense` passes the filter.
    ///
    /// Matching is exact string equality; there is no range, fuzzy or
    /// case-insensitive matching.
    pub fn matches(&self, expense: &Expense) -> bool {
        let date_matches = self.date.is_empty() || expense.date == self.date;
        let department_matches =
            self.department.is_empty() || expense.department == self.department;

        date_matches && department_matches
    }

    /// Whether neither field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.department.is_empty()
    }

    /// Encode the filter as a URL query string, e.g. "date=2024-01-01&department=F%26B".
    ///
    /// Returns an empty string for an empty filter.
    pub fn to_query_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        serde_urlencoded::to_string(self)
            .inspect_err(|error| tracing::error!("Could not encode filter {:?}: {error}", self))
            .unwrap_or_default()
    }

    /// Append the filter to `route` as a query string.
    pub fn to_url(&self, route: &str) -> String {
        let query = self.to_query_string();

        if query.is_empty() {
            route.to_owned()
        } else {
            format!("{route}?{query}")
        }
    }
}

/// Keep the expenses that pass `filter`, preserving their order.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect()
}

/// Take a filtered snapshot of the shared expense list.
///
/// The lock is held only while the list is filtered and copied.
///
/// # Errors
/// Returns [Error::ExpenseLockError] if the lock is poisoned.
pub fn get_filtered_expenses(
    expenses: &Mutex<Vec<Expense>>,
    filter: &ExpenseFilter,
) -> Result<Vec<Expense>, Error> {
    let expenses = expenses
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense lock: {error}"))
        .map_err(|_| Error::ExpenseLockError)?;

    Ok(filter_expenses(&expenses, filter))
}
