//! Expense records: the data model, amount handling, filtering, loading and
//! the JSON API for replacing the list.

mod amount;
mod endpoints;
mod filter;
mod load;
mod models;

pub use endpoints::{get_expenses, replace_expenses};
pub use filter::{ExpenseFilter, get_filtered_expenses};
pub use load::load_expenses;
pub use models::{Amount, Expense};
