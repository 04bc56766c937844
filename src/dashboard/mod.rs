//! Dashboard module
//!
//! The expense dashboard: a date and department filter, export buttons and
//! the filtered report table.

mod handlers;
mod table;

pub use handlers::get_dashboard_page;
