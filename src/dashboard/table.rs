//! The "Filtered Report" table.

use maud::{Markup, html};

use crate::{
    expense::Expense,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
};

/// The table columns, in display order.
const REPORT_COLUMNS: [&str; 5] = ["Date", "Department", "Description", "Amount", "Day"];

/// The text of the single row shown when no expenses pass the filter.
pub(super) const NO_DATA_MESSAGE: &str = "No data found.";

/// Renders one row per expense, or a placeholder row spanning every column
/// when `expenses` is empty.
pub(super) fn report_table(expenses: &[Expense]) -> Markup {
    html! {
        table class="w-full text-sm" {
            thead {
                tr class=(TABLE_HEADER_STYLE) {
                    @for column in REPORT_COLUMNS {
                        th scope="col" class=(TABLE_CELL_STYLE) { (column) }
                    }
                }
            }
            tbody {
                @for expense in expenses {
                    tr class=(TABLE_ROW_STYLE) {
                        td class=(TABLE_CELL_STYLE) { (expense.date) }
                        td class=(TABLE_CELL_STYLE) { (expense.department) }
                        td class=(TABLE_CELL_STYLE) { (expense.description) }
                        td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (expense.display_amount()) }
                        td class=(TABLE_CELL_STYLE) { (expense.day) }
                    }
                }

                @if expenses.is_empty() {
                    tr {
                        td colspan=(REPORT_COLUMNS.len()) class="text-center py-4 text-gray-400" {
                            (NO_DATA_MESSAGE)
                        }
                    }
                }
            }
        }
    }
}
