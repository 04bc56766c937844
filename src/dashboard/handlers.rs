//! Dashboard HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::table::report_table,
    department::DEPARTMENTS,
    endpoints,
    expense::{Expense, ExpenseFilter, get_filtered_expenses},
    html::{
        BUTTON_EXCEL_STYLE, BUTTON_PDF_STYLE, FORM_CONTROL_STYLE, PAGE_CONTAINER_STYLE, base,
    },
};

/// The page heading.
const DASHBOARD_HEADING: &str = "🎬 DARKWAVE PICTURES EXPENSES DASHBOARD";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The shared expense list.
    pub expenses: Arc<Mutex<Vec<Expense>>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
        }
    }
}

/// Display the expenses that match the `date` and `department` query
/// parameters, with controls for changing the filter and exporting the result.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(filter): Query<ExpenseFilter>,
) -> Result<Response, Error> {
    let expenses = get_filtered_expenses(&state.expenses, &filter)?;

    Ok(dashboard_view(&filter, &expenses).into_response())
}

fn dashboard_view(filter: &ExpenseFilter, expenses: &[Expense]) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold" { (DASHBOARD_HEADING) }

            (filter_form(filter))

            div class="flex gap-3"
            {
                a
                    href=(filter.to_url(endpoints::EXPORT_PDF))
                    class=(BUTTON_PDF_STYLE)
                {
                    "Export PDF"
                }

                a
                    href=(filter.to_url(endpoints::EXPORT_XLSX))
                    class=(BUTTON_EXCEL_STYLE)
                {
                    "Export Excel"
                }
            }

            section
                id="filtered-report"
                class="bg-white dark:bg-gray-800 rounded shadow p-4 overflow-x-auto"
            {
                h2 class="text-lg font-semibold mb-4" { "Filtered Report" }

                (report_table(expenses))
            }
        }
    );

    base("Dashboard", &content)
}

/// The date and department controls. Changing either one reloads the page
/// with the new filter in the query string.
fn filter_form(filter: &ExpenseFilter) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::DASHBOARD_VIEW)
            class="flex flex-wrap gap-4"
        {
            label class="flex flex-col text-sm gap-1"
            {
                "Date"
                input
                    type="date"
                    name="date"
                    value=(filter.date)
                    onchange="this.form.requestSubmit()"
                    class=(FORM_CONTROL_STYLE);
            }

            label class="flex flex-col text-sm gap-1"
            {
                "Department"
                select
                    name="department"
                    onchange="this.form.requestSubmit()"
                    class=(FORM_CONTROL_STYLE)
                {
                    option value="" selected[filter.department.is_empty()] { "All Departments" }

                    @for department in &DEPARTMENTS {
                        option
                            value=(department.name)
                            selected[filter.department == department.name]
                        {
                            (department.name)
                        }
                    }
                }
            }
        }
    )
}
