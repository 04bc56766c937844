//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    department::get_departments,
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    export::{export_document, export_spreadsheet},
    expense::{get_expenses, replace_expenses},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::EXPORT_XLSX, get(export_spreadsheet))
        .route(endpoints::EXPORT_PDF, get(export_document))
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses).put(replace_expenses),
        )
        .route(endpoints::DEPARTMENTS_API, get(get_departments))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState, endpoints,
        expense::Expense,
        routing::build_router,
        test_utils::{assert_valid_html, table_body_rows},
    };

    fn get_test_server(expenses: Vec<Expense>) -> TestServer {
        TestServer::new(build_router(AppState::new(expenses)))
            .expect("Could not create test server")
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::build("2024-01-01", "Props", "Tape", "50", "Mon"),
            Expense::build("2024-01-02", "F&B", "Lunch", "320.75", "Tue"),
        ]
    }

    #[tokio::test]
    async fn dashboard_reads_filter_from_query() {
        let server = get_test_server(sample_expenses());

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("department", "F&B")
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(
            table_body_rows(&html),
            vec![vec!["2024-01-02", "F&B", "Lunch", "RM 320.75", "Tue"]]
        );
    }

    #[tokio::test]
    async fn dashboard_treats_empty_parameters_as_unconstrained() {
        let server = get_test_server(sample_expenses());

        let response = server
            .get(&format!("{}?date=&department=", endpoints::DASHBOARD_VIEW))
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(table_body_rows(&html).len(), 2);
    }

    #[tokio::test]
    async fn replacing_expenses_updates_dashboard() {
        let server = get_test_server(sample_expenses());
        let replacement = vec![Expense::build(
            "2024-02-01",
            "Rental",
            "Dolly",
            "700",
            "Thu",
        )];

        server
            .put(endpoints::EXPENSES_API)
            .json(&replacement)
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;
        let html = Html::parse_document(&response.text());
        assert_eq!(
            table_body_rows(&html),
            vec![vec!["2024-02-01", "Rental", "Dolly", "RM 700", "Thu"]]
        );
    }

    #[tokio::test]
    async fn exports_are_attachments() {
        let server = get_test_server(sample_expenses());

        for (route, file_name) in [
            (endpoints::EXPORT_XLSX, "Filtered_Expenses_Report.xlsx"),
            (endpoints::EXPORT_PDF, "Filtered_Expenses_Report.pdf"),
        ] {
            let response = server.get(route).add_query_param("date", "2024-01-01").await;

            response.assert_status_ok();
            assert_eq!(
                response.header("content-disposition"),
                format!("attachment; filename=\"{file_name}\"")
            );
        }
    }

    #[tokio::test]
    async fn error_route_returns_500() {
        let server = get_test_server(vec![]);

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .expect_failure()
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = get_test_server(vec![]);

        server
            .get("/budget")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
