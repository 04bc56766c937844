//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The expense dashboard with the filter controls and the filtered report.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to download the filtered expenses as an Excel workbook.
pub const EXPORT_XLSX: &str = "/api/export/xlsx";
/// The route to download the filtered expenses as a PDF document.
pub const EXPORT_PDF: &str = "/api/export/pdf";
/// The route to read or replace the expense list.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to list the production departments.
pub const DEPARTMENTS_API: &str = "/api/departments";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);

        assert_endpoint_is_valid_uri(endpoints::EXPORT_XLSX);
        assert_endpoint_is_valid_uri(endpoints::EXPORT_PDF);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::DEPARTMENTS_API);
    }
}
