use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

use super::http::response_bytes;

/// Parse the response body as a full HTML page.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response_bytes(response).await;

    Html::parse_document(&String::from_utf8_lossy(&body))
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "HTML has {} parse errors: {:?}",
        html.errors.len(),
        html.errors
    );
}

/// The text of each cell for every row in the body of the first table.
#[track_caller]
pub(crate) fn table_body_rows(html: &Html) -> Vec<Vec<String>> {
    let row_selector = Selector::parse("table tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    html.select(&row_selector)
        .map(|row: ElementRef<'_>| {
            row.select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_owned())
                .collect()
        })
        .collect()
}
