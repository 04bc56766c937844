use axum::{
    body::Body,
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderName},
    },
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
fn header_text(response: &Response<Body>, name: HeaderName) -> &str {
    response
        .headers()
        .get(&name)
        .unwrap_or_else(|| panic!("Headers missing {name}"))
        .to_str()
        .unwrap_or_else(|error| panic!("Header {name} is not text: {error}"))
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(header_text(response, CONTENT_TYPE), content_type);
}

/// Check that `response` is a download of `file_name` with the given content type.
#[track_caller]
pub(crate) fn assert_attachment(response: &Response<Body>, content_type: &str, file_name: &str) {
    assert_status_ok(response);
    assert_content_type(response, content_type);
    assert_eq!(
        header_text(response, CONTENT_DISPOSITION),
        format!("attachment; filename=\"{file_name}\"")
    );
}

pub(crate) async fn response_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body")
        .to_vec()
}
