//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Bodies longer than this many bytes are truncated in the `info` log.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body is logged at the `debug` level. Bodies that are not
/// text, such as the exported workbooks and PDFs, are logged by size only.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = match read_body(body).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    log_request(&parts, &describe_body(&parts.headers, &body));

    let request = Request::from_parts(parts, Body::from(body));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body = match read_body(body).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    log_response(&parts, &describe_body(&parts.headers, &body));

    Response::from_parts(parts, Body::from(body))
}

async fn read_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

/// What a logged body looks like.
#[derive(Debug, PartialEq)]
enum BodyDescription {
    Text(String),
    Binary(usize),
}

fn describe_body(headers: &HeaderMap, body: &Bytes) -> BodyDescription {
    if is_text_content(headers) {
        BodyDescription::Text(String::from_utf8_lossy(body).to_string())
    } else {
        BodyDescription::Binary(body.len())
    }
}

/// Whether the `Content-Type` header names a text format. Bodies without the
/// header (e.g. redirects and empty requests) count as text.
fn is_text_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return true;
    };

    content_type.starts_with("text/")
        || content_type.starts_with("application/json")
        || content_type.starts_with("application/x-www-form-urlencoded")
}

/// The longest prefix of `text` that is at most [LOG_BODY_LENGTH_LIMIT] bytes
/// and ends on a character boundary.
fn truncate(text: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &BodyDescription) {
    match body {
        BodyDescription::Text(text) if text.len() > LOG_BODY_LENGTH_LIMIT => {
            tracing::info!(
                "Received request: {parts:#?}\nbody: {:}...",
                truncate(text)
            );
            tracing::debug!("Full request body: {text:?}");
        }
        BodyDescription::Text(text) => {
            tracing::info!("Received request: {parts:#?}\nbody: {text:?}");
        }
        BodyDescription::Binary(length) => {
            tracing::info!("Received request: {parts:#?}\nbody: <{length} bytes>");
        }
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &BodyDescription) {
    match body {
        BodyDescription::Text(text) if text.len() > LOG_BODY_LENGTH_LIMIT => {
            tracing::info!(
                "Sending response: {parts:#?}\nbody: {:}...",
                truncate(text)
            );
            tracing::debug!("Full response body: {text:?}");
        }
        BodyDescription::Text(text) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {text:?}");
        }
        BodyDescription::Binary(length) => {
            tracing::info!("Sending response: {parts:#?}\nbody: <{length} bytes>");
        }
    }
}
