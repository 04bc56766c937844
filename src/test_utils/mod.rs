#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;

pub(crate) use html::{assert_valid_html, parse_html_document, table_body_rows};
pub(crate) use http::{assert_attachment, assert_content_type, assert_status_ok, response_bytes};
