//! HTTP request handlers for the storm proxy.

pub mod dispatch;
pub mod ensemble;
pub mod geojson;
pub mod health;
pub mod storms;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

/// Header naming the upstream URL a response was translated from.
pub const UPSTREAM_SOURCE_HEADER: &str = "x-upstream-source";

/// Serialize a successful product body with cache and provenance headers.
pub(crate) fn product_response<T: Serialize>(
    state: &AppState,
    content_type: &'static str,
    source: &str,
    body: T,
) -> Response {
    let mut response = Json(body).into_response();
    if !response.status().is_success() {
        // Json already rendered a serialization failure
        return response;
    }

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Ok(value) = HeaderValue::from_str(&state.cache_control()) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if let Ok(value) = HeaderValue::from_str(source) {
        headers.insert(UPSTREAM_SOURCE_HEADER, value);
    }
    response
}
