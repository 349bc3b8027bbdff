//! Active storm list handler.

use std::sync::Arc;

use axum::{extract::Extension, response::Response};
use metrics::counter;
use storm_common::media_types;
use tracing::instrument;

use super::product_response;
use crate::error::ProxyResult;
use crate::fallback::Sourced;
use crate::products::{self, Product};
use crate::state::AppState;

/// GET /api/storms
pub async fn active_storms_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> ProxyResult<Response> {
    respond(&state).await
}

#[instrument(skip(state))]
pub(crate) async fn respond(state: &AppState) -> ProxyResult<Response> {
    counter!("storm_proxy_requests_total", "operation" => Product::ActiveStorms.as_str())
        .increment(1);

    let Sourced { value, source } = products::active_storms(state).await?;
    tracing::info!(storms = value.active_storms.len(), "Active storms");
    Ok(product_response(state, media_types::JSON, &source, value))
}
