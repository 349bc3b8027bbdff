//! GEFS ensemble track handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use metrics::counter;
use storm_common::{media_types, StormId};
use tracing::{info, instrument};

use super::product_response;
use crate::error::ProxyResult;
use crate::products::{self, Product};
use crate::state::AppState;

/// GET /api/storms/:storm_id/ensemble
pub async fn ensemble_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(storm_id): Path<String>,
) -> ProxyResult<Response> {
    respond(&state, &StormId::parse(&storm_id)?).await
}

#[instrument(skip(state, storm_id), fields(storm_id = %storm_id))]
pub(crate) async fn respond(state: &AppState, storm_id: &StormId) -> ProxyResult<Response> {
    counter!("storm_proxy_requests_total", "operation" => Product::Ensemble.as_str())
        .increment(1);

    let envelope = products::ensemble(state, storm_id).await?;
    info!(
        cycle = %envelope.cycle,
        members = envelope.tracks.len(),
        "Parsed ensemble tracks"
    );

    let source = envelope.source.clone();
    Ok(product_response(state, media_types::JSON, &source, envelope))
}
