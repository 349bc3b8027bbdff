//! Track, history and cone handlers (KMZ products served as GeoJSON).

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
use crate::fallback::Sourced;
use crate::products::{self, Product};
use crate::state::AppState;

/// GET /api/storms/:storm_id/track
pub async fn track_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(storm_id): Path<String>,
) -> ProxyResult<Response> {
    respond(&state, Product::Track, &StormId::parse(&storm_id)?).await
}

/// GET /api/storms/:storm_id/history
pub async fn history_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(storm_id): Path<String>,
) -> ProxyResult<Response> {
    respond(&state, Product::History, &StormId::parse(&storm_id)?).await
}

/// GET /api/storms/:storm_id/cone
pub async fn cone_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(storm_id): Path<String>,
) -> ProxyResult<Response> {
    respond(&state, Product::Cone, &StormId::parse(&storm_id)?).await
}

#[instrument(skip(state, storm_id), fields(storm_id = %storm_id))]
pub(crate) async fn respond(
    state: &AppState,
    product: Product,
    storm_id: &StormId,
) -> ProxyResult<Response> {
    counter!("storm_proxy_requests_total", "operation" => product.as_str()).increment(1);

    let Sourced { value, source } = products::storm_geojson(state, product, storm_id).await?;
    info!(features = value.len(), "Translated {} to GeoJSON", product);
    Ok(product_response(state, media_types::GEO_JSON, &source, value))
}
