//! Query-string dispatch: `/api?endpoint=<op>&stormId=<id>`.
//!
//! Older front ends call a single endpoint and select the product by query
//! parameter; this routes them to the same operations as the path routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Response,
};
use serde::Deserialize;
use storm_common::StormId;

use super::{ensemble, geojson, storms};
use crate::error::{ProxyError, ProxyResult};
use crate::products::Product;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQuery {
    pub endpoint: Option<String>,
    pub storm_id: Option<String>,
}

/// GET /api
pub async fn api_dispatch_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<ApiQuery>,
) -> ProxyResult<Response> {
    let product: Product = query
        .endpoint
        .as_deref()
        .ok_or_else(|| ProxyError::MissingParameter("endpoint".to_string()))?
        .parse()?;

    if !product.is_per_storm() {
        return storms::respond(&state).await;
    }

    let storm_id = query
        .storm_id
        .as_deref()
        .ok_or_else(|| ProxyError::MissingParameter("stormId".to_string()))?;
    let storm_id = StormId::parse(storm_id)?;

    match product {
        Product::Ensemble => ensemble::respond(&state, &storm_id).await,
        _ => geojson::respond(&state, product, &storm_id).await,
    }
}
