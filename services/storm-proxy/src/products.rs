//! Product fetchers: upstream fallback plus core translation.
//!
//! Each function here resolves one proxy operation independent of how the
//! request arrived (path route or query-string dispatch).

use std::fmt;
use std::str::FromStr;

use atcf_parser::{decode_adeck_payload, parse_ensemble_tracks, ModelTrack};
use chrono::{DateTime, Utc};
use kml_parser::{cone_from_kmz, track_from_kmz};
use serde::Serialize;
use storm_common::{ActiveStorms, FeatureCollection, StormId};

use crate::config::expand_template;
use crate::error::{ProxyError, ProxyResult};
use crate::fallback::{FallbackChain, Sourced};
use crate::state::AppState;

/// Operations the proxy exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    ActiveStorms,
    Track,
    History,
    Cone,
    Ensemble,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::ActiveStorms => "storms",
            Product::Track => "track",
            Product::History => "history",
            Product::Cone => "cone",
            Product::Ensemble => "ensemble",
        }
    }

    /// Whether the operation needs a storm id.
    pub fn is_per_storm(&self) -> bool {
        !matches!(self, Product::ActiveStorms)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "storms" | "active" | "activestorms" => Ok(Product::ActiveStorms),
            "track" | "forecast" => Ok(Product::Track),
            "history" | "besttrack" => Ok(Product::History),
            "cone" => Ok(Product::Cone),
            "ensemble" | "gefs" => Ok(Product::Ensemble),
            _ => Err(ProxyError::UnknownOperation(s.to_string())),
        }
    }
}

/// Ensemble response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleResponse {
    pub storm_id: StormId,
    pub cycle: String,
    pub cycle_time: Option<DateTime<Utc>>,
    pub models_present: Vec<String>,
    pub tracks: Vec<ModelTrack>,
    pub source: String,
}

fn storm_urls(templates: &[String], storm_id: &StormId) -> Vec<String> {
    templates
        .iter()
        .map(|t| expand_template(t, storm_id))
        .collect()
}

/// Fetch the active storm list.
pub async fn active_storms(state: &AppState) -> ProxyResult<Sourced<ActiveStorms>> {
    let urls = state.config.sources.active_storms.clone();
    FallbackChain::new(Product::ActiveStorms.as_str(), urls, state.upstream.as_ref())
        .first_success(|body| {
            ActiveStorms::from_json(body).map_err(|e| ProxyError::MalformedPayload(e.to_string()))
        })
        .await
}

/// Fetch a KMZ product and translate it to GeoJSON.
pub async fn storm_geojson(
    state: &AppState,
    product: Product,
    storm_id: &StormId,
) -> ProxyResult<Sourced<FeatureCollection>> {
    let sources = &state.config.sources;
    let templates = match product {
        Product::Track => &sources.track,
        Product::History => &sources.history,
        Product::Cone => &sources.cone,
        other => return Err(ProxyError::UnknownOperation(other.to_string())),
    };

    FallbackChain::new(
        product.as_str(),
        storm_urls(templates, storm_id),
        state.upstream.as_ref(),
    )
    .first_success(|body| {
        let collection = match product {
            Product::Cone => cone_from_kmz(body)?,
            _ => track_from_kmz(body)?,
        };
        Ok(collection)
    })
    .await
}

/// Fetch the A-deck and extract the latest GEFS ensemble cycle.
///
/// A source whose A-deck holds no ensemble members for its latest cycle
/// counts as absent, so a mirror with a fresher file still gets a chance.
pub async fn ensemble(state: &AppState, storm_id: &StormId) -> ProxyResult<EnsembleResponse> {
    let urls = storm_urls(&state.config.sources.ensemble, storm_id);

    let Sourced { value, source } =
        FallbackChain::new(Product::Ensemble.as_str(), urls, state.upstream.as_ref())
            .first_success(|body| {
                let text = decode_adeck_payload(body)?;
                let result = parse_ensemble_tracks(&text);
                if result.is_empty() {
                    return Err(ProxyError::NoData(format!(
                        "no GEFS ensemble tracks for {}",
                        storm_id
                    )));
                }
                Ok(result)
            })
            .await?;

    let cycle = value.latest_cycle.ok_or_else(|| {
        ProxyError::NoData(format!("no forecast cycle for {}", storm_id))
    })?;

    Ok(EnsembleResponse {
        storm_id: *storm_id,
        cycle_time: cycle.to_datetime().ok(),
        cycle: cycle.as_str().to_string(),
        models_present: value.models_present,
        tracks: value.tracks,
        source,
    })
}
