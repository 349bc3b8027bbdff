//! Parsed ensemble track types.

use serde::{Deserialize, Serialize};

use crate::cycle::Cycle;

/// One A-deck line reduced to the fields the proxy serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub model_id: String,
    /// Forecast lead time in hours.
    pub tau: i32,
    pub lat: f64,
    pub lon: f64,
    /// Maximum sustained wind in knots.
    pub vmax: Option<i32>,
}

/// All points of one ensemble member, ascending and unique by tau.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTrack {
    pub model_id: String,
    pub points: Vec<TrackRecord>,
}

/// Ensemble tracks for the most recent cycle in an A-deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub models_present: Vec<String>,
    pub tracks: Vec<ModelTrack>,
    pub latest_cycle: Option<Cycle>,
}

impl ParseResult {
    /// The result for input with no usable cycle.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Look up a member's track by id.
    pub fn track(&self, model_id: &str) -> Option<&ModelTrack> {
        self.tracks.iter().find(|t| t.model_id == model_id)
    }
}
