//! Application state for the storm proxy.

use std::sync::Arc;

use anyhow::Result;

use crate::config::ProxyConfig;
use crate::upstream::{HttpUpstream, Upstream};

/// Shared application state.
pub struct AppState {
    /// Upstream URLs, client and cache settings.
    pub config: ProxyConfig,

    /// Where raw product bytes come from.
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    /// Build state with an explicit upstream.
    pub fn new(config: ProxyConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self { config, upstream }
    }

    /// Build state that fetches from the network.
    pub fn from_config(config: ProxyConfig) -> Result<Self> {
        let upstream = Arc::new(HttpUpstream::new(&config.upstream)?);
        Ok(Self::new(config, upstream))
    }

    /// `Cache-Control` value for successful responses.
    pub fn cache_control(&self) -> String {
        self.config.cache.header_value()
    }
}
