//! Upstream HTTP access.

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::error::{ProxyError, ProxyResult};

/// Source of raw upstream bytes.
///
/// The router only talks to this trait so tests can substitute canned
/// responses for NHC's servers.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch the full body at `url`. Non-success statuses are errors.
    async fn fetch_bytes(&self, url: &str) -> ProxyResult<Bytes>;
}

/// [`Upstream`] backed by a shared reqwest client.
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(4)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    #[instrument(skip(self))]
    async fn fetch_bytes(&self, url: &str) -> ProxyResult<Bytes> {
        let transport_error = |e: reqwest::Error| ProxyError::Upstream {
            url: url.to_string(),
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Upstream {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        debug!(bytes = body.len(), "Fetched upstream body");
        Ok(body)
    }
}
