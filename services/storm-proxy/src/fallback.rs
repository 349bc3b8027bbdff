//! Ordered upstream fallback.
//!
//! NHC products move between servers and disappear between advisories, so
//! each product is fetched from a list of candidate URLs. A source counts as
//! failed if the fetch fails or if its payload cannot be translated; the
//! chain then moves on to the next one.

use metrics::counter;
use tracing::{info, warn};

use crate::error::{Attempt, ProxyError, ProxyResult};
use crate::upstream::Upstream;

/// A translated value together with the URL it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: String,
}

/// Candidate URLs for one product, tried in order.
pub struct FallbackChain<'a> {
    product: &'static str,
    urls: Vec<String>,
    upstream: &'a dyn Upstream,
}

impl<'a> FallbackChain<'a> {
    pub fn new(product: &'static str, urls: Vec<String>, upstream: &'a dyn Upstream) -> Self {
        Self {
            product,
            urls,
            upstream,
        }
    }

    /// Return the first source whose payload `translate` accepts.
    ///
    /// Fails with [`ProxyError::SourcesExhausted`] listing every attempt when
    /// no source succeeds.
    pub async fn first_success<T, F>(&self, translate: F) -> ProxyResult<Sourced<T>>
    where
        F: Fn(&[u8]) -> ProxyResult<T>,
    {
        let mut attempts = Vec::with_capacity(self.urls.len());

        for url in &self.urls {
            counter!("storm_proxy_upstream_requests_total", "product" => self.product)
                .increment(1);

            let outcome = match self.upstream.fetch_bytes(url).await {
                Ok(body) => translate(&body),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(value) => {
                    if !attempts.is_empty() {
                        counter!("storm_proxy_fallbacks_total", "product" => self.product)
                            .increment(1);
                    }
                    info!(product = self.product, source = %url, "Served from upstream");
                    return Ok(Sourced {
                        value,
                        source: url.clone(),
                    });
                }
                Err(e) => {
                    counter!("storm_proxy_upstream_failures_total", "product" => self.product)
                        .increment(1);
                    warn!(
                        product = self.product,
                        source = %url,
                        error = %e,
                        "Upstream source failed"
                    );
                    attempts.push(Attempt {
                        url: url.clone(),
                        message: e.to_string(),
                        absent: e.is_absence(),
                    });
                }
            }
        }

        Err(ProxyError::SourcesExhausted {
            product: self.product.to_string(),
            attempts,
        })
    }
}
