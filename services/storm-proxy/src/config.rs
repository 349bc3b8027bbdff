//! Proxy configuration: upstream URL templates, HTTP client and cache settings.
//!
//! Every field has a built-in default pointing at NHC's public servers, so a
//! missing config file is not an error.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storm_common::StormId;

/// Root configuration loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub upstream: UpstreamConfig,
    pub sources: SourcesConfig,
    pub cache: CacheConfig,
}

impl ProxyConfig {
    /// Load configuration from a YAML file, falling back to defaults if absent.
    pub fn load(path: &str) -> Result<Self> {
        let file_path = Path::new(path);

        if !file_path.exists() {
            tracing::warn!("Config file {} does not exist, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read: {:?}", file_path))?;

        let config: ProxyConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", file_path))?;

        tracing::info!(
            track_sources = config.sources.track.len(),
            ensemble_sources = config.sources.ensemble.len(),
            "Loaded proxy config from {:?}",
            file_path
        );

        Ok(config)
    }
}

/// HTTP client settings for upstream fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            connect_timeout_secs: 10,
            user_agent: concat!("storm-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Ordered URL templates per product. The first entry is tried first.
///
/// Templates may use `{ID}` (`AL092025`), `{id}` (`al092025`), `{basin}`
/// (`al`), `{number}` (`09`) and `{year}` (`2025`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub active_storms: Vec<String>,
    pub track: Vec<String>,
    pub history: Vec<String>,
    pub cone: Vec<String>,
    pub ensemble: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            active_storms: vec!["https://www.nhc.noaa.gov/CurrentStorms.json".to_string()],
            track: vec![
                "https://www.nhc.noaa.gov/storm_graphics/api/{ID}_TRACK_latest.kmz".to_string(),
            ],
            history: vec![
                "https://www.nhc.noaa.gov/gis/best_track/{id}_best_track.kmz".to_string(),
                "https://www.nhc.noaa.gov/storm_graphics/api/{ID}_TRACK_latest.kmz".to_string(),
            ],
            cone: vec![
                "https://www.nhc.noaa.gov/storm_graphics/api/{ID}_CONE_latest.kmz".to_string(),
            ],
            ensemble: vec![
                "https://ftp.nhc.noaa.gov/atcf/aid_public/a{id}.dat.gz".to_string(),
                "https://hurricanes.ral.ucar.edu/repository/data/adecks_open/{year}/a{id}.dat"
                    .to_string(),
            ],
        }
    }
}

/// Response caching hints sent to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// `Cache-Control: max-age` in seconds.
    pub max_age_secs: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_age_secs: 300 }
    }
}

impl CacheConfig {
    pub fn header_value(&self) -> String {
        format!("public, max-age={}", self.max_age_secs)
    }
}

/// Substitute storm identifier placeholders in a URL template.
pub fn expand_template(template: &str, storm_id: &StormId) -> String {
    template
        .replace("{ID}", &storm_id.upper())
        .replace("{id}", &storm_id.lower())
        .replace("{basin}", &storm_id.basin.code().to_ascii_lowercase())
        .replace("{number}", &format!("{:02}", storm_id.number))
        .replace("{year}", &storm_id.year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_expand_template() {
        let id = StormId::parse("AL092025").unwrap();
        assert_eq!(
            expand_template("https://x/{year}/{basin}{number}/a{id}.dat#{ID}", &id),
            "https://x/2025/al09/aal092025.dat#AL092025"
        );
    }

    #[test]
    fn test_default_sources_cover_every_product() {
        let sources = SourcesConfig::default();
        assert_eq!(sources.active_storms.len(), 1);
        assert!(sources.track[0].contains("{ID}_TRACK_latest.kmz"));
        assert!(sources.cone[0].contains("{ID}_CONE_latest.kmz"));
        assert_eq!(sources.history.len(), 2);
        assert!(sources.ensemble[0].ends_with(".dat.gz"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ProxyConfig::load("/nonexistent/storm-proxy.yaml").unwrap();
        assert_eq!(config.cache.max_age_secs, 300);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "cache:\n  max_age_secs: 60\nsources:\n  cone:\n    - http://mirror/{{ID}}.kmz"
        )
        .unwrap();

        let config = ProxyConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.cache.max_age_secs, 60);
        assert_eq!(config.sources.cone, vec!["http://mirror/{ID}.kmz"]);
        assert_eq!(config.sources.track, SourcesConfig::default().track);
        assert_eq!(config.upstream.timeout_secs, 20);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/storm-proxy.yaml");
        let config = ProxyConfig::load(path).unwrap();
        let defaults = SourcesConfig::default();
        assert_eq!(config.sources.cone, defaults.cone);
        assert_eq!(config.sources.ensemble, defaults.ensemble);
        assert_eq!(config.sources.history, defaults.history);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cache: [not, a, map]").unwrap();
        assert!(ProxyConfig::load(file.path().to_str().unwrap()).is_err());
    }
}
