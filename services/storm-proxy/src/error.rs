//! Proxy error types and their HTTP rendering.

use atcf_parser::AtcfError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use kml_parser::KmlError;
use serde::Serialize;
use storm_common::StormIdError;
use thiserror::Error;

/// Result type alias using ProxyError.
pub type ProxyResult<T> = Result<T, ProxyError>;

/// One failed upstream source in a fallback chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub url: String,
    pub message: String,
    /// The source answered but had nothing for this storm.
    pub absent: bool,
}

/// Errors surfaced by the proxy.
#[derive(Debug, Error)]
pub enum ProxyError {
    // === Request Errors ===
    #[error("Invalid storm id: {0}")]
    InvalidStormId(#[from] StormIdError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    // === Upstream Errors ===
    #[error("Upstream request to {url} failed: {message}")]
    Upstream {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("All {} sources failed for {product}", .attempts.len())]
    SourcesExhausted {
        product: String,
        attempts: Vec<Attempt>,
    },

    // === Translation Errors ===
    #[error(transparent)]
    Kml(#[from] KmlError),

    #[error(transparent)]
    Atcf(#[from] AtcfError),

    #[error("No data: {0}")]
    NoData(String),
}

impl ProxyError {
    /// Whether the upstream simply has nothing for the request (as opposed to
    /// being broken).
    pub fn is_absence(&self) -> bool {
        match self {
            ProxyError::Upstream { status, .. } => *status == Some(404),
            ProxyError::Kml(e) => e.is_absence(),
            ProxyError::NoData(_) => true,
            ProxyError::SourcesExhausted { attempts, .. } => {
                attempts.last().map(|a| a.absent).unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidStormId(_)
            | ProxyError::UnknownOperation(_)
            | ProxyError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ProxyError::NoData(_) => StatusCode::NOT_FOUND,
            ProxyError::SourcesExhausted { .. } if self.is_absence() => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ProxyError::InvalidStormId(_) => "InvalidStormId",
            ProxyError::UnknownOperation(_) => "UnknownOperation",
            ProxyError::MissingParameter(_) => "MissingParameter",
            ProxyError::Upstream { .. } => "UpstreamError",
            ProxyError::MalformedPayload(_) => "MalformedPayload",
            ProxyError::SourcesExhausted { .. } => "SourcesExhausted",
            ProxyError::Kml(_) => "KmlError",
            ProxyError::Atcf(_) => "AtcfError",
            ProxyError::NoData(_) => "NoData",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    attempts: Option<&'a [Attempt]>,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.http_status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let attempts = match &self {
            ProxyError::SourcesExhausted { attempts, .. } => Some(attempts.as_slice()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
            attempts,
        };

        (
            status,
            [(header::CACHE_CONTROL, "no-store")],
            Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(absent: bool) -> Attempt {
        Attempt {
            url: "https://example.test/a".to_string(),
            message: "boom".to_string(),
            absent,
        }
    }

    #[test]
    fn test_request_errors_are_bad_request() {
        let err: ProxyError = StormIdError::UnknownBasin("XX".to_string()).into();
        assert_eq!(err.http_status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProxyError::UnknownOperation("radar".to_string()).http_status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_exhaustion_status_follows_last_attempt() {
        let missing = ProxyError::SourcesExhausted {
            product: "cone".to_string(),
            attempts: vec![attempt(false), attempt(true)],
        };
        assert_eq!(missing.http_status_code(), StatusCode::NOT_FOUND);

        let broken = ProxyError::SourcesExhausted {
            product: "cone".to_string(),
            attempts: vec![attempt(true), attempt(false)],
        };
        assert_eq!(broken.http_status_code(), StatusCode::BAD_GATEWAY);

        let empty = ProxyError::SourcesExhausted {
            product: "cone".to_string(),
            attempts: vec![],
        };
        assert_eq!(empty.http_status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_kml_absence_vs_corruption() {
        assert!(ProxyError::Kml(KmlError::NoConeFound).is_absence());
        assert!(!ProxyError::Kml(KmlError::MalformedXml("eof".to_string())).is_absence());
        assert_eq!(
            ProxyError::Kml(KmlError::NoConeFound).http_status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_upstream_404_is_absence() {
        let err = ProxyError::Upstream {
            url: "u".to_string(),
            status: Some(404),
            message: "Not Found".to_string(),
        };
        assert!(err.is_absence());
        assert_eq!(err.code(), "UpstreamError");
    }

    #[test]
    fn test_exhaustion_display() {
        let err = ProxyError::SourcesExhausted {
            product: "ensemble".to_string(),
            attempts: vec![attempt(true), attempt(true)],
        };
        assert_eq!(err.to_string(), "All 2 sources failed for ensemble");
    }
}
