//! Common types and utilities shared across the storm-proxy crates.

pub mod active;
pub mod coord;
pub mod error;
pub mod geojson;
pub mod storm_id;

pub use active::{classification_label, ActiveStorm, ActiveStorms};
pub use coord::{
    normalize_longitude, parse_atcf_latitude, parse_atcf_longitude, parse_kml_coordinate,
    parse_kml_coordinates,
};
pub use error::StormIdError;
pub use geojson::{Feature, FeatureCollection, FeatureProperties, Geometry, PointType, TrackType};
pub use storm_id::{Basin, StormId};

/// Media types used in proxy responses.
pub mod media_types {
    /// GeoJSON media type
    pub const GEO_JSON: &str = "application/geo+json";
    /// JSON media type
    pub const JSON: &str = "application/json";
}
