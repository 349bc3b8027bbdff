//! GeoJSON types for storm geometry responses.
//!
//! Cones are emitted as a single `Polygon` feature; tracks as a mix of
//! `LineString` and `Point` features. Vertices are `[longitude, latitude]`.

use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Add multiple features to the collection.
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features.extend(features);
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The geometry of this feature.
    pub geometry: Geometry,

    /// Descriptive properties carried over from the source placemark.
    pub properties: FeatureProperties,
}

impl Feature {
    /// Create a feature from any geometry with empty properties.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry,
            properties: FeatureProperties::default(),
        }
    }

    /// Create a new feature with a point geometry.
    pub fn point(lon: f64, lat: f64) -> Self {
        Self::new(Geometry::point(lon, lat))
    }

    /// Create a new feature with a LineString geometry.
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Self::new(Geometry::line_string(coordinates))
    }

    /// Create a new feature with a single-ring Polygon geometry.
    pub fn polygon(ring: Vec<[f64; 2]>) -> Self {
        Self::new(Geometry::polygon(vec![ring]))
    }

    /// Set the properties.
    pub fn with_properties(mut self, properties: FeatureProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// GeoJSON geometry types emitted by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },

    /// A line string geometry.
    LineString {
        /// Array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<[f64; 2]>,
    },

    /// A polygon geometry.
    Polygon {
        /// Array of linear rings (first is exterior, rest are holes).
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

impl Geometry {
    /// Create a point geometry.
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: [lon, lat],
        }
    }

    /// Create a line string geometry.
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Geometry::LineString { coordinates }
    }

    /// Create a polygon geometry.
    pub fn polygon(coordinates: Vec<Vec<[f64; 2]>>) -> Self {
        Geometry::Polygon { coordinates }
    }

    /// Total number of vertices across all parts of the geometry.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point { .. } => 1,
            Geometry::LineString { coordinates } => coordinates.len(),
            Geometry::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
        }
    }
}

/// Classification of a track line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Forecast,
    Historical,
    Track,
}

impl TrackType {
    /// Classify a track line by its placemark name.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("forecast") {
            TrackType::Forecast
        } else if lower.contains("past") {
            TrackType::Historical
        } else {
            TrackType::Track
        }
    }
}

/// Classification of a track point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Current,
    Position,
}

impl PointType {
    /// Classify a track point by its placemark name.
    pub fn from_name(name: &str) -> Self {
        if name.to_lowercase().contains("current") {
            PointType::Current
        } else {
            PointType::Position
        }
    }
}

/// Properties for a storm geometry feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storm_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_type: Option<TrackType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_type: Option<PointType>,
}

impl FeatureProperties {
    /// Create new empty properties.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_storm_name(mut self, storm_name: impl Into<String>) -> Self {
        self.storm_name = Some(storm_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_track_type(mut self, track_type: TrackType) -> Self {
        self.track_type = Some(track_type);
        self
    }

    pub fn with_point_type(mut self, point_type: PointType) -> Self {
        self.point_type = Some(point_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_serialization() {
        let ring = vec![[-80.0, 25.0], [-79.0, 25.0], [-79.0, 26.0], [-80.0, 25.0]];
        let fc = FeatureCollection::new().with_feature(
            Feature::polygon(ring).with_properties(
                FeatureProperties::new()
                    .with_name("Cone")
                    .with_storm_name("Hurricane Test"),
            ),
        );

        let json = serde_json::to_value(&fc).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(json["features"][0]["properties"]["stormName"], "Hurricane Test");
        assert_eq!(
            json["features"][0]["geometry"]["coordinates"][0]
                .as_array()
                .unwrap()
                .len(),
            4
        );
        assert!(json["features"][0]["properties"].get("trackType").is_none());
    }

    #[test]
    fn test_track_tags_serialize_lowercase() {
        let props = FeatureProperties::new()
            .with_track_type(TrackType::Historical)
            .with_point_type(PointType::Current);
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["trackType"], "historical");
        assert_eq!(json["pointType"], "current");
    }

    #[test]
    fn test_track_type_from_name() {
        assert_eq!(TrackType::from_name("Forecast Track"), TrackType::Forecast);
        assert_eq!(TrackType::from_name("Past Track"), TrackType::Historical);
        assert_eq!(TrackType::from_name("Past forecast"), TrackType::Forecast);
        assert_eq!(TrackType::from_name("Line"), TrackType::Track);
    }

    #[test]
    fn test_point_type_from_name() {
        assert_eq!(PointType::from_name("CURRENT CENTER"), PointType::Current);
        assert_eq!(PointType::from_name("12 hr"), PointType::Position);
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(Geometry::point(0.0, 0.0).vertex_count(), 1);
        assert_eq!(
            Geometry::line_string(vec![[0.0, 0.0], [1.0, 1.0]]).vertex_count(),
            2
        );
    }
}
