//! Forecast and historical track extraction.

use storm_common::{Feature, FeatureCollection, PointType, TrackType};
use tracing::debug;

use crate::error::{KmlError, KmlResult};
use crate::placemark::{find_document, placemarks_with_folders, storm_name};
use crate::tree::Element;

/// Extract track lines and positions as a FeatureCollection.
///
/// Each placemark contributes at most one `LineString` (tagged with a
/// `trackType`) and one `Point` (tagged with a `pointType`, first vertex only).
pub fn extract_track(root: &Element) -> KmlResult<FeatureCollection> {
    let document = find_document(root)?;
    let storm = storm_name(document);

    let placemarks = placemarks_with_folders(document);
    if placemarks.is_empty() {
        return Err(KmlError::NoPlacemarks);
    }

    let mut features = Vec::new();
    for placemark in &placemarks {
        let name = placemark.name();

        if let Some(line) = placemark.first_coordinates("LineString") {
            let properties =
                placemark.properties(storm).with_track_type(TrackType::from_name(name));
            features.push(Feature::line_string(line).with_properties(properties));
        }

        if let Some(points) = placemark.first_coordinates("Point") {
            let [lon, lat] = points[0];
            let properties =
                placemark.properties(storm).with_point_type(PointType::from_name(name));
            features.push(Feature::point(lon, lat).with_properties(properties));
        }
    }

    debug!(
        placemarks = placemarks.len(),
        features = features.len(),
        "Extracted track features"
    );

    if features.is_empty() {
        return Err(KmlError::NoTrackFeatures);
    }

    Ok(FeatureCollection::new().with_features(features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_kml;
    use storm_common::Geometry;

    #[test]
    fn test_line_and_point_in_one_placemark() {
        let doc = parse_kml(
            r#"<Document><Placemark><name>Current position</name>
                <LineString><coordinates>-70,20 -71,21</coordinates></LineString>
                <Point><coordinates>-71,21,0 -72,22,0</coordinates></Point>
            </Placemark></Document>"#,
        )
        .unwrap();

        let fc = extract_track(&doc).unwrap();
        assert_eq!(fc.features.len(), 2);
        assert_eq!(fc.features[0].properties.track_type, Some(TrackType::Track));
        assert_eq!(fc.features[1].properties.point_type, Some(PointType::Current));
        assert_eq!(fc.features[1].geometry, Geometry::point(-71.0, 21.0));
    }

    #[test]
    fn test_nested_folders_beyond_one_level_are_ignored() {
        let doc = parse_kml(
            r#"<Document><Folder><Folder><Placemark><name>Deep</name>
                <Point><coordinates>-70,20</coordinates></Point>
            </Placemark></Folder></Folder></Document>"#,
        )
        .unwrap();
        assert!(matches!(extract_track(&doc), Err(KmlError::NoPlacemarks)));
    }

    #[test]
    fn test_placemarks_without_geometry() {
        let doc =
            parse_kml("<Document><Placemark><name>Label</name></Placemark></Document>").unwrap();
        assert!(matches!(extract_track(&doc), Err(KmlError::NoTrackFeatures)));
    }
}
