//! Forecast cone extraction.

use storm_common::{Feature, FeatureCollection};
use tracing::debug;

use crate::error::{KmlError, KmlResult};
use crate::placemark::{direct_placemarks, find_document, outer_ring, storm_name};
use crate::tree::Element;

/// Extract the cone of uncertainty as a single-polygon FeatureCollection.
///
/// The first placemark that is named like a cone ("cone", "uncertainty") or
/// carries a polygon wins. A candidate without usable ring coordinates is
/// skipped and the scan continues.
pub fn extract_cone(root: &Element) -> KmlResult<FeatureCollection> {
    let document = find_document(root)?;
    let storm = storm_name(document);

    for placemark in direct_placemarks(document) {
        let name = placemark.name();
        let lower = name.to_lowercase();
        let polygons = placemark.geometries("Polygon");

        let named_like_cone = lower.contains("cone") || lower.contains("uncertainty");
        if !named_like_cone && polygons.is_empty() {
            continue;
        }

        let Some(ring) = polygons.into_iter().find_map(outer_ring) else {
            debug!(placemark = %name, "Cone candidate has no outer ring, continuing");
            continue;
        };

        debug!(placemark = %name, vertices = ring.len(), "Selected cone polygon");

        return Ok(FeatureCollection::new()
            .with_feature(Feature::polygon(ring).with_properties(placemark.properties(storm))));
    }

    Err(KmlError::NoConeFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_kml;
    use storm_common::Geometry;

    #[test]
    fn test_polygon_with_unrelated_name_qualifies() {
        let doc = parse_kml(
            r#"<kml><Document>
                <Placemark><name>Watches</name></Placemark>
                <Placemark><name>Area</name><Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>-80,25 -79,25 -79,26 -80,25</coordinates>
                </LinearRing></outerBoundaryIs></Polygon></Placemark>
            </Document></kml>"#,
        )
        .unwrap();

        let fc = extract_cone(&doc).unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(fc.features[0].properties.name.as_deref(), Some("Area"));
        assert_eq!(
            fc.features[0].properties.storm_name.as_deref(),
            Some("Unknown Storm")
        );
        assert_eq!(fc.features[0].properties.description.as_deref(), Some(""));
    }

    #[test]
    fn test_earlier_polygon_beats_later_named_cone() {
        let doc = parse_kml(
            r#"<Document><name>ERIN</name>
                <Placemark><name>Watch area</name><Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>-70,20 -69,20 -69,21 -70,20</coordinates>
                </LinearRing></outerBoundaryIs></Polygon></Placemark>
                <Placemark><name>Cone</name><Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>-80,25 -79,25 -79,26 -80,25</coordinates>
                </LinearRing></outerBoundaryIs></Polygon></Placemark>
            </Document>"#,
        )
        .unwrap();

        let fc = extract_cone(&doc).unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(fc.features[0].properties.name.as_deref(), Some("Watch area"));
        match &fc.features[0].geometry {
            Geometry::Polygon { coordinates } => {
                assert_eq!(coordinates[0][0], [-70.0, 20.0])
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_named_cone_without_polygon_is_skipped() {
        let doc = parse_kml(
            r#"<Document><name>Storm</name>
                <Placemark><name>Cone label</name><Point><coordinates>-80,25</coordinates></Point></Placemark>
                <Placemark><name>Cone</name><Polygon><outerBoundaryIs><LinearRing>
                    <coordinates>-80,25 -79,25 -79,26 -80,25</coordinates>
                </LinearRing></outerBoundaryIs></Polygon></Placemark>
            </Document>"#,
        )
        .unwrap();

        let fc = extract_cone(&doc).unwrap();
        assert_eq!(fc.features[0].properties.name.as_deref(), Some("Cone"));
        match &fc.features[0].geometry {
            Geometry::Polygon { coordinates } => assert_eq!(coordinates[0].len(), 4),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_no_cone() {
        let doc =
            parse_kml("<Document><Placemark><name>Track</name></Placemark></Document>").unwrap();
        assert!(matches!(extract_cone(&doc), Err(KmlError::NoConeFound)));
    }
}
