//! Document and placemark lookups shared by the cone and track extractors.

use storm_common::{parse_kml_coordinates, FeatureProperties};

use crate::error::{KmlError, KmlResult};
use crate::tree::Element;

/// Storm name used when the document carries no `<name>`.
pub const UNKNOWN_STORM: &str = "Unknown Storm";

/// Locate the top-level `Document` (or `Folder`) node.
///
/// The root itself qualifies when it is one of those; otherwise its direct
/// children are searched, `Document` first.
pub fn find_document(root: &Element) -> KmlResult<&Element> {
    if root.name == "Document" || root.name == "Folder" {
        return Ok(root);
    }
    root.child("Document")
        .or_else(|| root.child("Folder"))
        .ok_or(KmlError::NoDocument)
}

/// The document's own `<name>`, or [`UNKNOWN_STORM`].
pub fn storm_name(document: &Element) -> &str {
    document.child_text("name").unwrap_or(UNKNOWN_STORM)
}

/// A view over a `<Placemark>` element.
#[derive(Debug, Clone, Copy)]
pub struct Placemark<'a> {
    element: &'a Element,
}

impl<'a> Placemark<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    /// Placemark name, empty when absent.
    pub fn name(&self) -> &'a str {
        self.element.child_text("name").unwrap_or("")
    }

    /// Placemark description, empty when absent.
    pub fn description(&self) -> &'a str {
        self.element.child_text("description").unwrap_or("")
    }

    /// `name`, `stormName` and `description` for a feature built from this
    /// placemark. Missing values are emitted as empty strings.
    pub fn properties(&self, storm: &str) -> FeatureProperties {
        FeatureProperties::new()
            .with_name(self.name())
            .with_storm_name(storm)
            .with_description(self.description())
    }

    /// Geometry children of the given kind, looking through `MultiGeometry`.
    pub fn geometries(&self, kind: &'a str) -> Vec<&'a Element> {
        let mut found: Vec<&'a Element> = self.element.children_named(kind).collect();
        for multi in self.element.children_named("MultiGeometry") {
            found.extend(multi.children_named(kind));
        }
        found
    }

    /// Coordinates of the first geometry of `kind` that has any usable vertex.
    pub fn first_coordinates(&self, kind: &'a str) -> Option<Vec<[f64; 2]>> {
        self.geometries(kind)
            .into_iter()
            .find_map(|geometry| non_empty(coordinates_of(geometry)?))
    }
}

/// Placemarks directly under the document, in document order.
pub fn direct_placemarks(document: &Element) -> Vec<Placemark<'_>> {
    document
        .children_named("Placemark")
        .map(Placemark::new)
        .collect()
}

/// Direct placemarks followed by those one folder level down.
pub fn placemarks_with_folders(document: &Element) -> Vec<Placemark<'_>> {
    let mut placemarks = direct_placemarks(document);
    for folder in document.children_named("Folder") {
        placemarks.extend(folder.children_named("Placemark").map(Placemark::new));
    }
    placemarks
}

/// Outer ring of a `<Polygon>`.
pub fn outer_ring(polygon: &Element) -> Option<Vec<[f64; 2]>> {
    let coordinates = polygon
        .child("outerBoundaryIs")?
        .child("LinearRing")?
        .child_text("coordinates")?;
    non_empty(parse_kml_coordinates(coordinates))
}

fn coordinates_of(geometry: &Element) -> Option<Vec<[f64; 2]>> {
    geometry
        .child_text("coordinates")
        .map(parse_kml_coordinates)
}

fn non_empty(coords: Vec<[f64; 2]>) -> Option<Vec<[f64; 2]>> {
    (!coords.is_empty()).then_some(coords)
}
