//! KMZ/KML translation for NHC storm graphics.
//!
//! NHC publishes forecast cones and tracks as KMZ archives, which browsers
//! cannot consume directly. This crate unpacks the archive, parses the KML
//! into a small element tree and extracts GeoJSON geometry:
//!
//! - [`unpack_kmz`] finds the first `.kml` entry in an archive
//! - [`parse_kml`] builds an [`Element`] tree from KML text
//! - [`extract_cone`] emits the cone of uncertainty polygon
//! - [`extract_track`] emits track lines and position points
//!
//! # Example
//!
//! ```rust
//! use kml_parser::{extract_cone, parse_kml};
//!
//! let kml = r#"<kml><Document><name>Testa</name><Placemark><name>Cone</name>
//!   <Polygon><outerBoundaryIs><LinearRing>
//!     <coordinates>-80,25 -78,25 -78,27 -80,25</coordinates>
//!   </LinearRing></outerBoundaryIs></Polygon></Placemark></Document></kml>"#;
//!
//! let cone = extract_cone(&parse_kml(kml).unwrap()).unwrap();
//! assert_eq!(cone.features.len(), 1);
//! ```

pub mod cone;
pub mod error;
pub mod kmz;
pub mod placemark;
pub mod track;
pub mod tree;

pub use cone::extract_cone;
pub use error::{KmlError, KmlResult};
pub use kmz::{kml_text_from_payload, unpack_kmz};
pub use placemark::UNKNOWN_STORM;
pub use track::extract_track;
pub use tree::{parse_kml, Element};

use storm_common::FeatureCollection;

/// Decode a KMZ (or bare KML) payload and extract the forecast cone.
pub fn cone_from_kmz(payload: &[u8]) -> KmlResult<FeatureCollection> {
    let text = kml_text_from_payload(payload)?;
    let root = parse_kml(&text)?;
    extract_cone(&root)
}

/// Decode a KMZ (or bare KML) payload and extract track lines and points.
pub fn track_from_kmz(payload: &[u8]) -> KmlResult<FeatureCollection> {
    let text = kml_text_from_payload(payload)?;
    let root = parse_kml(&text)?;
    extract_track(&root)
}
