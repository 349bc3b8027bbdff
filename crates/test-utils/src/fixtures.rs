//! Common test fixtures for storm-proxy tests.
//!
//! These are trimmed-down versions of the documents NHC publishes, small
//! enough to reason about in assertions.

/// KML documents shaped like NHC's storm graphics products.
pub mod kml {
    /// A cone document with a single polygon placemark whose ring has 5 tokens.
    pub const CONE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Hurricane Testa Advisory #12</name>
    <Style id="coneStyle"><PolyStyle><color>7f00ffff</color></PolyStyle></Style>
    <Placemark>
      <name>Cone of Uncertainty</name>
      <description><![CDATA[<b>Forecast cone</b> for Testa]]></description>
      <styleUrl>#coneStyle</styleUrl>
      <Polygon>
        <outerBoundaryIs>
          <LinearRing>
            <coordinates>
              -80.0,25.0,0 -78.0,25.0,0 -78.0,27.0,0
              -80.0,27.0,0 -80.0,25.0,0
            </coordinates>
          </LinearRing>
        </outerBoundaryIs>
      </Polygon>
    </Placemark>
  </Document>
</kml>"#;

    /// Number of coordinate tokens in [`CONE`]'s outer ring.
    pub const CONE_RING_TOKENS: usize = 5;

    /// A track document: past track at the top level, forecast geometry in a folder.
    pub const TRACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Tropical Storm Testa Track</name>
    <Placemark>
      <name>Past Track</name>
      <LineString>
        <coordinates>-70.0,20.0,0 -72.0,21.0,0 -74.0,22.5,0</coordinates>
      </LineString>
    </Placemark>
    <Folder>
      <name>Forecast</name>
      <Placemark>
        <name>Forecast Track</name>
        <LineString>
          <coordinates>-74.0,22.5,0 -76.0,24.0,0 -78.5,26.0,0 -80.0,28.5,0</coordinates>
        </LineString>
      </Placemark>
      <Placemark>
        <name>Current Center Location</name>
        <description>11 PM EDT</description>
        <Point><coordinates>-74.0,22.5,0</coordinates></Point>
      </Placemark>
      <Placemark>
        <name>12 hr</name>
        <Point><coordinates>-76.0,24.0,0</coordinates></Point>
      </Placemark>
    </Folder>
  </Document>
</kml>"#;

    /// Number of features [`TRACK`] should produce.
    pub const TRACK_FEATURES: usize = 4;
}

/// ATCF A-deck text fixtures.
pub mod adeck {
    /// Two cycles of GEFS ensemble records plus deterministic models that must be ignored.
    pub const ENSEMBLE: &str = "\
AL, 09, 2025090100, 03, AEMN,   0, 251N,  765W,  45, 1000, XX,  34, NEQ,
AL, 09, 2025090100, 03, AP01,   0, 250N,  766W,  45, 1000, XX,  34, NEQ,
AL, 09, 2025090106, 03, AP02,   0, 255N,  770W,  50,  998, XX,  34, NEQ,
AL, 09, 2025090106, 03, AP02,  12, 262N,  781W,  55,  995, XX,  34, NEQ,
AL, 09, 2025090106, 03, AEMN,  12, 263N,  780W,  55,  995, XX,  34, NEQ,
AL, 09, 2025090106, 03, AEMN,   0, 256N,  770W,  50,  998, XX,  34, NEQ,
AL, 09, 2025090106, 03, AC00,   0, 255N,  771W,    ,  998, XX,  34, NEQ,
AL, 09, 2025090106, 03, AP01,   0, 254N,  769W,  50,  998, XX,  34, NEQ,
AL, 09, 2025090106, 03, AVNO,   0, 255N,  770W,  50,  998, XX,  34, NEQ,
AL, 09, 2025090106, 03, OFCL,   0, 255N,  770W,  50,  998, XX,  34, NEQ,
";

    /// Cycle expected to win in [`ENSEMBLE`].
    pub const ENSEMBLE_LATEST_CYCLE: &str = "2025090106";
}

/// Storm identifiers used across tests.
pub mod storms {
    pub const ATLANTIC: &str = "AL092025";
    pub const EAST_PACIFIC: &str = "EP142024";
}
