//! KMZ/KML extraction error types.

use thiserror::Error;

/// Result type alias using KmlError.
pub type KmlResult<T> = Result<T, KmlError>;

/// Errors that can occur while unpacking a KMZ or extracting geometry from KML.
#[derive(Debug, Error)]
pub enum KmlError {
    // === Archive Errors ===
    #[error("Failed to open KMZ archive: {0}")]
    ArchiveRead(String),

    #[error("Failed to read archive entry '{entry}': {message}")]
    EntryRead { entry: String, message: String },

    #[error("No .kml entry found in archive")]
    NoKmlFound,

    // === Document Errors ===
    #[error("Malformed KML: {0}")]
    MalformedXml(String),

    #[error("No Document or Folder element in KML")]
    NoDocument,

    #[error("No cone polygon found in KML")]
    NoConeFound,

    #[error("No placemarks found in KML")]
    NoPlacemarks,

    #[error("No track lines or points found in KML")]
    NoTrackFeatures,
}

impl KmlError {
    /// Whether this error means the product simply lacks the requested geometry,
    /// as opposed to the payload being corrupt.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            KmlError::NoKmlFound
                | KmlError::NoDocument
                | KmlError::NoConeFound
                | KmlError::NoPlacemarks
                | KmlError::NoTrackFeatures
        )
    }
}
