//! KMZ archive unpacking.

use std::io::{Cursor, Read};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{KmlError, KmlResult};

const ZIP_SIGNATURE: &[u8] = b"PK";

/// Largest KML entry that will be unpacked. NHC cone and track documents are
/// well under a megabyte.
pub const MAX_KML_ENTRY_BYTES: u64 = 64 * 1024 * 1024;

/// Return the text of the first `.kml` entry in a KMZ archive.
///
/// Entries are visited in archive order and scanning stops at the first
/// match; the suffix check ignores ASCII case. An entry larger than
/// [`MAX_KML_ENTRY_BYTES`], whether declared or actual, is an `EntryRead`.
pub fn unpack_kmz(archive_bytes: &[u8]) -> KmlResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes))
        .map_err(|e| KmlError::ArchiveRead(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| KmlError::EntryRead {
            entry: format!("#{}", index),
            message: e.to_string(),
        })?;

        let name = entry.name().to_string();
        if !name.to_ascii_lowercase().ends_with(".kml") {
            debug!(entry = %name, "Skipping non-KML archive entry");
            continue;
        }

        // Declared sizes come from the archive and are not trusted for allocation.
        if entry.size() > MAX_KML_ENTRY_BYTES {
            return Err(KmlError::EntryRead {
                message: format!(
                    "declared size {} exceeds limit of {} bytes",
                    entry.size(),
                    MAX_KML_ENTRY_BYTES
                ),
                entry: name,
            });
        }

        let mut bytes = Vec::new();
        entry
            .by_ref()
            .take(MAX_KML_ENTRY_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| KmlError::EntryRead {
                entry: name.clone(),
                message: e.to_string(),
            })?;

        if bytes.len() as u64 > MAX_KML_ENTRY_BYTES {
            return Err(KmlError::EntryRead {
                message: format!("entry exceeds limit of {} bytes", MAX_KML_ENTRY_BYTES),
                entry: name,
            });
        }

        debug!(entry = %name, bytes = bytes.len(), "Unpacked KML entry");

        return String::from_utf8(bytes).map_err(|e| KmlError::EntryRead {
            entry: name,
            message: e.to_string(),
        });
    }

    Err(KmlError::NoKmlFound)
}

/// Accept either a KMZ archive or bare KML text and return the KML text.
pub fn kml_text_from_payload(payload: &[u8]) -> KmlResult<String> {
    if payload.starts_with(ZIP_SIGNATURE) {
        return unpack_kmz(payload);
    }

    let text = std::str::from_utf8(payload).map_err(|e| {
        KmlError::ArchiveRead(format!("payload is neither KMZ nor UTF-8 KML: {}", e))
    })?;
    if !text.trim_start_matches('\u{feff}').trim_start().starts_with('<') {
        return Err(KmlError::ArchiveRead(
            "payload is neither KMZ nor KML".to_string(),
        ));
    }
    Ok(text.to_string())
}
