//! A-deck payload decoding.

use std::io::Read;

use flate2::read::MultiGzDecoder;

use crate::error::{AtcfError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turn a fetched A-deck payload into text.
///
/// NHC serves `.dat.gz`; mirrors often serve plain `.dat`. Gzip is detected
/// by its magic bytes. Invalid UTF-8 is replaced rather than rejected since
/// the parser only cares about ASCII fields.
pub fn decode_adeck_payload(payload: &[u8]) -> Result<String> {
    if !payload.starts_with(&GZIP_MAGIC) {
        return Ok(String::from_utf8_lossy(payload).into_owned());
    }

    let mut decoder = MultiGzDecoder::new(payload);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| AtcfError::Decompression(e.to_string()))?;
    Ok(String::from_utf8_lossy(&decompressed).into_owned())
}
