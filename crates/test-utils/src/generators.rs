//! Test data generators for synthetic NHC payloads.
//!
//! These build archives and ATCF lines in memory so tests never depend on
//! network access or checked-in binaries.

use std::io::{Cursor, Write};

use flate2::write::GzEncoder;
use flate2::Compression;
use zip::write::FileOptions;
use zip::ZipWriter;

/// Builds a KMZ (zip) archive from `(entry name, contents)` pairs.
///
/// Entries are written in the given order with deflate compression.
///
/// # Example
///
/// ```
/// use test_utils::build_kmz;
///
/// let kmz = build_kmz(&[("doc.kml", "<kml/>")]);
/// assert_eq!(&kmz[..2], b"PK");
/// ```
pub fn build_kmz(entries: &[(&str, &str)]) -> Vec<u8> {
    let entries: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(name, contents)| (*name, contents.as_bytes()))
        .collect();
    build_kmz_bytes(&entries)
}

/// Builds a KMZ archive from raw `(entry name, bytes)` pairs.
///
/// Use this for entries that are not valid UTF-8.
pub fn build_kmz_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, FileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(contents).expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Builds a single-entry stored zip whose central directory declares
/// `declared_size` as the uncompressed size.
///
/// Sizes of `0xFFFFFFFF` and above are written through a zip64 extra field,
/// so the archive can claim far more data than it holds.
pub fn kmz_with_declared_size(name: &str, contents: &[u8], declared_size: u64) -> Vec<u8> {
    let mut crc = flate2::Crc::new();
    crc.update(contents);
    let crc = crc.sum();
    let len = contents.len() as u32;
    let name_len = name.len() as u16;

    let mut out = Vec::new();

    // Local file header
    out.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
    out.extend_from_slice(&20u16.to_le_bytes()); // version needed
    out.extend_from_slice(&0u16.to_le_bytes()); // flags
    out.extend_from_slice(&0u16.to_le_bytes()); // stored
    out.extend_from_slice(&0u16.to_le_bytes()); // mod time
    out.extend_from_slice(&0x0021u16.to_le_bytes()); // mod date
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&name_len.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // extra length
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(contents);

    let central_offset = out.len() as u32;
    let zip64 = declared_size >= 0xFFFF_FFFF;
    let (size_field, extra) = if zip64 {
        let mut extra = Vec::new();
        extra.extend_from_slice(&0x0001u16.to_le_bytes());
        extra.extend_from_slice(&8u16.to_le_bytes());
        extra.extend_from_slice(&declared_size.to_le_bytes());
        (0xFFFF_FFFFu32, extra)
    } else {
        (declared_size as u32, Vec::new())
    };

    // Central directory header
    out.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
    out.extend_from_slice(&45u16.to_le_bytes()); // version made by
    out.extend_from_slice(&(if zip64 { 45u16 } else { 20u16 }).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // flags
    out.extend_from_slice(&0u16.to_le_bytes()); // stored
    out.extend_from_slice(&0u16.to_le_bytes()); // mod time
    out.extend_from_slice(&0x0021u16.to_le_bytes()); // mod date
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&size_field.to_le_bytes());
    out.extend_from_slice(&name_len.to_le_bytes());
    out.extend_from_slice(&(extra.len() as u16).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // comment length
    out.extend_from_slice(&0u16.to_le_bytes()); // disk number
    out.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
    out.extend_from_slice(&0u32.to_le_bytes()); // external attributes
    out.extend_from_slice(&0u32.to_le_bytes()); // local header offset
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(&extra);

    let central_size = out.len() as u32 - central_offset;

    // End of central directory
    out.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&central_size.to_le_bytes());
    out.extend_from_slice(&central_offset.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());

    out
}

/// Gzip-compresses a byte slice, as NHC serves `.dat.gz` A-decks.
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("Failed to gzip data");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Formats one A-deck line with the column layout NHC uses.
///
/// `vmax` of `None` leaves the wind column blank.
///
/// # Example
///
/// ```
/// use test_utils::adeck_line;
///
/// let line = adeck_line("2025090100", "AP03", 12, "142N", "0805W", Some(40));
/// assert!(line.starts_with("AL, 09, 2025090100, 03, AP03,  12, 142N, 0805W,  40"));
/// ```
pub fn adeck_line(
    cycle: &str,
    model: &str,
    tau: i32,
    lat: &str,
    lon: &str,
    vmax: Option<i32>,
) -> String {
    let vmax = vmax.map(|v| format!("{:>3}", v)).unwrap_or_else(|| "   ".to_string());
    format!(
        "AL, 09, {}, 03, {:>4}, {:>3}, {:>4}, {:>5}, {}, 1000, XX,  34, NEQ,",
        cycle, model, tau, lat, lon, vmax
    )
}

/// Joins A-deck lines into a newline-terminated file body.
pub fn adeck_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
