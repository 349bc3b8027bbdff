//! GEFS ensemble extraction from A-deck text.
//!
//! A-deck lines are comma-separated with fixed field positions:
//!
//! ```text
//! AL, 09, 2025090106, 03, AP01,  12, 262N,  781W,  55,  995, XX, ...
//! |   |   |           |   |      |   |      |      |
//! |   |   cycle       |   model  tau lat    lon    vmax (kt)
//! |   storm number    technique number
//! basin
//! ```

use std::collections::BTreeMap;

use storm_common::{parse_atcf_latitude, parse_atcf_longitude};
use tracing::debug;

use crate::cycle::Cycle;
use crate::member::{compare_model_ids, EnsembleMember};
use crate::record::{ModelTrack, ParseResult, TrackRecord};

const MIN_FIELDS: usize = 9;

const FIELD_CYCLE: usize = 2;
const FIELD_MODEL: usize = 4;
const FIELD_TAU: usize = 5;
const FIELD_LAT: usize = 6;
const FIELD_LON: usize = 7;
const FIELD_VMAX: usize = 8;

/// Parse ensemble member tracks for the latest cycle found in `raw_text`.
///
/// Never fails: lines that do not fit the layout are skipped, and input with
/// no valid cycle yields [`ParseResult::empty`].
pub fn parse_ensemble_tracks(raw_text: &str) -> ParseResult {
    let rows: Vec<Vec<&str>> = raw_text
        .lines()
        .filter(|line| !line.trim().is_empty() && line.contains(','))
        .map(|line| line.split(',').map(str::trim).collect::<Vec<_>>())
        .filter(|fields| fields.len() >= MIN_FIELDS)
        .filter(|fields| Cycle::parse(fields[FIELD_CYCLE]).is_some())
        .collect();

    // Full pass first: the winning cycle is only known once every line is seen.
    let Some(latest) = rows.iter().map(|fields| fields[FIELD_CYCLE]).max() else {
        debug!("No valid cycle lines in A-deck");
        return ParseResult::empty();
    };

    let mut groups: BTreeMap<String, Vec<TrackRecord>> = BTreeMap::new();
    let mut skipped = 0usize;

    for fields in rows.iter().filter(|fields| fields[FIELD_CYCLE] == latest) {
        let model_id = fields[FIELD_MODEL].to_ascii_uppercase();
        if EnsembleMember::parse(&model_id).is_none() {
            continue;
        }

        match parse_record(model_id, fields) {
            Some(record) => groups
                .entry(record.model_id.clone())
                .or_default()
                .push(record),
            None => skipped += 1,
        }
    }

    let mut tracks: Vec<ModelTrack> = groups
        .into_iter()
        .filter_map(|(model_id, mut points)| {
            points.sort_by_key(|p| p.tau);
            points.dedup_by_key(|p| p.tau);
            (!points.is_empty()).then_some(ModelTrack { model_id, points })
        })
        .collect();
    tracks.sort_by(|a, b| compare_model_ids(&a.model_id, &b.model_id));

    debug!(
        cycle = latest,
        models = tracks.len(),
        skipped_records = skipped,
        "Parsed ensemble tracks"
    );

    ParseResult {
        models_present: tracks.iter().map(|t| t.model_id.clone()).collect(),
        tracks,
        latest_cycle: Cycle::parse(latest),
    }
}

fn parse_record(model_id: String, fields: &[&str]) -> Option<TrackRecord> {
    let tau = fields[FIELD_TAU].parse::<i32>().ok()?;
    let lat = parse_atcf_latitude(fields[FIELD_LAT])?;
    let lon = parse_atcf_longitude(fields[FIELD_LON])?;
    let vmax = fields[FIELD_VMAX].parse::<i32>().ok();

    Some(TrackRecord {
        model_id,
        tau,
        lat,
        lon,
        vmax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cycle: &str, model: &str, tau: &str, lat: &str, lon: &str, vmax: &str) -> String {
        format!(
            "AL, 09, {}, 03, {}, {}, {}, {}, {}, 1000, XX,",
            cycle, model, tau, lat, lon, vmax
        )
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert_eq!(parse_ensemble_tracks(""), ParseResult::empty());
        assert_eq!(
            parse_ensemble_tracks("no commas here\n\n   \n"),
            ParseResult::empty()
        );
        assert_eq!(
            parse_ensemble_tracks("AL, 09, 2025090100, 03, AEMN\n"),
            ParseResult::empty()
        );
        assert_eq!(
            parse_ensemble_tracks(&line("20250901", "AEMN", "0", "142N", "805W", "35")),
            ParseResult::empty()
        );
    }

    #[test]
    fn test_valid_cycle_but_no_members_has_cycle_and_no_tracks() {
        let result = parse_ensemble_tracks(&line("2025090100", "OFCL", "0", "142N", "805W", "35"));
        assert!(result.is_empty());
        assert!(result.models_present.is_empty());
        assert_eq!(result.latest_cycle.unwrap().as_str(), "2025090100");
    }

    #[test]
    fn test_lowercase_model_ids_are_normalized() {
        let result = parse_ensemble_tracks(&line("2025090100", "aemn", "0", "142N", "805W", "35"));
        assert_eq!(result.models_present, vec!["AEMN"]);
    }

    #[test]
    fn test_bad_records_are_skipped_not_fatal() {
        let text = [
            line("2025090100", "AP01", "x", "142N", "805W", "35"),
            line("2025090100", "AP01", "6", "14ZN", "805W", "35"),
            line("2025090100", "AP01", "12", "142N", "805Q", "35"),
            line("2025090100", "AP01", "18", "150N", "815W", "abc"),
        ]
        .join("\n");

        let result = parse_ensemble_tracks(&text);
        let track = result.track("AP01").unwrap();
        assert_eq!(track.points.len(), 1);
        assert_eq!(track.points[0].tau, 18);
        assert_eq!(track.points[0].vmax, None);
    }

    #[test]
    fn test_negative_tau_sorts_first() {
        let text = [
            line("2025090100", "AC00", "12", "150N", "815W", "40"),
            line("2025090100", "AC00", "-6", "140N", "800W", "30"),
            line("2025090100", "AC00", "0", "145N", "805W", "35"),
        ]
        .join("\n");

        let result = parse_ensemble_tracks(&text);
        let taus: Vec<i32> = result.tracks[0].points.iter().map(|p| p.tau).collect();
        assert_eq!(taus, vec![-6, 0, 12]);
    }
}
