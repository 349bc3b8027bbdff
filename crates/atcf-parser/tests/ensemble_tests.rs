//! Ensemble parsing against realistic A-deck text.

use atcf_parser::{decode_adeck_payload, parse_ensemble_tracks};
use test_utils::{adeck, adeck_line, adeck_text, assert_approx_eq, gzip_bytes, require_test_file};

// ============================================================================
// Cycle selection
// ============================================================================

#[test]
fn test_latest_cycle_wins() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);

    assert_eq!(
        result.latest_cycle.as_ref().map(|c| c.as_str()),
        Some(adeck::ENSEMBLE_LATEST_CYCLE)
    );

    // AP01 exists in both cycles; only the later position survives.
    let ap01 = result.track("AP01").unwrap();
    assert_eq!(ap01.points.len(), 1);
    assert_approx_eq!(ap01.points[0].lat, 25.4, 1e-9);
}

#[test]
fn test_single_later_line_discards_all_earlier_records() {
    let mut lines: Vec<String> = (0..5)
        .map(|i| adeck_line("2025090100", "AEMN", i * 12, "142N", "0805W", Some(35)))
        .collect();
    lines.push(adeck_line("2025090106", "AP05", 0, "150N", "0810W", Some(40)));

    let result = parse_ensemble_tracks(&adeck_text(&lines));

    assert_eq!(
        result.latest_cycle.as_ref().map(|c| c.as_str()),
        Some("2025090106")
    );
    assert_eq!(result.models_present, vec!["AP05"]);
    assert!(result.track("AEMN").is_none());
}

// ============================================================================
// Grouping and ordering
// ============================================================================

#[test]
fn test_member_ordering() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);
    assert_eq!(result.models_present, vec!["AEMN", "AC00", "AP01", "AP02"]);

    let track_ids: Vec<&str> = result.tracks.iter().map(|t| t.model_id.as_str()).collect();
    assert_eq!(track_ids, result.models_present);
}

#[test]
fn test_non_ensemble_models_ignored() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);
    assert!(result.track("AVNO").is_none());
    assert!(result.track("OFCL").is_none());
}

#[test]
fn test_points_sorted_by_tau() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);
    let aemn = result.track("AEMN").unwrap();

    let taus: Vec<i32> = aemn.points.iter().map(|p| p.tau).collect();
    assert_eq!(taus, vec![0, 12]);
    assert!(aemn.points.iter().all(|p| p.model_id == "AEMN"));
}

#[test]
fn test_duplicate_tau_keeps_first() {
    let lines = vec![
        adeck_line("2025090100", "AP01", 72, "200N", "0700W", Some(60)),
        adeck_line("2025090100", "AP01", 24, "180N", "0650W", Some(50)),
        adeck_line("2025090100", "AP01", 72, "210N", "0710W", Some(65)),
    ];

    let result = parse_ensemble_tracks(&adeck_text(&lines));
    let ap01 = result.track("AP01").unwrap();

    assert_eq!(ap01.points.len(), 2);
    assert_eq!(ap01.points[1].tau, 72);
    assert_approx_eq!(ap01.points[1].lat, 20.0, 1e-9);
    assert_eq!(ap01.points[1].vmax, Some(60));
}

#[test]
fn test_blank_vmax_is_null() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);
    let control = result.track("AC00").unwrap();
    assert_eq!(control.points[0].vmax, None);
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn test_coordinates_are_signed_and_normalized() {
    let lines = vec![
        adeck_line("2025090100", "AEMN", 0, "142S", "1800W", Some(35)),
        adeck_line("2025090100", "AEMN", 6, "14.5N", "1850E", Some(35)),
    ];
    let result = parse_ensemble_tracks(&adeck_text(&lines));
    let points = &result.track("AEMN").unwrap().points;

    assert_approx_eq!(points[0].lat, -14.2, 1e-9);
    assert_approx_eq!(points[0].lon, 180.0, 1e-9);
    assert_approx_eq!(points[1].lat, 14.5, 1e-9);
    assert_approx_eq!(points[1].lon, -175.0, 1e-9);
}

// ============================================================================
// Serialization and payload decoding
// ============================================================================

#[test]
fn test_result_json_shape() {
    let result = parse_ensemble_tracks(adeck::ENSEMBLE);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["latestCycle"], "2025090106");
    assert_eq!(json["modelsPresent"][0], "AEMN");
    assert_eq!(json["tracks"][0]["modelId"], "AEMN");
    assert_eq!(json["tracks"][0]["points"][0]["tau"], 0);
    assert!(json["tracks"][1]["points"][0]["vmax"].is_null());
}

#[test]
fn test_empty_result_json_shape() {
    let json = serde_json::to_value(parse_ensemble_tracks("")).unwrap();
    assert_eq!(json["modelsPresent"].as_array().unwrap().len(), 0);
    assert_eq!(json["tracks"].as_array().unwrap().len(), 0);
    assert!(json["latestCycle"].is_null());
}

#[test]
fn test_gzipped_adeck() {
    let payload = gzip_bytes(adeck::ENSEMBLE.as_bytes());
    let text = decode_adeck_payload(&payload).unwrap();
    let result = parse_ensemble_tracks(&text);
    assert_eq!(result.tracks.len(), 4);
}

#[test]
fn test_real_adeck_capture() {
    let path = require_test_file!("aal092025.dat.gz");
    let bytes = std::fs::read(path).unwrap();

    let result = parse_ensemble_tracks(&decode_adeck_payload(&bytes).unwrap());
    for track in &result.tracks {
        assert!(!track.points.is_empty());
        assert!(track.points.windows(2).all(|w| w[0].tau < w[1].tau));
    }
}
