//! Coordinate token parsing for KML coordinate strings and ATCF fixed fields.
//!
//! Every function here is total: malformed input yields `None` rather than an
//! error, and callers decide whether to skip the record or fail.

/// Wrap a longitude into the half-open range (-180, 180].
///
/// `-180.0` maps to `180.0` so both encodings of the antimeridian agree.
pub fn normalize_longitude(lon: f64) -> f64 {
    if !lon.is_finite() || (lon > -180.0 && lon <= 180.0) {
        return lon;
    }

    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Parse a single KML coordinate tuple `lon,lat[,alt]` into `[lon, lat]`.
///
/// The altitude is ignored. Returns `None` for non-numeric or non-finite
/// fields and for latitudes outside [-90, 90].
pub fn parse_kml_coordinate(token: &str) -> Option<[f64; 2]> {
    let mut fields = token.trim().split(',');
    let lon: f64 = fields.next()?.trim().parse().ok()?;
    let lat: f64 = fields.next()?.trim().parse().ok()?;

    if !lon.is_finite() || !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return None;
    }

    Some([normalize_longitude(lon), lat])
}

/// Parse a whitespace-separated KML `<coordinates>` string.
///
/// Unparseable tuples are dropped.
pub fn parse_kml_coordinates(text: &str) -> Vec<[f64; 2]> {
    text.split_whitespace()
        .filter_map(parse_kml_coordinate)
        .collect()
}

/// Parse an ATCF latitude token such as `142N` (14.2) or `14.2S` (-14.2).
pub fn parse_atcf_latitude(token: &str) -> Option<f64> {
    let lat = parse_hemisphere_token(token, 'N', 'S')?;
    (-90.0..=90.0).contains(&lat).then_some(lat)
}

/// Parse an ATCF longitude token such as `0805W` (-80.5).
///
/// The result is normalized into (-180, 180], so `1850E` becomes -175.0.
pub fn parse_atcf_longitude(token: &str) -> Option<f64> {
    parse_hemisphere_token(token, 'E', 'W').map(normalize_longitude)
}

/// Magnitude followed by exactly one hemisphere letter.
///
/// Integral magnitudes are tenths of a degree; decimal magnitudes are degrees.
fn parse_hemisphere_token(token: &str, positive: char, negative: char) -> Option<f64> {
    let token = token.trim();
    let hemisphere = token.chars().last()?;
    let sign = if hemisphere == positive {
        1.0
    } else if hemisphere == negative {
        -1.0
    } else {
        return None;
    };

    let magnitude = &token[..token.len() - hemisphere.len_utf8()];
    let degrees = match magnitude.split_once('.') {
        Some((whole, frac)) => {
            if !is_digits(whole) || !is_digits(frac) {
                return None;
            }
            magnitude.parse::<f64>().ok()?
        }
        None => {
            if !is_digits(magnitude) {
                return None;
            }
            magnitude.parse::<f64>().ok()? / 10.0
        }
    };

    Some(sign * degrees)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
