//! Military Grid Reference System (MGRS) decoding.
//!
//! A reference like `33TWN0807` names a zone (33), a latitude band (T), a
//! 100 km square (WN), and an even-length run of easting/northing digits.
//! Decoding resolves the reference to a full UTM position and then to the
//! geographic coordinates of the cell's **southwest corner**; fewer digits
//! simply name a larger cell.

use overlay_common::error::{OverlayError, OverlayResult};
use overlay_common::geo::GeoPoint;

use crate::utm::{Hemisphere, UtmPosition};

/// Row letters for 100 km squares: a 20-letter cycle omitting I and O.
const ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";

/// Column letter sets for 100 km squares, selected by zone number mod 3.
const COLUMN_SETS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// Row letters repeat every 2,000 km of northing.
const ROW_CYCLE_M: f64 = 2_000_000.0;

/// Decode an MGRS reference to the southwest corner of its cell.
pub fn decode(reference: &str) -> OverlayResult<GeoPoint> {
    Ok(decode_to_utm(reference)?.to_geographic())
}

/// Decode an MGRS reference to its UTM position.
///
/// Case-insensitive; surrounding whitespace is ignored.
pub fn decode_to_utm(reference: &str) -> OverlayResult<UtmPosition> {
    let normalized = reference.trim().to_ascii_uppercase();
    let chars: Vec<char> = normalized.chars().collect();

    let zone_len = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    if zone_len == 0 || zone_len > 2 {
        return Err(OverlayError::invalid_grid_ref(
            reference,
            "expected a 1-2 digit zone number",
        ));
    }
    let zone: u8 = normalized[..zone_len]
        .parse()
        .map_err(|_| OverlayError::invalid_grid_ref(reference, "unreadable zone number"))?;
    if !(1..=60).contains(&zone) {
        return Err(OverlayError::invalid_grid_ref(
            reference,
            format!("zone {} outside 1..=60", zone),
        ));
    }

    let band = *chars.get(zone_len).ok_or_else(|| {
        OverlayError::invalid_grid_ref(reference, "missing latitude band letter")
    })?;
    let band_min_northing = min_northing(band).ok_or_else(|| {
        OverlayError::invalid_grid_ref(reference, format!("invalid latitude band '{}'", band))
    })?;

    let column = *chars.get(zone_len + 1).ok_or_else(|| {
        OverlayError::invalid_grid_ref(reference, "missing 100 km square letters")
    })?;
    let row = *chars.get(zone_len + 2).ok_or_else(|| {
        OverlayError::invalid_grid_ref(reference, "missing 100 km square row letter")
    })?;

    let column_set = COLUMN_SETS[((zone - 1) % 3) as usize];
    let column_pos = column_set.find(column).ok_or_else(|| {
        OverlayError::invalid_grid_ref(
            reference,
            format!("column letter '{}' not valid for zone {}", column, zone),
        )
    })?;
    let easting_100k = (column_pos + 1) as f64 * 100_000.0;

    let row_pos = ROW_LETTERS.find(row).ok_or_else(|| {
        OverlayError::invalid_grid_ref(reference, format!("invalid row letter '{}'", row))
    })?;
    // Even-numbered zones shift the row lettering five letters forward.
    let row_index = if zone % 2 == 0 {
        (row_pos + ROW_LETTERS.len() - 5) % ROW_LETTERS.len()
    } else {
        row_pos
    };

    // The row cycle repeats every 2,000 km; the latitude band picks which
    // repetition this square sits in.
    let mut northing_100k = row_index as f64 * 100_000.0;
    while northing_100k < band_min_northing {
        northing_100k += ROW_CYCLE_M;
    }

    let digits = &chars[zone_len + 3..];
    if digits.iter().any(|c| !c.is_ascii_digit()) {
        return Err(OverlayError::invalid_grid_ref(
            reference,
            "unexpected character in coordinate digits",
        ));
    }
    if digits.len() % 2 != 0 {
        return Err(OverlayError::invalid_grid_ref(
            reference,
            format!("odd number of coordinate digits ({})", digits.len()),
        ));
    }
    if digits.len() > 10 {
        return Err(OverlayError::invalid_grid_ref(
            reference,
            format!("too many coordinate digits ({})", digits.len()),
        ));
    }

    let half = digits.len() / 2;
    let easting_offset = digits_to_meters(&digits[..half]);
    let northing_offset = digits_to_meters(&digits[half..]);

    let hemisphere = if band < 'N' {
        Hemisphere::South
    } else {
        Hemisphere::North
    };

    Ok(UtmPosition {
        zone,
        easting: easting_100k + easting_offset,
        northing: northing_100k + northing_offset,
        hemisphere,
    })
}

/// Scale a digit group to meters: `08` means 8 km, `08765` means 8,765 m.
fn digits_to_meters(digits: &[char]) -> f64 {
    let mut value = 0u32;
    for c in digits {
        value = value * 10 + (*c as u32 - '0' as u32);
    }
    value as f64 * 10_f64.powi(5 - digits.len() as i32)
}

/// Minimum northing (meters, false-northing space in the south) of each
/// latitude band, used to resolve the 2,000 km row-letter ambiguity.
fn min_northing(band: char) -> Option<f64> {
    let northing = match band {
        'C' => 1_100_000.0,
        'D' => 2_000_000.0,
        'E' => 2_800_000.0,
        'F' => 3_700_000.0,
        'G' => 4_600_000.0,
        'H' => 5_500_000.0,
        'J' => 6_400_000.0,
        'K' => 7_300_000.0,
        'L' => 8_200_000.0,
        'M' => 9_100_000.0,
        'N' => 0.0,
        'P' => 800_000.0,
        'Q' => 1_700_000.0,
        'R' => 2_600_000.0,
        'S' => 3_500_000.0,
        'T' => 4_400_000.0,
        'U' => 5_300_000.0,
        'V' => 6_200_000.0,
        'W' => 7_000_000.0,
        'X' => 7_900_000.0,
        _ => return None,
    };
    Some(northing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_to_meters_scaling() {
        assert_eq!(digits_to_meters(&[]), 0.0);
        assert_eq!(digits_to_meters(&['0', '8']), 8_000.0);
        assert_eq!(digits_to_meters(&['0', '8', '7', '6', '5']), 8_765.0);
    }

    #[test]
    fn test_even_zone_row_offset() {
        // Zone 32 rows start at F, so row F in an even zone sits at the same
        // base of the 2,000 km cycle as row A in an odd zone.
        let even = decode_to_utm("32UKF").unwrap();
        let odd = decode_to_utm("31UAA").unwrap();
        assert_eq!(even.northing, odd.northing);
    }
}
