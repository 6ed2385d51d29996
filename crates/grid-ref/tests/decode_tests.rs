//! Tests for MGRS reference decoding and cell extents.

use grid_ref::mgrs::{decode, decode_to_utm};
use grid_ref::utm::Hemisphere;
use grid_ref::{cell_extent, destination};
use overlay_common::error::OverlayError;

// ============================================================================
// UTM resolution
// ============================================================================

#[test]
fn test_decode_to_utm_anchor() {
    // Zone 33, band T, square WN: column W is the central-meridian square,
    // row N cycles up to the band's northing floor.
    let utm = decode_to_utm("33TWN0000000000").unwrap();
    assert_eq!(utm.zone, 33);
    assert_eq!(utm.easting, 500_000.0);
    assert_eq!(utm.northing, 5_200_000.0);
    assert_eq!(utm.hemisphere, Hemisphere::North);
}

#[test]
fn test_digit_precision_scaling() {
    // Two digits name kilometers, ten digits name meters.
    let coarse = decode_to_utm("33TWN19").unwrap();
    assert_eq!(coarse.easting, 510_000.0);
    assert_eq!(coarse.northing, 5_290_000.0);

    let fine = decode_to_utm("33TWN1234567890").unwrap();
    assert_eq!(fine.easting, 512_345.0);
    assert_eq!(fine.northing, 5_267_890.0);
}

#[test]
fn test_no_digits_names_the_100km_square() {
    let square = decode_to_utm("33TWN").unwrap();
    assert_eq!(square.easting, 500_000.0);
    assert_eq!(square.northing, 5_200_000.0);
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let upper = decode_to_utm("33TWN0807").unwrap();
    let lower = decode_to_utm("  33twn0807 ").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_southern_hemisphere_band() {
    // Band M sits just south of the equator; row V is the last 100 km row
    // below it.
    let utm = decode_to_utm("31MAV").unwrap();
    assert_eq!(utm.hemisphere, Hemisphere::South);
    assert_eq!(utm.northing, 9_900_000.0);
}

// ============================================================================
// Geographic decoding
// ============================================================================

#[test]
fn test_decode_southwest_corner_anchor() {
    let sw = decode("33TWN0000000000").unwrap();
    assert!(
        (sw.latitude - 46.9534).abs() < 0.01,
        "latitude {}",
        sw.latitude
    );
    // Easting 500,000 is exactly the zone 33 central meridian.
    assert!((sw.longitude - 15.0).abs() < 1e-9, "longitude {}", sw.longitude);
}

#[test]
fn test_decode_is_deterministic() {
    let first = decode("33TWN0807").unwrap();
    let second = decode("33TWN0807").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_southern_point_is_below_equator() {
    let point = decode("31MAV").unwrap();
    assert!(point.latitude < 0.0, "latitude {}", point.latitude);
    assert!(point.latitude > -1.0, "latitude {}", point.latitude);
}

#[test]
fn test_eastern_squares_decode_east_of_western_ones() {
    let west = decode("33TUN").unwrap();
    let east = decode("33TWN").unwrap();
    assert!(east.longitude > west.longitude);
}

// ============================================================================
// Validation
// ============================================================================

fn expect_invalid(reference: &str) {
    match decode(reference) {
        Err(OverlayError::InvalidGridRef { .. }) => {}
        other => panic!("{reference:?} should fail to decode, got {other:?}"),
    }
}

#[test]
fn test_malformed_references_are_rejected() {
    expect_invalid("");
    expect_invalid("TWN0807"); // no zone number
    expect_invalid("0TWN0807"); // zone 0
    expect_invalid("61TWN0807"); // zone out of range
    expect_invalid("33IWN0807"); // I is never a band letter
    expect_invalid("33OWN0807"); // O is never a band letter
    expect_invalid("33AWN0807"); // A/B are polar, unsupported
    expect_invalid("33T"); // missing square letters
    expect_invalid("33TW"); // missing row letter
    expect_invalid("33TIN0807"); // I is never a column letter
    expect_invalid("33TWO0807"); // O is never a row letter
    expect_invalid("34TWN0807"); // W not in zone 34's column set
    expect_invalid("33TWN080"); // odd digit count
    expect_invalid("33TWN000000000000"); // more than 10 digits
    expect_invalid("33TWN08a7"); // non-digit in coordinates
}

// ============================================================================
// Cell extents
// ============================================================================

#[test]
fn test_extent_is_normalized_for_decoded_cells() {
    for reference in ["33TWN0000000000", "33TWN0807", "31MAV", "18TWL8040"] {
        let sw = decode(reference).unwrap();
        let extent = cell_extent(sw, 999.0);
        assert!(
            extent.is_normalized(),
            "{reference} produced a degenerate extent {extent:?}"
        );
    }
}

#[test]
fn test_extent_offsets_are_near_999_meters() {
    let sw = decode("33TWN0000000000").unwrap();
    let extent = cell_extent(sw, 999.0);

    // Check each axis against an independent destination projection.
    let north = destination(sw, 0.0, 999.0);
    let east = destination(sw, 90.0, 999.0);
    assert_eq!(extent.ne.latitude, north.latitude);
    assert_eq!(extent.ne.longitude, east.longitude);

    // And sanity-check the spans: just under 1 km on both axes.
    let lat_meters = extent.height_deg() * 111_168.0;
    let lon_meters = extent.width_deg() * 76_130.0;
    assert!((lat_meters - 999.0).abs() < 5.0, "lat span {lat_meters} m");
    assert!((lon_meters - 999.0).abs() < 5.0, "lon span {lon_meters} m");
}

#[test]
fn test_adjacent_cells_leave_a_gap() {
    // 999 m offsets on nominal 1 km cells must not overlap the neighbor.
    let sw_a = decode("33TWN0000000000").unwrap();
    let sw_b = decode("33TWN0100000000").unwrap(); // 1 km east
    let extent_a = cell_extent(sw_a, 999.0);
    assert!(extent_a.ne.longitude < sw_b.longitude);
}
