//! Tests for KML document serialization.

use kml_scene::document::SceneDocument;
use kml_scene::gradient::{GradientSpec, GradientTable};
use kml_scene::writer::{to_kml_string, write_kml};
use overlay_common::geo::{CellExtent, GeoPoint};

fn sample_extent() -> CellExtent {
    CellExtent::new(GeoPoint::new(46.0, 15.0), GeoPoint::new(46.009, 15.013))
}

fn sample_document(steps: i64) -> SceneDocument {
    let gradient = GradientTable::build(steps, &GradientSpec::default()).unwrap();
    SceneDocument::new("mgrs-doc", "Cells", "MGRS cells matching query", &gradient)
}

#[test]
fn test_output_structure() {
    let mut document = sample_document(2);
    document.push_cell(
        "mgrs-4".to_string(),
        "33TWN0000000000".to_string(),
        "33TWN0000000000 2".to_string(),
        &sample_extent(),
        170.0,
        "style-2",
    );

    let kml = to_kml_string(&document.into_kml()).unwrap();

    assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
    assert!(kml.contains("<Document id=\"mgrs-doc\">"));
    assert!(kml.contains("<name>Cells</name>"));
    assert!(kml.contains("<Style id=\"style-1\">"));
    assert!(kml.contains("<Style id=\"style-2\">"));
    assert!(kml.contains("<LineStyle/>"));
    assert!(kml.contains("<Placemark id=\"mgrs-4\">"));
    assert!(kml.contains("<styleUrl>#style-2</styleUrl>"));
    assert!(kml.contains("<extrude>1</extrude>"));
    assert!(kml.contains("<tessellate>1</tessellate>"));
    assert!(kml.contains("<altitudeMode>relativeToGround</altitudeMode>"));
    assert!(kml.contains("<coordinates>"));
}

#[test]
fn test_styles_precede_placemarks() {
    let mut document = sample_document(1);
    document.push_cell(
        "mgrs-4".to_string(),
        "33TWN".to_string(),
        "33TWN 1".to_string(),
        &sample_extent(),
        170.0,
        "style-1",
    );
    let kml = to_kml_string(&document.into_kml()).unwrap();

    let style_at = kml.find("<Style ").expect("style block missing");
    let placemark_at = kml.find("<Placemark ").expect("placemark missing");
    assert!(style_at < placemark_at, "styles must come before placemarks");
}

#[test]
fn test_fill_color_is_kml_channel_order() {
    // Default start color is pure blue: KML renders it as 88ff0000.
    let kml = to_kml_string(&sample_document(1).into_kml()).unwrap();
    assert!(kml.contains("<color>88ff0000</color>"));
}

#[test]
fn test_special_characters_are_escaped() {
    let mut document = sample_document(1);
    document.push_cell(
        "mgrs-4".to_string(),
        "<oops> & \"more\"".to_string(),
        "a < b".to_string(),
        &sample_extent(),
        170.0,
        "style-1",
    );
    let kml = to_kml_string(&document.into_kml()).unwrap();

    assert!(!kml.contains("<oops>"), "name must not leak raw markup");
    assert!(kml.contains("&lt;oops&gt;"));
    assert!(kml.contains("&amp;"));
}

#[test]
fn test_empty_placemark_list_still_serializes() {
    let kml = to_kml_string(&sample_document(3).into_kml()).unwrap();
    assert!(kml.contains("<Style id=\"style-3\">"));
    assert!(!kml.contains("<Placemark"));
}

#[test]
fn test_write_kml_matches_string_rendering() {
    let mut document = sample_document(2);
    document.push_cell(
        "mgrs-4".to_string(),
        "33TWN".to_string(),
        "33TWN 2".to_string(),
        &sample_extent(),
        170.0,
        "style-2",
    );
    let kml = document.into_kml();

    let rendered = to_kml_string(&kml).unwrap();
    let mut sink = Vec::new();
    write_kml(&kml, &mut sink).unwrap();
    assert_eq!(rendered.as_bytes(), sink.as_slice());
}

#[test]
fn test_serialization_is_deterministic() {
    let build = || {
        let mut document = sample_document(2);
        document.push_cell(
            "mgrs-4".to_string(),
            "33TWN".to_string(),
            "33TWN 2".to_string(),
            &sample_extent(),
            170.0,
            "style-2",
        );
        to_kml_string(&document.into_kml()).unwrap()
    };
    assert_eq!(build(), build());
}
