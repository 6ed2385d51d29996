//! KML scene document model.
//!
//! A `SceneDocument` owns the style definitions and the styled polygons for
//! one run. It is built incrementally (styles at construction, one placemark
//! per surviving record) and serialized once, after input is exhausted.
//! The structs below double as the serde data model for quick-xml: field
//! order is emission order, `@`-prefixed renames become attributes.

use serde::Serialize;

use overlay_common::geo::CellExtent;

use crate::gradient::GradientTable;

/// XML namespace of the KML 2.2 schema.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Altitude interpretation for extruded cell polygons.
const ALTITUDE_MODE: &str = "relativeToGround";

/// Root `<kml>` element.
#[derive(Debug, Serialize)]
#[serde(rename = "kml")]
pub struct KmlRoot {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "Document")]
    pub document: SceneDocument,
}

/// The `<Document>` holding gradient styles and cell placemarks.
#[derive(Debug, Serialize)]
pub struct SceneDocument {
    #[serde(rename = "@id")]
    id: String,
    name: String,
    description: String,
    #[serde(rename = "Style")]
    styles: Vec<StyleElement>,
    #[serde(rename = "Placemark")]
    placemarks: Vec<Placemark>,
}

#[derive(Debug, Serialize)]
struct StyleElement {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "LineStyle")]
    line_style: LineStyle,
    #[serde(rename = "PolyStyle")]
    poly_style: PolyStyle,
}

/// Stroke styling is deliberately left at viewer defaults.
#[derive(Debug, Serialize)]
struct LineStyle {}

#[derive(Debug, Serialize)]
struct PolyStyle {
    /// KML `aabbggrr` fill color.
    color: String,
}

#[derive(Debug, Serialize)]
struct Placemark {
    #[serde(rename = "@id")]
    id: String,
    name: String,
    description: String,
    #[serde(rename = "styleUrl")]
    style_url: String,
    #[serde(rename = "Polygon")]
    polygon: Polygon,
}

#[derive(Debug, Serialize)]
struct Polygon {
    extrude: u8,
    tessellate: u8,
    #[serde(rename = "altitudeMode")]
    altitude_mode: &'static str,
    #[serde(rename = "outerBoundaryIs")]
    outer_boundary: OuterBoundary,
}

#[derive(Debug, Serialize)]
struct OuterBoundary {
    #[serde(rename = "LinearRing")]
    ring: LinearRing,
}

#[derive(Debug, Serialize)]
struct LinearRing {
    coordinates: String,
}

impl SceneDocument {
    /// Create the document shell with one `<Style>` per gradient step.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        gradient: &GradientTable,
    ) -> Self {
        let styles = gradient
            .steps()
            .iter()
            .map(|step| StyleElement {
                id: step.id.clone(),
                line_style: LineStyle {},
                poly_style: PolyStyle {
                    color: step.fill.kml_color(step.fill_alpha),
                },
            })
            .collect();

        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            styles,
            placemarks: Vec::new(),
        }
    }

    /// Append one styled, extruded cell polygon.
    pub fn push_cell(
        &mut self,
        placemark_id: String,
        name: String,
        description: String,
        extent: &CellExtent,
        altitude_m: f64,
        style_id: &str,
    ) {
        self.placemarks.push(Placemark {
            id: placemark_id,
            name,
            description,
            style_url: format!("#{}", style_id),
            polygon: Polygon {
                extrude: 1,
                tessellate: 1,
                altitude_mode: ALTITUDE_MODE,
                outer_boundary: OuterBoundary {
                    ring: LinearRing {
                        coordinates: ring_coordinates(extent, altitude_m),
                    },
                },
            },
        });
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.placemarks.len()
    }

    /// Wrap into the root element for serialization.
    pub fn into_kml(self) -> KmlRoot {
        KmlRoot {
            xmlns: KML_NAMESPACE,
            document: self,
        }
    }
}

/// Closed ring SW → SE → NE → NW → SW as a KML coordinate string
/// (`lon,lat,alt` tuples separated by spaces).
fn ring_coordinates(extent: &CellExtent, altitude_m: f64) -> String {
    let sw = extent.sw;
    let ne = extent.ne;
    let corners = [
        (sw.longitude, sw.latitude),
        (ne.longitude, sw.latitude),
        (ne.longitude, ne.latitude),
        (sw.longitude, ne.latitude),
        (sw.longitude, sw.latitude),
    ];
    corners
        .iter()
        .map(|(lon, lat)| format!("{},{},{}", lon, lat, altitude_m))
        .collect::<Vec<_>>()
        .join(" ")
}
