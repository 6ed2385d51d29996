//! KML serialization via quick-xml's serde support.

use std::io::Write;

use quick_xml::se::Serializer;
use serde::Serialize;

use overlay_common::error::{OverlayError, OverlayResult};

use crate::document::KmlRoot;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the document as an indented KML string.
pub fn to_kml_string(kml: &KmlRoot) -> OverlayResult<String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    kml.serialize(serializer)
        .map_err(|e| OverlayError::Serialize(e.to_string()))?;
    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

/// Render the document and write it to `out`.
pub fn write_kml<W: Write>(kml: &KmlRoot, mut out: W) -> OverlayResult<()> {
    let rendered = to_kml_string(kml)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
