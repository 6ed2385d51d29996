//! KML scene-graph construction: gradient style tables, the document model,
//! and serialization.

pub mod document;
pub mod gradient;
pub mod writer;

pub use document::{KmlRoot, SceneDocument};
pub use gradient::{GradientSpec, GradientStep, GradientTable};
pub use writer::{to_kml_string, write_kml};
