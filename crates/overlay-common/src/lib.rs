//! Common types shared across the mgrs-overlay workspace.

pub mod color;
pub mod error;
pub mod geo;

pub use color::{Hsl, Rgb};
pub use error::{OverlayError, OverlayResult};
pub use geo::{CellExtent, GeoPoint};
