//! Geographic point and cell extent types.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The rectangular extent of one grid cell.
///
/// `sw` is the decoded southwest corner of the cell; `ne` is derived from it
/// by geodesic offset. For any valid reference in the supported zone range
/// the extent is normalized: `ne` lies strictly north and east of `sw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellExtent {
    pub sw: GeoPoint,
    pub ne: GeoPoint,
}

impl CellExtent {
    /// Create a new extent from corner points.
    pub fn new(sw: GeoPoint, ne: GeoPoint) -> Self {
        Self { sw, ne }
    }

    /// True when `ne` is strictly north and east of `sw`.
    pub fn is_normalized(&self) -> bool {
        self.ne.latitude > self.sw.latitude && self.ne.longitude > self.sw.longitude
    }

    /// East-west span in degrees of longitude.
    pub fn width_deg(&self) -> f64 {
        self.ne.longitude - self.sw.longitude
    }

    /// North-south span in degrees of latitude.
    pub fn height_deg(&self) -> f64 {
        self.ne.latitude - self.sw.latitude
    }
}
