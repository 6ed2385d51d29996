//! Universal Transverse Mercator to geographic conversion.
//!
//! Implements the inverse transverse Mercator projection on the WGS84
//! ellipsoid using the standard series expansion (footpoint latitude from the
//! meridian arc, then latitude/longitude corrections). Accuracy is well under
//! a meter across the supported zone range, which is far below the cell sizes
//! this workspace renders.

use std::f64::consts::PI;

use overlay_common::geo::GeoPoint;

use crate::ellipsoid::{ECCENTRICITY_SQ, SEMI_MAJOR_AXIS};

/// Scale factor at the central meridian.
const SCALE_FACTOR: f64 = 0.9996;

/// False easting applied to every zone, meters.
const FALSE_EASTING: f64 = 500_000.0;

/// False northing for the southern hemisphere, meters.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Hemisphere of a UTM position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// A position in UTM grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmPosition {
    /// Zone number, 1..=60.
    pub zone: u8,
    /// Easting in meters, including the 500 km false easting.
    pub easting: f64,
    /// Northing in meters. Southern-hemisphere values include the
    /// 10,000 km false northing.
    pub northing: f64,
    pub hemisphere: Hemisphere,
}

impl UtmPosition {
    /// Central meridian of a zone in degrees. Zone 1 spans 180°W..174°W.
    pub fn central_meridian_deg(zone: u8) -> f64 {
        (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }

    /// Convert to geographic coordinates (inverse transverse Mercator).
    pub fn to_geographic(&self) -> GeoPoint {
        let a = SEMI_MAJOR_AXIS;
        let e2 = ECCENTRICITY_SQ;
        let ep2 = e2 / (1.0 - e2);

        let x = self.easting - FALSE_EASTING;
        let y = match self.hemisphere {
            Hemisphere::North => self.northing,
            Hemisphere::South => self.northing - FALSE_NORTHING_SOUTH,
        };

        // Footpoint latitude from the meridian arc distance.
        let m = y / SCALE_FACTOR;
        let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0));

        let sqrt_one_minus_e2 = (1.0 - e2).sqrt();
        let e1 = (1.0 - sqrt_one_minus_e2) / (1.0 + sqrt_one_minus_e2);

        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let c1 = ep2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let n1 = a / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = a * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = x / (n1 * SCALE_FACTOR);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);

        let lon_offset = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_phi1;

        let lon0 = Self::central_meridian_deg(self.zone);

        GeoPoint::new(lat * 180.0 / PI, lon0 + lon_offset * 180.0 / PI)
    }
}
