//! Geodesic destination points on the WGS84 ellipsoid.
//!
//! Implements Vincenty's direct formula: the point reached by traveling a
//! given distance along a given compass bearing from a starting coordinate.

use overlay_common::geo::{CellExtent, GeoPoint};

use crate::ellipsoid::{FLATTENING, SEMI_MAJOR_AXIS, SEMI_MINOR_AXIS};

/// Convergence threshold for the sigma iteration, radians.
const CONVERGENCE: f64 = 1e-12;

/// Iteration cap; the direct formula converges in a handful of rounds.
const MAX_ITERATIONS: usize = 100;

/// Compute the destination point from `origin` along `bearing_deg`
/// (compass degrees, 0 = north, 90 = east) at `distance_m` meters.
pub fn destination(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let a = SEMI_MAJOR_AXIS;
    let b = SEMI_MINOR_AXIS;
    let f = FLATTENING;

    let phi1 = origin.latitude.to_radians();
    let alpha1 = bearing_deg.to_radians();
    let sin_alpha1 = alpha1.sin();
    let cos_alpha1 = alpha1.cos();

    let tan_u1 = (1.0 - f) * phi1.tan();
    let u1 = tan_u1.atan();
    let sin_u1 = u1.sin();
    let cos_u1 = u1.cos();

    // Angular distance on the sphere from the equator to the start point.
    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let base_sigma = distance_m / (b * big_a);
    let mut sigma = base_sigma;
    let mut sigma_prev = f64::INFINITY;
    let mut iterations = 0;
    while (sigma - sigma_prev).abs() > CONVERGENCE && iterations < MAX_ITERATIONS {
        let cos_two_sigma_m = (2.0 * sigma1 + sigma).cos();
        let sin_sigma = sigma.sin();
        let cos_sigma = sigma.cos();

        let delta_sigma = big_b
            * sin_sigma
            * (cos_two_sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_two_sigma_m * cos_two_sigma_m)
                        - big_b / 6.0
                            * cos_two_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_two_sigma_m * cos_two_sigma_m)));

        sigma_prev = sigma;
        sigma = base_sigma + delta_sigma;
        iterations += 1;
    }

    let cos_two_sigma_m = (2.0 * sigma1 + sigma).cos();
    let sin_sigma = sigma.sin();
    let cos_sigma = sigma.cos();

    let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());

    let lambda = (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let lon_offset = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_two_sigma_m
                        + c * cos_sigma * (-1.0 + 2.0 * cos_two_sigma_m * cos_two_sigma_m)));

    GeoPoint::new(
        phi2.to_degrees(),
        origin.longitude + lon_offset.to_degrees(),
    )
}

/// Derive the northeast corner of a grid cell from its southwest corner.
///
/// Projects two independent destination points, due north and due east at
/// `offset_m`, and combines the northward latitude with the eastward
/// longitude. The offset is kept slightly under the nominal cell size so
/// adjacent cells do not overlap when rendered; the result is a rendering
/// approximation, not a precise cell boundary.
pub fn cell_extent(sw: GeoPoint, offset_m: f64) -> CellExtent {
    let north = destination(sw, 0.0, offset_m);
    let east = destination(sw, 90.0, offset_m);
    CellExtent::new(sw, GeoPoint::new(north.latitude, east.longitude))
}
