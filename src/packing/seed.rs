/*!
 * Seed conversion.
 * Turns raw user geometry into the boundary elements a packing starts from.
 */

use crate::geo_2d::*;
use crate::packing::{
    err_malformed,
    err_invalid,
    ProcResult,
};

/// Convert three triangle corners into three directed sides.
/// The sides are wound clockwise so every solver sees the interior on its right.
/// Fails with `MalformedInput` unless there are exactly three finite 2D corners.
pub fn convert_triangle<P: AsRef<[f64]>>(corners: &[P]) -> ProcResult<[Line; 3]> {
    if corners.len() != 3 {
        return err_malformed(&format!("Triangle must have three corners, got {}", corners.len()));
    }

    let mut points = [Point::zero(); 3];
    for (corner_id, corner) in corners.iter().enumerate() {
        points[corner_id] = match Point::try_from(corner.as_ref()) {
            Ok(point) => point,
            Err(error) => return err_malformed(&format!("Triangle corner {}: {}", corner_id, error)),
        };
    }
    let [a, b, c] = points;

    // Choose the winding from the sign of the turn at b
    let sides = if (b - a).cross(&(c - b)) < 0.0 {
        [Line::new(a, b), Line::new(b, c), Line::new(c, a)]
    } else {
        [Line::new(a, c), Line::new(c, b), Line::new(b, a)]
    };

    Ok(sides)
}

/// Build the three seed circles of a gasket: `[outer, inner1, inner2]`.
/// The inner circles sit on the two centers and touch each other;
/// the outer circle spans both with radius equal to the center distance.
/// Fails with `InvalidParameter` on a ratio outside (0, 1), a center that is not
/// a finite 2D point, or coincident centers.
pub fn convert_circles(center1: &[f64], center2: &[f64], radius_ratio: f64) -> ProcResult<[Circle; 3]> {
    if !(radius_ratio > 0.0 && radius_ratio < 1.0) {
        return err_invalid(&format!("Radius ratio must be strictly between 0 and 1, got {}", radius_ratio));
    }

    let center1 = match Point::try_from(center1) {
        Ok(point) => point,
        Err(error) => return err_invalid(&format!("Gasket center 1: {}", error)),
    };
    let center2 = match Point::try_from(center2) {
        Ok(point) => point,
        Err(error) => return err_invalid(&format!("Gasket center 2: {}", error)),
    };

    let outer_radius = center1.distance(&center2);
    if outer_radius == 0.0 {
        return err_invalid(&format!("Gasket centers must differ, both are {}", center1));
    }

    let outer = Circle::new(center1.blend(&center2, radius_ratio), outer_radius);
    let inner1 = Circle::new(center1, outer_radius * radius_ratio);
    let inner2 = Circle::new(center2, outer_radius * (1.0 - radius_ratio));

    Ok([outer, inner1, inner2])
}
