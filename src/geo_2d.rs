/*!
 * Planar geometry value types used by the packing.
 *
 * Everything here is `Copy` and immutable by convention:
 * packings only ever create new values, never edit existing ones.
 */

mod point;
mod vector;
mod complex;
mod shapes;

pub use point::Point;
pub use vector::GeoVector;
pub use complex::Complex;
pub use shapes::{
    Circle,
    Line,
};
