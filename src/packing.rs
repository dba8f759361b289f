pub mod tangency;
pub mod seed;
pub mod driver;
mod proc_errors;
mod cfg;
mod methods;

use serde::{Serialize, Deserialize};

use crate::geo_2d::*;
use driver::{
    Driver,
    Element,
    SeedKind,
    DEFAULT_MAX_CIRCLES,
};

// Re-export errors
pub use proc_errors::{
    PackingError,
    InternalFault,
    ProcResult,
    err_malformed,
    err_invalid,
};
// Re-export cfg handling
pub use cfg::PackingTarget;
// Re-export packing methods
pub use methods::{
    MethodEnum,
    PackingMethodTrait,
};

/// Packing struct.
/// The result of a packing run: the straight boundaries (if any) and every circle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Packing {
    pub lines: Vec<Line>,
    pub circles: Vec<Circle>,
}
impl Packing {
    /// Smallest circle radius in the packing.
    pub fn min_radius(&self) -> Option<f64> {
        self.circles.iter().map(|circle| circle.radius).reduce(f64::min)
    }
}
/// Run the packing process for a target.
/// Returns a `ProcResult` with the `Packing` or an `Err`.
pub fn do_packing(packing_target: &PackingTarget) -> ProcResult<Packing> {
    let method = &packing_target.method;
    let verbose = packing_target.verbose;

    if verbose {
        eprintln!("Running packing method: {}...", method.get_method_display_name());
        eprintln!("Radius cutoff: {}, circle limit: {}", packing_target.radius_cutoff, packing_target.max_circles);
    }

    let packing = method.do_packing(packing_target.radius_cutoff, packing_target.max_circles)?;

    if verbose {
        match packing.min_radius() {
            Some(min_radius) => eprintln!("Packed {} circles, smallest radius {:.3e}", packing.circles.len(), min_radius),
            None => eprintln!("Packed no circles"),
        }
    }

    Ok(packing)
}

/// Pack circles into a triangle given by three corners.
/// Returns the three directed sides and every circle with radius above `radius_cutoff`.
pub fn pack_triangle<P: AsRef<[f64]>>(corners: &[P], radius_cutoff: f64) -> ProcResult<([Line; 3], Vec<Circle>)> {
    pack_triangle_with_limit(corners, radius_cutoff, DEFAULT_MAX_CIRCLES)
}

/// Same as `pack_triangle`, failing with `LimitReached` past `max_circles` spawned circles.
pub fn pack_triangle_with_limit<P: AsRef<[f64]>>(
    corners: &[P],
    radius_cutoff: f64,
    max_circles: usize,
) -> ProcResult<([Line; 3], Vec<Circle>)> {
    let (sides, driver) = triangle_driver(corners, radius_cutoff, max_circles)?;
    Ok((sides, circles_only(driver.run()?)))
}

/// Pack circles into an Apollonian gasket seeded by two touching circles.
/// The first circle returned is the enclosing circle, followed by the two seed circles.
pub fn pack_gasket(center1: &[f64], center2: &[f64], radius_ratio: f64, radius_cutoff: f64) -> ProcResult<Vec<Circle>> {
    pack_gasket_with_limit(center1, center2, radius_ratio, radius_cutoff, DEFAULT_MAX_CIRCLES)
}

/// Same as `pack_gasket`, failing with `LimitReached` past `max_circles` spawned circles.
pub fn pack_gasket_with_limit(
    center1: &[f64],
    center2: &[f64],
    radius_ratio: f64,
    radius_cutoff: f64,
    max_circles: usize,
) -> ProcResult<Vec<Circle>> {
    let driver = gasket_driver(center1, center2, radius_ratio, radius_cutoff, max_circles)?;
    Ok(circles_only(driver.run()?))
}

/// Driver primed with the three sides of a triangle.
fn triangle_driver<P: AsRef<[f64]>>(
    corners: &[P],
    radius_cutoff: f64,
    max_circles: usize,
) -> ProcResult<([Line; 3], Driver)> {
    let sides = seed::convert_triangle(corners)?;
    check_cutoff(radius_cutoff)?;

    let mut driver = Driver::new(
        SeedKind::Triangle,
        sides.iter().map(|side| Element::Line(*side)).collect(),
        radius_cutoff,
        max_circles,
    );
    driver.push([0, 1, 2]);

    Ok((sides, driver))
}

/// Driver primed with the gasket seed and both circles of its first layer.
fn gasket_driver(
    center1: &[f64],
    center2: &[f64],
    radius_ratio: f64,
    radius_cutoff: f64,
    max_circles: usize,
) -> ProcResult<Driver> {
    let seed_circles = seed::convert_circles(center1, center2, radius_ratio)?;
    check_cutoff(radius_cutoff)?;
    let [outer, inner1, inner2] = seed_circles;

    let mut driver = Driver::new(
        SeedKind::Gasket,
        seed_circles.iter().map(|circle| Element::Circle(*circle)).collect(),
        radius_cutoff,
        max_circles,
    );

    // The seed triple has two equally valid solutions; take both before plain descent
    for want_other in [false, true] {
        let circle = tangency::enclosed_circle(&outer, &inner1, &inner2, want_other);
        driver.offer([0, 1, 2], circle)?;
    }

    Ok(driver)
}

/// The cutoff is the only thing bounding the recursion depth.
fn check_cutoff(radius_cutoff: f64) -> ProcResult<()> {
    if !(radius_cutoff.is_finite() && radius_cutoff > 0.0) {
        return err_malformed(&format!("Radius cutoff must be a positive number, got {}", radius_cutoff));
    }
    Ok(())
}

/// Drop the boundary lines from a working set.
fn circles_only(elements: Vec<Element>) -> Vec<Circle> {
    elements.into_iter().filter_map(|element| match element {
        Element::Circle(circle) => Some(circle),
        Element::Line(_) => None,
    }).collect()
}
