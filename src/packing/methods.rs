/*!
 * This is the packing methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `PackingMethodTrait` (and `Default`, for the example configs)
 * - An enum variant containing that struct in `MethodEnum`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{EnumIter, IntoStaticStr};

use crate::packing;

//
// ------------------------------------------------------------
// Code that requires modification to add a new packing method
//      |
//      V
//

// Source files for the packing methods
mod triangle;
mod gasket;

/// Packing methods enum.
/// Selected in the config file by its snake case name, e.g. `method: {gasket: ...}`.
/// To add a new method:
/// include it here
/// and implement the `PackingMethodTrait` trait for it.
#[derive(Debug, Serialize, Deserialize, Clone, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[enum_dispatch(PackingMethodTrait)]
pub enum MethodEnum {
    /// Circles packed into a triangle.
    Triangle(triangle::Method),
    /// Apollonian gasket seeded by two touching circles inside a third.
    Gasket(gasket::Method),
}

//
// ------------------------------------------------------------
// Shared interface every packing method implements
//      |
//      V
//

/// Packing method trait.
/// This trait must be implemented for all packing methods.
#[enum_dispatch]
pub trait PackingMethodTrait {
    /// Get the display name of the packing method.
    fn get_method_display_name(&self) -> &'static str;

    /// Run the packing.
    /// Returns a `ProcResult` with the `packing::Packing` or an `Err`.
    fn do_packing(&self, radius_cutoff: f64, max_circles: usize) -> packing::ProcResult<packing::Packing>;
}

impl MethodEnum {
    /// Config name of the method (the key used in the config file).
    pub fn get_method_name(&self) -> &'static str {
        self.into()
    }
}
