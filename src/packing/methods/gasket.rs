use crate::packing;
use packing::methods;

use serde::{Serialize, Deserialize};

/// Gasket Method struct.
/// Packs an Apollonian gasket: two touching circles inside an enclosing one.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Center of the first inner circle, `[x, y]`.
    #[serde(default = "Method::default_center1")]
    center1: Vec<f64>,
    /// Center of the second inner circle, `[x, y]`.
    #[serde(default = "Method::default_center2")]
    center2: Vec<f64>,
    /// Share of the enclosing radius taken by the first inner circle, in (0, 1).
    #[serde(default = "Method::default_radius_ratio", alias = "ratio")]
    radius_ratio: f64,
}
impl Method {
    pub fn default_center1() -> Vec<f64> {
        vec![-1.0, -1.0]
    }
    pub fn default_center2() -> Vec<f64> {
        vec![1.0, 1.0]
    }
    pub fn default_radius_ratio() -> f64 {
        0.5
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            center1: Method::default_center1(),
            center2: Method::default_center2(),
            radius_ratio: Method::default_radius_ratio(),
        }
    }
}

impl methods::PackingMethodTrait for Method {
    /// Get the display name of the packing method.
    fn get_method_display_name(&self) -> &'static str {
        "Apollonian Gasket"
    }

    fn do_packing(&self, radius_cutoff: f64, max_circles: usize) -> packing::ProcResult<packing::Packing> {
        let circles = packing::pack_gasket_with_limit(
            &self.center1,
            &self.center2,
            self.radius_ratio,
            radius_cutoff,
            max_circles,
        )?;
        Ok(packing::Packing{
            lines: Vec::new(),
            circles,
        })
    }
}
