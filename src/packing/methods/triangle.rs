use crate::packing;
use packing::methods;

use serde::{Serialize, Deserialize};

/// Triangle Method struct.
/// Packs circles into the triangle spanned by three corners.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Triangle corners, each `[x, y]`.
    #[serde(default = "Method::default_corners", alias = "triangle")]
    corners: Vec<Vec<f64>>,
}
impl Method {
    pub fn default_corners() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0],
            vec![2.0, 2.0 * 3.0_f64.sqrt()],
        ]
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            corners: Method::default_corners(),
        }
    }
}

impl methods::PackingMethodTrait for Method {
    /// Get the display name of the packing method.
    fn get_method_display_name(&self) -> &'static str {
        "Triangle"
    }

    fn do_packing(&self, radius_cutoff: f64, max_circles: usize) -> packing::ProcResult<packing::Packing> {
        let (sides, circles) = packing::pack_triangle_with_limit(&self.corners, radius_cutoff, max_circles)?;
        Ok(packing::Packing{
            lines: sides.to_vec(),
            circles,
        })
    }
}
