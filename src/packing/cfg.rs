use crate::args;
use crate::packing::{
    driver::DEFAULT_MAX_CIRCLES,
    MethodEnum,
};
use serde::{Serialize, Deserialize};

/// Packing target struct.
/// Everything needed for one packing run, as read from a config file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackingTarget {
    /// Circles with a radius at or below this are not kept (and not expanded).
    #[serde(default = "PackingTarget::default_radius_cutoff", alias = "cutoff", alias = "radius_limit")]
    pub radius_cutoff: f64,

    /// Safety limit on the number of circles spawned in one run.
    #[serde(default = "PackingTarget::default_max_circles")]
    pub max_circles: usize,

    /// Print progress notes to stderr.
    #[serde(default)]
    pub verbose: bool,

    /// Packing method and its arguments, written as a one-key map (`method: {gasket: ...}`).
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub method: MethodEnum,
}
impl PackingTarget {
    pub fn default_radius_cutoff() -> f64 {
        0.01
    }
    pub fn default_max_circles() -> usize {
        DEFAULT_MAX_CIRCLES
    }

    /// Construct a packing target with default settings around a method.
    pub fn new(method: MethodEnum) -> Self {
        PackingTarget{
            radius_cutoff: PackingTarget::default_radius_cutoff(),
            max_circles: PackingTarget::default_max_circles(),
            verbose: false,
            method,
        }
    }

    /// Construct a packing target from a config file (json, toml or yaml).
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let target: PackingTarget = crate::io::read_cfg_file(cfg_file)?;

        if !(target.radius_cutoff.is_finite() && target.radius_cutoff > 0.0) {
            return args::err_str(&format!("radius_cutoff must be a positive number, got {}", target.radius_cutoff));
        }
        if target.max_circles == 0 {
            return args::err_str("max_circles must be at least 1");
        }

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let target: PackingTarget = serde_yaml::from_str("method:\n  gasket: {}\n").unwrap();
        assert_eq!(target.radius_cutoff, 0.01);
        assert_eq!(target.max_circles, DEFAULT_MAX_CIRCLES);
        assert!(!target.verbose);
        assert_eq!(target.method.get_method_name(), "gasket");
    }

    #[test]
    fn toml_and_json_select_methods_too() {
        let toml_cfg = "cutoff = 0.2\n\n[method.triangle]\ncorners = [[0, 0], [1, 0], [0, 1]]\n";
        let target: PackingTarget = toml::from_str(toml_cfg).unwrap();
        assert_eq!(target.radius_cutoff, 0.2);
        assert_eq!(target.method.get_method_name(), "triangle");

        let json_cfg = r#"{"radius_cutoff": 0.5, "method": {"gasket": {"radius_ratio": 0.3}}}"#;
        let target: PackingTarget = serde_json::from_str(json_cfg).unwrap();
        assert_eq!(target.method.get_method_name(), "gasket");
    }

    #[test]
    fn yaml_method_is_a_one_key_map() {
        let yaml_cfg = "radius_cutoff: 0.5\nmethod:\n  triangle:\n    corners: [[0, 0], [1, 0], [0, 1]]\n";
        let target: PackingTarget = serde_yaml::from_str(yaml_cfg).unwrap();
        assert_eq!(target.method.get_method_name(), "triangle");

        // Written back the same way, never as a `!triangle` tag
        let text = serde_yaml::to_string(&target).unwrap();
        assert!(text.contains("method:\n  triangle:\n"), "{}", text);
        assert!(!text.contains('!'));
        let reread: PackingTarget = serde_yaml::from_str(&text).unwrap();
        assert_eq!(reread.method.get_method_name(), "triangle");
        assert_eq!(reread.radius_cutoff, 0.5);
    }

    #[test]
    fn json_and_toml_keep_the_map_form() {
        let target = PackingTarget::new(MethodEnum::Gasket(Default::default()));
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&target).unwrap()).unwrap();
        assert_eq!(json["method"]["gasket"]["radius_ratio"], 0.5);

        let text = toml::to_string(&target).unwrap();
        let reread: PackingTarget = toml::from_str(&text).unwrap();
        assert_eq!(reread.method.get_method_name(), "gasket");
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(serde_yaml::from_str::<PackingTarget>("method:\n  hexagon: {}\n").is_err());
    }

    #[test]
    fn cfg_file_is_checked() {
        let target = PackingTarget::from_cfg_file("tests/data/gasket.yaml").unwrap();
        assert_eq!(target.radius_cutoff, 1.0);
        assert_eq!(target.method.get_method_name(), "gasket");
        assert!(PackingTarget::from_cfg_file("tests/data/zero_cutoff.yaml").is_err());
        assert!(PackingTarget::from_cfg_file("tests/data/missing.yaml").is_err());
    }
}
