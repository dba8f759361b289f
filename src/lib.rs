pub mod geo_2d;
pub mod packing;
pub mod args;
pub mod io;
mod crate_errors;

use strum::IntoEnumIterator;

pub use crate_errors::{
    SoddyError,
    SoddyResult,
    err_str,
};
pub use packing::{
    pack_triangle,
    pack_gasket,
    Packing,
};

/// [Stage 1.]
/// Load the packing target named on the command line.
/// Returns a `SoddyResult` with the `PackingTarget` or an `Err`.
pub fn build_target(run_args: &args::RunArgs) -> SoddyResult<packing::PackingTarget> {
    let packing_target = packing::PackingTarget::from_cfg_file(&run_args.cfg_path)?;
    if packing_target.verbose {
        eprintln!("Loaded packing config file: {}", run_args.cfg_path);
    }
    Ok(packing_target)
}

/// [Stage 2.]
/// Run the packing and serialize the result.
/// Returns a `SoddyResult` with the serialized `Packing` or an `Err`.
pub fn run_process(packing_target: &packing::PackingTarget, format: args::Format) -> SoddyResult<String> {
    let packing_out = packing::do_packing(packing_target)?;
    Ok(format.render(&packing_out)?)
}

/// Example config file for a method, or the list of methods when none is named.
/// Returns a `SoddyResult` with the text to display or an `Err`.
pub fn example_config(example_args: &args::ExampleArgs) -> SoddyResult<String> {
    let method_names: Vec<&'static str> = packing::MethodEnum::iter()
        .map(|method| method.get_method_name())
        .collect();
    let available_methods_str = format!("Available methods:\n    {}", method_names.join("\n    "));

    let target_method_name = match example_args.method.as_ref() {
        Some(target_method_name) => target_method_name,
        None => return Ok(available_methods_str),
    };

    match packing::MethodEnum::iter().find(|method| method.get_method_name() == target_method_name) {
        Some(method) => {
            let packing_target = packing::PackingTarget::new(method);
            Ok(example_args.format.render(&packing_target)?)
        },
        None => err_str(&format!("Method \"{}\" not found. {}", target_method_name, available_methods_str)),
    }
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;

    fn example_args(method: Option<&str>, format: args::Format) -> args::ExampleArgs {
        args::ExampleArgs{method: method.map(str::to_string), format}
    }

    #[test]
    fn example_lists_methods() {
        let listing = example_config(&example_args(None, args::Format::Yaml)).unwrap();
        assert!(listing.contains("triangle"));
        assert!(listing.contains("gasket"));
    }

    #[test]
    fn example_configs_load_back() {
        let text = example_config(&example_args(Some("triangle"), args::Format::Json)).unwrap();
        let target: packing::PackingTarget = serde_json::from_str(&text).unwrap();
        assert_eq!(target.method.get_method_name(), "triangle");

        let text = example_config(&example_args(Some("gasket"), args::Format::Yaml)).unwrap();
        assert!(text.contains("method:\n  gasket:\n"), "{}", text);
        let target: packing::PackingTarget = serde_yaml::from_str(&text).unwrap();
        assert_eq!(target.method.get_method_name(), "gasket");

        let text = example_config(&example_args(Some("triangle"), args::Format::Toml)).unwrap();
        let target: packing::PackingTarget = toml::from_str(&text).unwrap();
        assert_eq!(target.method.get_method_name(), "triangle");
    }

    #[test]
    fn example_rejects_unknown_method() {
        let error = example_config(&example_args(Some("square"), args::Format::Yaml)).unwrap_err();
        assert!(error.to_string().contains("square"));
    }

    #[test]
    fn run_process_prints_packing() {
        let mut packing_target = packing::PackingTarget::new(packing::MethodEnum::Gasket(Default::default()));
        packing_target.radius_cutoff = 1.0;
        let text = run_process(&packing_target, args::Format::Json).unwrap();
        let packing_out: Packing = serde_json::from_str(&text).unwrap();
        assert_eq!(packing_out.circles.len(), 3);
        assert!(packing_out.lines.is_empty());
    }
}
