mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Descartes circle packing tool.
#[derive(Debug, Parser)]
#[command(name = "soddy")]
pub struct SoddyCli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Parser for the subcommands of the soddy binary using clap.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[command(name = "run")]
    /// Run a packing from a config file and print the circles.
    Run(RunArgs),

    #[command(name = "example")]
    /// Print an example config file for a packing method.
    Example(ExampleArgs),
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Path to the packing config file (.yaml/.yml, .json or .toml).
    pub cfg_path: String,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Output format for the packing.
    pub format: Format,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long)]
    /// Packing method to show (lists the available methods if omitted).
    pub method: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Output format for the example config.
    pub format: Format,
}

/// Serialization formats for configs and results.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Serialize a value in this format.
    pub fn render<T: serde::Serialize>(&self, value: &T) -> ProcResult<String> {
        let text = match self {
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Toml => toml::to_string_pretty(value)?,
        };
        Ok(text)
    }
}

/// Parse the command line arguments for the soddy binary.
pub fn parse_cli_args() -> SoddyCli {
    SoddyCli::parse()
}
