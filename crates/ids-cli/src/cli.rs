//! CLI argument definitions for the IDS to Revit converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ids-revit",
    version,
    about = "Convert IDS requirements into Revit shared parameter files",
    long_about = "Convert an IDS (Information Delivery Specification) document into a\n\
                  Revit shared parameter file and a user-defined property set file\n\
                  for the Revit IFC exporter."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an IDS file into SharedParameters.txt and UserDefinedPsets.txt.
    Convert(ConvertArgs),

    /// Print the active IFC to Revit mapping tables.
    Mappings(MappingsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// IDS file to convert.
    #[arg(value_name = "INPUT", default_value = "requirements.ids")]
    pub input: PathBuf,

    /// Directory for the generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Mapping tables file (TOML). Falls back to $IDS_REVIT_MAPPINGS, then
    /// the built-in defaults.
    #[arg(long = "mappings", value_name = "FILE")]
    pub mappings: Option<PathBuf>,

    /// Convert and print the summary without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number parameter GUIDs sequentially instead of randomly.
    ///
    /// Two runs over the same input then produce identical files. Do not
    /// load such parameters into a project that already holds parameters
    /// from another deterministic run.
    #[arg(long = "deterministic-guids")]
    pub deterministic_guids: bool,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Mapping tables file (TOML). Falls back to $IDS_REVIT_MAPPINGS, then
    /// the built-in defaults.
    #[arg(long = "mappings", value_name = "FILE")]
    pub mappings: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
