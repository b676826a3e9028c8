//! Command-line interface definitions for `env-overlay`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use env_overlay::SettingsOverrides;
use env_overlay::codec::DocumentFormat;

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML text.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Yaml => Self::Yaml,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Parsed CLI arguments for `env-overlay`.
#[derive(Debug, Parser)]
#[command(name = "env-overlay")]
#[command(about = "Merge a base configuration document with per-environment overrides")]
#[command(version)]
pub struct Args {
    /// Settings file (defaults to `env-overlay.toml` when present).
    #[arg(long, value_name = "path", global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Document naming flags.
    #[command(flatten)]
    pub naming: NamingArgs,
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Flags overriding the document naming convention.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct NamingArgs {
    /// File name of the base document.
    #[arg(long, value_name = "name", global = true)]
    pub base_name: Option<String>,
    /// Leading segment of override file names.
    #[arg(long, value_name = "prefix", global = true)]
    pub override_prefix: Option<String>,
    /// Leading segment of generated file names.
    #[arg(long, value_name = "prefix", global = true)]
    pub output_prefix: Option<String>,
    /// Extension of override and generated files.
    #[arg(long, value_name = "ext", global = true)]
    pub extension: Option<String>,
}

impl NamingArgs {
    /// Settings overrides carrying these flags and an optional output directory.
    #[must_use]
    pub fn overrides(&self, output_dir: Option<Utf8PathBuf>) -> SettingsOverrides {
        SettingsOverrides {
            base_name: self.base_name.clone(),
            override_prefix: self.override_prefix.clone(),
            output_prefix: self.output_prefix.clone(),
            extension: self.extension.clone(),
            output_dir,
        }
    }
}

/// Subcommands understood by `env-overlay`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List environments that have an override document among FILES.
    Environments(FilesArgs),
    /// Merge the base with one environment's override and write the result.
    Generate(GenerateArgs),
    /// Merge two arbitrary documents and print the result.
    Merge(MergeArgs),
    /// Show top-level entries of every document side by side.
    Compare(CompareArgs),
}

/// Documents to load.
#[derive(Debug, ClapArgs)]
pub struct FilesArgs {
    /// Document files (base and overrides).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
}

/// Arguments for `generate`.
#[derive(Debug, ClapArgs)]
pub struct GenerateArgs {
    /// Environment to generate, for example `prod`.
    pub environment: String,
    /// Document files (base and overrides).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
    /// Directory the generated document is written to.
    #[arg(long, value_name = "path")]
    pub output_dir: Option<Utf8PathBuf>,
    /// Print the merged document instead of writing it.
    #[arg(long = "stdout")]
    pub should_print: bool,
}

/// Arguments for `merge`.
#[derive(Debug, ClapArgs)]
pub struct MergeArgs {
    /// Base document.
    pub base: Utf8PathBuf,
    /// Override document applied on top of the base.
    pub overlay: Utf8PathBuf,
    /// Output format (defaults to the base document's format).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `compare`.
#[derive(Debug, ClapArgs)]
pub struct CompareArgs {
    /// Document files to compare.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
    /// Format used to render each cell.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}
