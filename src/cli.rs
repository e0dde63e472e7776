use clap::Parser;

use crate::adapters::outbound::catalog::{JsonCatalogFormatter, TomlCatalogFormatter};
use crate::ports::outbound::CatalogFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'toml' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn CatalogFormatter> {
        match self {
            OutputFormat::Toml => Box::new(TomlCatalogFormatter::new()),
            OutputFormat::Json => Box::new(JsonCatalogFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Toml => "📝 Rendering version catalog as TOML...",
            OutputFormat::Json => "📝 Rendering version catalog as JSON...",
        }
    }
}

/// Generate gradle-style version catalogs from Maven BOMs
#[derive(Parser, Debug)]
#[command(name = "bom-catalog")]
#[command(version)]
#[command(
    about = "Generate version catalogs from Maven BOMs",
    long_about = "Walks a Maven BOM's dependency-management graph (nested BOM imports \
                  included), resolves version properties, and emits a flat version \
                  catalog of libraries, versions, and bundles."
)]
pub struct Args {
    /// Starting BOM coordinates (group:artifact:version).
    /// Can be given multiple times; all BOMs feed one traversal.
    #[arg(value_name = "COORDINATES")]
    pub bom: Vec<String>,

    /// Output format: toml or json [default: toml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to ./bom-catalog.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Remote Maven repository base URL
    #[arg(long, value_name = "URL")]
    pub repository: Option<String>,

    /// Local Maven repository directory to consult before the network
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<String>,

    /// Never touch the network; resolve POMs from the local repository only
    #[arg(long)]
    pub offline: bool,

    /// Exclude dependencies whose group id matches this regex (full match)
    #[arg(long = "exclude-group", value_name = "REGEX")]
    pub exclude_groups: Option<String>,

    /// Exclude dependencies whose artifact id matches this regex (full match)
    #[arg(long = "exclude-name", value_name = "REGEX")]
    pub exclude_names: Option<String>,

    /// Also register the source BOM itself as a catalog library
    #[arg(long = "bom-entry")]
    pub bom_entry: bool,

    /// Discover the starting BOM from an existing catalog file
    /// (requires --library)
    #[arg(long, value_name = "PATH", requires = "library")]
    pub from_catalog: Option<String>,

    /// Library alias to look up in the catalog given by --from-catalog
    #[arg(long, value_name = "ALIAS")]
    pub library: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
