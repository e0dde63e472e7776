use std::path::{Path, PathBuf};
use std::process;

use owo_colors::OwoColorize;

use bom_catalog::cli::{Args, OutputFormat};
use bom_catalog::config::{discover_config, load_config_from_path, ConfigFile};
use bom_catalog::prelude::*;
use bom_catalog::shared::ExitCode;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    // Load config file: explicit path, or auto-discovery in the cwd
    let file_config = match &args.config {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let sources = resolve_sources(&args, &file_config)?;
    let format = resolve_format(&args, &file_config)?;

    // Assemble generation policies (CLI flags win over file values)
    let exclude_groups = args
        .exclude_groups
        .as_deref()
        .or(file_config.exclude_groups.as_deref());
    let exclude_names = args
        .exclude_names
        .as_deref()
        .or(file_config.exclude_names.as_deref());
    let generator_config = GeneratorConfig::default()
        .with_filter(DependencyFilter::new(exclude_groups, exclude_names)?)
        .with_property_overrides(file_config.parsed_property_overrides()?)
        .with_bom_entry(args.bom_entry || file_config.generate_bom_entry.unwrap_or(false));

    // Create adapters (Dependency Injection)
    let fetcher = build_fetcher(&args, &file_config)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateCatalogUseCase::new(fetcher, progress_reporter);
    let request = CatalogRequest::new(sources, generator_config);

    // Execute use case
    let response = use_case.execute(request).await?;

    // Render and present; nothing is written before this point, so a failed
    // traversal never leaves a partial catalog behind.
    eprintln!("{}", format.progress_message());
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&response.catalog)?;

    let output_path = args.output.clone().or_else(|| file_config.output.clone());
    let presenter: Box<dyn OutputPresenter> = match output_path {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Determines the starting BOM coordinates, in precedence order:
/// positional CLI coordinates, then --from-catalog lookup, then the config
/// file's sources.
fn resolve_sources(args: &Args, file_config: &ConfigFile) -> Result<Vec<BomCoordinates>> {
    if !args.bom.is_empty() {
        return args.bom.iter().map(|s| BomCoordinates::parse(s)).collect();
    }

    if let Some(catalog_path) = &args.from_catalog {
        let path = Path::new(catalog_path);
        let alias = args
            .library
            .as_deref()
            .expect("clap enforces --library together with --from-catalog");
        let catalog = parse_catalog_file(path)?;
        return Ok(vec![find_library_coordinates(&catalog, alias, path)?]);
    }

    file_config
        .sources
        .iter()
        .flatten()
        .map(|s| BomCoordinates::parse(s))
        .collect()
}

/// CLI format flag wins; the config file fills in when absent.
fn resolve_format(args: &Args, file_config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match &file_config.format {
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid 'format' in config file: {}", e)),
        None => Ok(OutputFormat::Toml),
    }
}

/// Builds the fetch chain: local repository first when configured, then the
/// remote repository unless --offline was given. Everything is wrapped in a
/// cache so diamond-shaped BOM graphs fetch each POM once.
fn build_fetcher(
    args: &Args,
    file_config: &ConfigFile,
) -> Result<CachingModelFetcher<ChainedModelFetcher>> {
    let mut strategies: Vec<Box<dyn ModelFetcher>> = Vec::new();

    let local_repository = args
        .local_repository
        .as_deref()
        .or(file_config.local_repository.as_deref());
    if let Some(dir) = local_repository {
        strategies.push(Box::new(LocalRepositoryFetcher::new(dir)));
    }

    if !args.offline {
        let repository = args
            .repository
            .as_deref()
            .or(file_config.repository.as_deref())
            .unwrap_or(MAVEN_CENTRAL_URL);
        strategies.push(Box::new(MavenRepositoryClient::new(repository)?));
    }

    if strategies.is_empty() {
        anyhow::bail!(
            "--offline requires a local repository. \
             Provide one with --local-repository or in the config file."
        );
    }

    Ok(CachingModelFetcher::new(ChainedModelFetcher::new(
        strategies,
    )))
}
