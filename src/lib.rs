//! bom-catalog - version catalog generation from Maven BOMs
//!
//! This library walks a Maven BOM's dependency-management graph (nested BOM
//! imports included), resolves version properties to concrete values, and
//! accumulates a flat version catalog of libraries, shared versions, and
//! bundles, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog_generation`): Pure traversal and resolution
//!   logic plus domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_catalog::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let fetcher = CachingModelFetcher::new(MavenRepositoryClient::maven_central()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateCatalogUseCase::new(fetcher, progress_reporter);
//!
//! // Execute
//! let sources = vec![BomCoordinates::parse(
//!     "org.springframework.boot:spring-boot-dependencies:3.2.0",
//! )?];
//! let request = CatalogRequest::new(sources, GeneratorConfig::default());
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = TomlCatalogFormatter::new();
//! let output = formatter.format(&response.catalog)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog_generation;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{
        find_library_coordinates, parse_catalog_file, JsonCatalogFormatter, TomlCatalogFormatter,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, LocalRepositoryFetcher, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        CachingModelFetcher, ChainedModelFetcher, MavenRepositoryClient, MAVEN_CENTRAL_URL,
    };
    pub use crate::adapters::outbound::pom::parse_pom;
    pub use crate::application::dto::{CatalogRequest, CatalogResponse};
    pub use crate::application::use_cases::GenerateCatalogUseCase;
    pub use crate::catalog_generation::domain::{
        BomCoordinates, Dependency, LibraryEntry, ParentRef, PomModel, VersionCatalog, VersionSpec,
    };
    pub use crate::catalog_generation::policies::{
        AliasNaming, DefaultAliasNaming, DefaultVersionNaming, GeneratorConfig, PropertyOverride,
        VersionNaming,
    };
    pub use crate::catalog_generation::services::{
        BomWalker, DependencyFilter, ExclusionReason, GenerationOutcome, TraversalWarning,
    };
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogSink, ModelFetcher, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
