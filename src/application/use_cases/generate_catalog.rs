use crate::application::dto::{CatalogRequest, CatalogResponse};
use crate::catalog_generation::services::BomWalker;
use crate::ports::outbound::{ModelFetcher, ProgressReporter};
use crate::shared::Result;

/// GenerateCatalogUseCase - Core use case for version catalog generation
///
/// Orchestrates the catalog generation workflow using generic dependency
/// injection for all infrastructure dependencies. The traversal itself is
/// delegated to the BomWalker; this layer owns user-facing progress and the
/// all-or-nothing result contract: a response is only produced once the
/// whole traversal has succeeded.
///
/// # Type Parameters
/// * `F` - ModelFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateCatalogUseCase<F, PR> {
    model_fetcher: F,
    progress_reporter: PR,
}

impl<F, PR> GenerateCatalogUseCase<F, PR>
where
    F: ModelFetcher,
    PR: ProgressReporter,
{
    /// Creates a new GenerateCatalogUseCase with injected dependencies
    pub fn new(model_fetcher: F, progress_reporter: PR) -> Self {
        Self {
            model_fetcher,
            progress_reporter,
        }
    }

    /// Executes the catalog generation use case
    ///
    /// # Arguments
    /// * `request` - Catalog generation request with source BOMs and policies
    ///
    /// # Returns
    /// CatalogResponse containing the accumulated catalog and warnings
    pub async fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse> {
        if request.sources.is_empty() {
            anyhow::bail!(
                "No source BOM specified. Provide coordinates on the command line, \
                 in the config file, or via --from-catalog."
            );
        }

        let sources = request
            .sources
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.progress_reporter
            .report(&format!("🔎 Generating version catalog from: {}", sources));

        let walker = BomWalker::new(
            &self.model_fetcher,
            &request.config,
            &self.progress_reporter,
        );
        let outcome = walker.walk(&request.sources).await?;

        if outcome.catalog.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The generated catalog is empty.");
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Catalog generated: {} version(s), {} librar{}, {} bundle(s) from {} BOM(s), {} warning(s)",
            outcome.catalog.version_count(),
            outcome.catalog.library_count(),
            if outcome.catalog.library_count() == 1 { "y" } else { "ies" },
            outcome.catalog.bundle_count(),
            outcome.visited_boms,
            outcome.warnings.len(),
        ));

        Ok(CatalogResponse::new(
            outcome.catalog,
            outcome.warnings,
            outcome.visited_boms,
        ))
    }
}
