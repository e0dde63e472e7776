use crate::catalog_generation::domain::BomCoordinates;
use crate::catalog_generation::policies::GeneratorConfig;

/// CatalogRequest - Internal request DTO for catalog generation use case
///
/// Carries the starting BOM coordinates (one or more sources feeding a
/// single traversal) together with the assembled generation policies.
#[derive(Debug)]
pub struct CatalogRequest {
    /// Starting BOM coordinates; all sources feed the same traversal and
    /// share its dedup/property state.
    pub sources: Vec<BomCoordinates>,
    /// Naming policies, exclusion filter, overrides, bom-entry flag.
    pub config: GeneratorConfig,
}

impl CatalogRequest {
    pub fn new(sources: Vec<BomCoordinates>, config: GeneratorConfig) -> Self {
        Self { sources, config }
    }
}
