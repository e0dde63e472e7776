use std::collections::HashMap;

use async_trait::async_trait;
use bom_catalog::prelude::*;

/// In-memory ModelFetcher backed by raw pom.xml fixtures.
///
/// Fixtures go through the real POM parser, so integration tests exercise
/// the same parse path production fetchers use.
pub struct InMemoryModelFetcher {
    models: HashMap<String, PomModel>,
}

impl InMemoryModelFetcher {
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Registers a POM under `group:artifact:version` coordinates.
    pub fn with_pom(mut self, coordinates: &str, pom_xml: &str) -> Self {
        let model = parse_pom(pom_xml).expect("test fixture POM must parse");
        self.models.insert(coordinates.to_string(), model);
        self
    }
}

impl Default for InMemoryModelFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelFetcher for InMemoryModelFetcher {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        self.models
            .get(&coordinates.to_string())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no fixture registered for {}", coordinates))
    }
}
