use async_trait::async_trait;

use crate::catalog_generation::domain::{BomCoordinates, PomModel};
use crate::ports::outbound::ModelFetcher;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// ChainedModelFetcher - an ordered chain of fetch strategies.
///
/// Strategies are tried in order (typically: local repository first, then a
/// remote repository); the first successful fetch wins. Per-strategy
/// failures are swallowed until the chain is exhausted, at which point a
/// terminal unable-to-fetch error is raised carrying every strategy's
/// failure detail.
pub struct ChainedModelFetcher {
    strategies: Vec<Box<dyn ModelFetcher>>,
}

impl ChainedModelFetcher {
    pub fn new(strategies: Vec<Box<dyn ModelFetcher>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

#[async_trait]
impl ModelFetcher for ChainedModelFetcher {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        let mut attempts: Vec<String> = Vec::new();

        for strategy in &self.strategies {
            match strategy.fetch(coordinates).await {
                Ok(model) => return Ok(model),
                Err(e) => attempts.push(e.to_string()),
            }
        }

        let details = if attempts.is_empty() {
            "no fetch strategies configured".to_string()
        } else {
            attempts
                .iter()
                .enumerate()
                .map(|(i, e)| format!("strategy {}: {}", i + 1, e.lines().next().unwrap_or("")))
                .collect::<Vec<_>>()
                .join("; ")
        };

        Err(CatalogError::ModelNotFound {
            group_id: coordinates.group_id().to_string(),
            artifact_id: coordinates.artifact_id().to_string(),
            version: coordinates.version().to_string(),
            details,
        }
        .into())
    }
}
