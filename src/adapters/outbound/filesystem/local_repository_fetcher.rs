use std::path::PathBuf;

use async_trait::async_trait;

use crate::adapters::outbound::pom::parse_pom;
use crate::catalog_generation::domain::{BomCoordinates, PomModel};
use crate::ports::outbound::ModelFetcher;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// LocalRepositoryFetcher adapter for resolving POMs from a local Maven
/// repository directory (e.g. `~/.m2/repository` or a CI cache).
///
/// The repository root is an explicit constructor argument - there is no
/// process-wide mutable home-directory state, so two traversals with
/// different roots can run side by side.
pub struct LocalRepositoryFetcher {
    root: PathBuf,
}

impl LocalRepositoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Standard repository layout:
    /// `{root}/{group/as/path}/{artifact}/{version}/{artifact}-{version}.pom`
    fn pom_path(&self, coordinates: &BomCoordinates) -> PathBuf {
        let mut path = self.root.clone();
        for segment in coordinates.group_id().split('.') {
            path.push(segment);
        }
        path.push(coordinates.artifact_id());
        path.push(coordinates.version());
        path.push(format!(
            "{}-{}.pom",
            coordinates.artifact_id(),
            coordinates.version()
        ));
        path
    }
}

#[async_trait]
impl ModelFetcher for LocalRepositoryFetcher {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        let path = self.pom_path(coordinates);

        let content = std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::ModelNotFound {
                group_id: coordinates.group_id().to_string(),
                artifact_id: coordinates.artifact_id().to_string(),
                version: coordinates.version().to_string(),
                details: format!("{}: {}", path.display(), e),
            }
        })?;

        parse_pom(&content).map_err(|e| {
            CatalogError::PomParse {
                coordinates: coordinates.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
