use crate::catalog_generation::domain::{BomCoordinates, PomModel};
use crate::shared::Result;
use async_trait::async_trait;

/// ModelFetcher port for resolving BOM coordinates into parsed POM models.
///
/// This port abstracts where POMs come from - a local repository directory,
/// a remote Maven repository, an in-memory fixture - and lets the traversal
/// treat fetching as an opaque, pure function of coordinates.
///
/// # Async Support
/// Fetching is async so that a queue generation of BOMs can be prefetched
/// concurrently. Implementations must be `Send + Sync`; results for the
/// same coordinates must be stable for the lifetime of a traversal.
#[async_trait]
pub trait ModelFetcher: Send + Sync {
    /// Fetches and parses the POM identified by the given coordinates.
    ///
    /// # Errors
    /// Returns an error when no POM can be located for the coordinates or
    /// the located file cannot be parsed. Either failure is fatal for the
    /// traversal that requested it.
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel>;
}

#[async_trait]
impl<F: ModelFetcher + ?Sized> ModelFetcher for Box<F> {
    async fn fetch(&self, coordinates: &BomCoordinates) -> Result<PomModel> {
        (**self).fetch(coordinates).await
    }
}
