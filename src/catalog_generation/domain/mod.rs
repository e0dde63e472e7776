/// Domain models for catalog generation.
pub mod catalog;
pub mod coordinates;
pub mod model;

pub use catalog::{LibraryEntry, VersionCatalog, VersionSpec};
pub use coordinates::BomCoordinates;
pub use model::{Dependency, ParentRef, PomModel};
