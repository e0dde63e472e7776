/// Catalog generation - the domain core of bom-catalog.
///
/// Contains pure domain models (`domain`), the traversal and resolution
/// services (`services`), and the pluggable naming/exclusion policies
/// (`policies`). Nothing in here performs I/O; fetching and presentation
/// are reached through ports.
pub mod domain;
pub mod policies;
pub mod services;
