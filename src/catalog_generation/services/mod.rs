/// Traversal and resolution services - the algorithmic core.
pub mod alias_registry;
pub mod bom_walker;
pub mod dependency_filter;
pub mod property_collector;
pub mod version_resolver;

pub use alias_registry::{AliasRegistry, Registration};
pub use bom_walker::{BomWalker, ExclusionReason, GenerationOutcome, TraversalWarning};
pub use dependency_filter::DependencyFilter;
pub use property_collector::{collect_properties, CollectedProperties};
pub use version_resolver::{resolve_version, strip_reference, ResolvedVersion};
