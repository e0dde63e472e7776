/// Pluggable policies consumed by the traversal services.
pub mod generator_config;
pub mod naming;

pub use generator_config::{GeneratorConfig, PropertyOverride};
pub use naming::{AliasNaming, DefaultAliasNaming, DefaultVersionNaming, VersionNaming};
