/// Catalog format adapters - serialization of the finished catalog and
/// parsing of existing catalog files.
mod catalog_file;
mod formatters;

pub use catalog_file::{find_library_coordinates, parse_catalog_file};
pub use formatters::{JsonCatalogFormatter, TomlCatalogFormatter};
