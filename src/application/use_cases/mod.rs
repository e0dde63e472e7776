/// Use cases module containing application business logic orchestration
mod generate_catalog;

pub use generate_catalog::GenerateCatalogUseCase;
