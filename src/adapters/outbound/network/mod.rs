/// Network adapters and fetcher composition
mod caching_model_fetcher;
mod chained_model_fetcher;
mod maven_repository_client;

pub use caching_model_fetcher::CachingModelFetcher;
pub use chained_model_fetcher::ChainedModelFetcher;
pub use maven_repository_client::{MavenRepositoryClient, MAVEN_CENTRAL_URL};
