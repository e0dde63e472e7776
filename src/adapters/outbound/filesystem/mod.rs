/// Filesystem adapters for POM lookup and output writing
mod file_writer;
mod local_repository_fetcher;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use local_repository_fetcher::LocalRepositoryFetcher;
