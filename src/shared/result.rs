/// Type alias for Result with anyhow::Error as the error type.
/// Keeps error propagation uniform across domain, application, and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
