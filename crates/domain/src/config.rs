pub mod cache;
pub mod errors;
pub mod fetch;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use fetch::FetchConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
