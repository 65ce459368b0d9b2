//! Memocache Domain Layer
pub mod config;
pub mod errors;

pub use config::{CacheConfig, CliOverrides, Config, ConfigError, FetchConfig, LoggingConfig};
pub use errors::DomainError;
