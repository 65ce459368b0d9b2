pub mod cache;
pub mod fetch;

// Re-export use cases
pub use cache::GetCacheStatsUseCase;
pub use fetch::{FetchOutcome, FetchReport, FetchSequenceUseCase};
