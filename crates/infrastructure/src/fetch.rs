pub mod cache_layer;
pub mod simulated;

pub use cache_layer::CachedFetcher;
pub use simulated::SimulatedFetcher;
