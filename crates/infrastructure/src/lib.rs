pub mod cache;
pub mod fetch;

pub use cache::{
    ActiveComparer, BoundedCache, CacheMetrics, CaseInsensitive, DefaultComparer,
    EvictionPolicy, KeyComparer, LruPolicy, ValueCacheAccess,
};
pub use fetch::{CachedFetcher, SimulatedFetcher};
