pub mod comparer;
pub mod eviction;
pub mod metrics;
pub mod port;
pub mod storage;

pub use comparer::{ActiveComparer, CaseInsensitive, DefaultComparer, KeyComparer};
pub use eviction::{EvictionPolicy, LruPolicy};
pub use metrics::CacheMetrics;
pub use port::ValueCacheAccess;
pub use storage::BoundedCache;
