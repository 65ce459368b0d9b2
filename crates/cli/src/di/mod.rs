mod cache;

pub use cache::CacheServices;
