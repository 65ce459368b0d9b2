pub mod lru;
pub mod order;
pub mod policy;

pub use lru::LruPolicy;
pub use order::RecencyList;
pub use policy::EvictionPolicy;
