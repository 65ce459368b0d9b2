use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of admitted keys. Must be greater than zero.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Treat keys that differ only in ASCII case as the same key.
    #[serde(default)]
    pub case_insensitive_keys: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            case_insensitive_keys: false,
        }
    }
}

fn default_capacity() -> usize {
    3
}
