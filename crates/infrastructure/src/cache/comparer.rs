use rustc_hash::{FxBuildHasher, FxHasher};
use std::hash::{BuildHasher, Hash, Hasher};

/// Key identity shared by the store and the eviction policy.
///
/// `hash_key` must agree with `keys_equal`: keys that compare equal hash
/// equally. When a cache with owned keys `K` is queried through a borrowed
/// form `Q` (`K: Borrow<Q>`), hashing `k` and `k.borrow()` must also agree.
pub trait KeyComparer<Q: ?Sized>: Send + Sync {
    fn hash_key(&self, key: &Q) -> u64;

    fn keys_equal(&self, a: &Q, b: &Q) -> bool;
}

/// Natural `Hash + Eq` identity, hashed with FxHash.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<Q: Hash + Eq + ?Sized> KeyComparer<Q> for DefaultComparer {
    #[inline]
    fn hash_key(&self, key: &Q) -> u64 {
        FxBuildHasher.hash_one(key)
    }

    #[inline]
    fn keys_equal(&self, a: &Q, b: &Q) -> bool {
        a == b
    }
}

/// ASCII case-insensitive identity for string-like keys.
///
/// `"KEY1"`, `"key1"` and `"Key1"` are the same key. Non-ASCII characters
/// are compared byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

impl<Q: AsRef<str> + ?Sized> KeyComparer<Q> for CaseInsensitive {
    fn hash_key(&self, key: &Q) -> u64 {
        let mut hasher = FxHasher::default();
        for byte in key.as_ref().bytes() {
            hasher.write_u8(byte.to_ascii_lowercase());
        }
        // Length terminator, mirrors what `str::hash` does.
        hasher.write_u8(0xff);
        hasher.finish()
    }

    #[inline]
    fn keys_equal(&self, a: &Q, b: &Q) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }
}

/// Comparer selected at run time from configuration.
///
/// Dispatch goes through a `match` instead of a vtable so the cache keeps a
/// single concrete type whichever identity the operator picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveComparer {
    Exact,
    IgnoreAsciiCase,
}

impl ActiveComparer {
    pub fn from_config(case_insensitive_keys: bool) -> Self {
        if case_insensitive_keys {
            Self::IgnoreAsciiCase
        } else {
            Self::Exact
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::IgnoreAsciiCase => "ignore-ascii-case",
        }
    }
}

impl<Q: Hash + Eq + AsRef<str> + ?Sized> KeyComparer<Q> for ActiveComparer {
    #[inline(always)]
    fn hash_key(&self, key: &Q) -> u64 {
        match self {
            Self::Exact => DefaultComparer.hash_key(key),
            Self::IgnoreAsciiCase => CaseInsensitive.hash_key(key),
        }
    }

    #[inline(always)]
    fn keys_equal(&self, a: &Q, b: &Q) -> bool {
        match self {
            Self::Exact => DefaultComparer.keys_equal(a, b),
            Self::IgnoreAsciiCase => CaseInsensitive.keys_equal(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_comparer_hash_matches_borrowed_form() {
        let owned = String::from("example");
        let hash_owned = KeyComparer::<String>::hash_key(&DefaultComparer, &owned);
        let hash_borrowed = KeyComparer::<str>::hash_key(&DefaultComparer, "example");
        assert_eq!(hash_owned, hash_borrowed);
    }

    #[test]
    fn test_case_insensitive_equal_keys_hash_equally() {
        let c = CaseInsensitive;
        assert!(c.keys_equal("KEY1", "key1"));
        assert_eq!(c.hash_key("KEY1"), c.hash_key("key1"));
        assert_eq!(c.hash_key("MiXeD"), c.hash_key(&String::from("mixed")));
    }

    #[test]
    fn test_case_insensitive_distinguishes_different_keys() {
        let c = CaseInsensitive;
        assert!(!c.keys_equal("key1", "key2"));
        assert!(!c.keys_equal("ab", "abc"));
    }

    #[test]
    fn test_active_comparer_from_config() {
        assert_eq!(ActiveComparer::from_config(false), ActiveComparer::Exact);
        assert_eq!(
            ActiveComparer::from_config(true),
            ActiveComparer::IgnoreAsciiCase
        );
        assert!(!ActiveComparer::Exact.keys_equal("A", "a"));
        assert!(ActiveComparer::IgnoreAsciiCase.keys_equal("A", "a"));
    }
}
