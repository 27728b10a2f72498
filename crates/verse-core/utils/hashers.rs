//! Hash container utilities backed by ahash
//!
//! Used for the scheme registry and for back-translation locale sets.
//! Callers that expose results sort them first, so iteration order of these
//! containers never leaks into reports.

use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Create a new `HashMap` with the ahash hasher
///
/// # Example
///
/// ```rust
/// use verse_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a new `HashSet` with the ahash hasher
///
/// # Example
///
/// ```rust
/// use verse_core::utils::hashers::create_hash_set;
///
/// let mut locales = create_hash_set::<String>();
/// locales.insert("en".to_string());
/// assert!(locales.contains("en"));
/// ```
#[must_use]
pub fn create_hash_set<T>() -> HashSet<T, RandomState> {
    HashSet::with_hasher(RandomState::new())
}
