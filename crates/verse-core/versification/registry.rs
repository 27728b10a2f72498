//! Named scheme lookup with fallback to the built-in English scheme

use std::{collections::HashMap, sync::Arc};

use ahash::RandomState;

use super::{Scheme, Versification, ENGLISH_SCHEME_NAME};
use crate::utils::hashers::create_hash_map;

/// Registry of versification schemes selectable per project
///
/// Always contains the built-in English scheme, which is also the fallback
/// for names that cannot be resolved.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    /// Registered schemes keyed by lowercase name
    schemes: HashMap<String, Arc<Scheme>, RandomState>,
    /// Scheme returned when a lookup fails
    fallback: Arc<Scheme>,
}

impl SchemeRegistry {
    /// Create a registry holding only the built-in English scheme
    #[must_use]
    pub fn new() -> Self {
        let fallback = Arc::new(Scheme::english());
        let mut schemes = create_hash_map();
        schemes.insert(ENGLISH_SCHEME_NAME.to_ascii_lowercase(), Arc::clone(&fallback));
        Self { schemes, fallback }
    }

    /// Register a scheme under its own name, replacing any previous entry
    pub fn register(&mut self, scheme: Scheme) -> Arc<Scheme> {
        let scheme = Arc::new(scheme);
        self.schemes
            .insert(scheme.name().to_ascii_lowercase(), Arc::clone(&scheme));
        scheme
    }

    /// Look up a scheme by name, case-insensitive
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Scheme>> {
        self.schemes
            .get(&name.trim().to_ascii_lowercase())
            .map(Arc::clone)
    }

    /// Resolve a project's scheme, falling back to English
    ///
    /// A missing name silently selects English; a name that is not
    /// registered selects English with a warning.
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> Arc<Scheme> {
        match name {
            None => Arc::clone(&self.fallback),
            Some(name) => self.get(name).unwrap_or_else(|| {
                tracing::warn!(
                    requested = name,
                    fallback = ENGLISH_SCHEME_NAME,
                    "versification scheme not found, using default"
                );
                Arc::clone(&self.fallback)
            }),
        }
    }

    /// Names of all registered schemes, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .schemes
            .values()
            .map(|scheme| scheme.name().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
