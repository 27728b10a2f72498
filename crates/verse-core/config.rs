//! Per-project engine configuration
//!
//! A project names the versification scheme its text follows and tunes
//! overwrite classification. Every field has a default, so a partial or
//! empty configuration document is valid.
//!
//! # Example
//!
//! ```rust
//! use verse_core::config::ProjectConfig;
//! use verse_core::versification::{SchemeRegistry, Versification};
//!
//! let config = ProjectConfig::default().with_versification("English");
//! let scheme = config.resolve_scheme(&SchemeRegistry::new());
//! assert_eq!(scheme.name(), "English");
//! ```

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    analysis::OverwriteConfig,
    versification::{Scheme, SchemeRegistry},
};

/// Engine settings for one translation project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectConfig {
    /// Versification scheme name; `None` selects English
    pub versification: Option<String>,
    /// Overwrite classification options
    pub overwrite: OverwriteConfig,
}

impl ProjectConfig {
    /// Select a versification scheme by name
    #[must_use]
    pub fn with_versification(mut self, name: impl Into<String>) -> Self {
        self.versification = Some(name.into());
        self
    }

    /// Replace the overwrite options
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: OverwriteConfig) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Scheme this project uses, or English if it cannot be found
    #[must_use]
    pub fn resolve_scheme(&self, registry: &SchemeRegistry) -> Arc<Scheme> {
        registry.resolve(self.versification.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versification::{Versification, ENGLISH_SCHEME_NAME};

    #[test]
    fn defaults_select_english_and_allow_partial() {
        let config = ProjectConfig::default();
        assert_eq!(config.versification, None);
        assert!(config.overwrite.allow_partial);
        assert!(config.overwrite.compare_back_translations);
        assert_eq!(
            config.resolve_scheme(&SchemeRegistry::new()).name(),
            ENGLISH_SCHEME_NAME
        );
    }

    #[test]
    fn registered_scheme_is_resolved() {
        let mut registry = SchemeRegistry::new();
        let mut custom = Scheme::new("Custom");
        custom.set_book(65, vec![24]);
        registry.register(custom);

        let config = ProjectConfig::default().with_versification("custom");
        let scheme = config.resolve_scheme(&registry);
        assert_eq!(scheme.name(), "Custom");
        assert_eq!(scheme.last_verse(65, 1), 24);
    }

    #[test]
    fn unknown_scheme_falls_back() {
        let config = ProjectConfig::default().with_versification("Vulgate");
        let scheme = config.resolve_scheme(&SchemeRegistry::new());
        assert_eq!(scheme.name(), ENGLISH_SCHEME_NAME);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_documents_use_defaults() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"overwrite": {"allow_partial": false}}"#).unwrap();
        assert_eq!(config.versification, None);
        assert!(!config.overwrite.allow_partial);
        assert!(config.overwrite.compare_back_translations);

        let json = serde_json::to_string(&ProjectConfig::default().with_versification("English"))
            .unwrap();
        assert!(json.contains(r#""versification":"English""#));
    }
}
