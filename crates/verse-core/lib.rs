//! # verse-core
//!
//! Verse-range consistency engine for versified scripture translations.
//! Keeps every section's chapter and verse boundaries in step with its
//! content, and decides whether a saved snapshot of a book can replace the
//! current book without losing verses.
//!
//! ## Features
//!
//! - **Run scanning**: chapter and verse markers, including verse bridges
//! - **Range consolidation**: per-section boundaries with forward cascade
//! - **Hole finding**: verses no scripture section covers
//! - **Overwrite classification**: full, partial or lossy restore verdicts
//! - **Pluggable versification**: built-in English scheme plus `.vrs` tables
//!
//! ## Quick Start
//!
//! ```rust
//! use verse_core::{classify_overwrite, recompute_all, Verdict};
//! use verse_core::model::{Book, Paragraph, Run, Section};
//! use verse_core::versification::Scheme;
//!
//! let scheme = Scheme::english();
//! let section = |runs| Section::from_paragraphs(vec![Paragraph::new(runs)]);
//!
//! let mut current = Book::with_sections(1, vec![
//!     section(vec![Run::chapter("1"), Run::verse("1"), Run::text_run("In the beginning")]),
//!     section(vec![Run::verse("2"), Run::text_run("And the earth")]),
//! ]);
//! recompute_all(&mut current, &scheme);
//!
//! let saved = current.snapshot();
//! let report = classify_overwrite(&current, &saved, &scheme)?;
//! assert_eq!(report.verdict, Verdict::FullNoDataLoss);
//! # Ok::<(), verse_core::CoreError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs on caller-owned data. Mutating
//! operations take `&mut Book`, so exclusive access is enforced by the
//! borrow checker rather than by internal locking.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod model;
pub mod ranges;
pub mod reference;
pub mod scanner;
pub mod utils;
pub mod versification;

pub use analysis::{classify_overwrite, find_holes, OverwriteReport, Verdict};
pub use config::ProjectConfig;
pub use model::{Book, SavedSnapshot};
pub use ranges::{recompute_all, recompute_range};
pub use reference::{MissingRange, Reference};
pub use scanner::{scan_next_reference, RunKind};
pub use utils::CoreError;
pub use versification::{Scheme, Versification};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::model::{Paragraph, Run, Section};

    fn section(runs: Vec<Run>) -> Section {
        Section::from_paragraphs(vec![Paragraph::new(runs)])
    }

    /// Edit, recompute, and classify in one pass through the public API
    #[test]
    fn test_core_functionality_integration() {
        let scheme = Scheme::english();
        let mut current = Book::with_sections(
            1,
            vec![
                section(vec![Run::text_run("Introduction")]),
                section(vec![Run::chapter("1"), Run::verse("1-10")]),
                section(vec![Run::verse("11-14")]),
                section(vec![Run::verse("15-25")]),
            ],
        );
        recompute_all(&mut current, &scheme);
        assert!(find_holes(&current, &scheme).unwrap().is_empty());

        let mut saved = current.clone();
        saved.remove_sections(&[2]).unwrap();
        let saved = saved.snapshot();
        assert_eq!(find_holes(&saved, &scheme).unwrap().len(), 1);

        let report = classify_overwrite(&current, &saved, &scheme).unwrap();
        assert_eq!(report.verdict, Verdict::Partial);
        assert_eq!(report.sections_to_remove, vec![2]);
        assert_eq!(report.missing_ranges[0].to_string(), "GEN 1:11-14");

        current.remove_sections(&report.sections_to_remove).unwrap();
        let report = classify_overwrite(&current, &saved, &scheme).unwrap();
        assert_eq!(report.verdict, Verdict::FullNoDataLoss);
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
