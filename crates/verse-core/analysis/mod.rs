//! Coverage analysis over whole books
//!
//! Works on section boundaries kept current by [`crate::ranges`]:
//!
//! - [`find_holes`] lists verses no scripture section covers
//! - [`classify_overwrite`] decides whether a saved snapshot can replace
//!   the current book without losing verses
//! - [`validate_book`] reports malformed chapter and verse markers
//!
//! # Example
//!
//! ```rust
//! use verse_core::analysis::{classify_overwrite, Verdict};
//! use verse_core::model::{Book, Paragraph, Run, Section};
//! use verse_core::ranges::recompute_all;
//! use verse_core::versification::Scheme;
//!
//! let scheme = Scheme::english();
//! let section = |runs| Section::from_paragraphs(vec![Paragraph::new(runs)]);
//!
//! let mut current = Book::with_sections(1, vec![
//!     section(vec![Run::chapter("1"), Run::verse("1-10")]),
//!     section(vec![Run::verse("11-25")]),
//! ]);
//! recompute_all(&mut current, &scheme);
//!
//! let mut saved = current.clone();
//! saved.remove_sections(&[1])?;
//!
//! let report = classify_overwrite(&current, &saved.snapshot(), &scheme)?;
//! assert_eq!(report.verdict, Verdict::Partial);
//! assert_eq!(report.sections_to_remove, vec![1]);
//! # Ok::<(), verse_core::CoreError>(())
//! ```

pub mod holes;
pub mod overwrite;
pub mod validation;

pub use holes::find_holes;
pub use overwrite::{
    classify_overwrite, classify_overwrite_with_config, LossKind, OverwriteConfig,
    OverwriteReport, Verdict,
};
pub use validation::{validate_book, validate_book_with_config, RunDiagnostic, ValidationConfig};
