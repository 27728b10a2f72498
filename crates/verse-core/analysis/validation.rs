//! Strict validation of chapter and verse markers
//!
//! Range recomputation skips malformed markers silently. Import and
//! checking tools want to see them instead, so [`validate_book`] rescans
//! every content paragraph strictly and collects one diagnostic per bad
//! marker, resuming after each failure.

use core::fmt;

use crate::{
    model::Book,
    ranges::{reference_at, TextPosition},
    scanner::{scan_next_reference, scan_to_end, ScanCursor, ScanError, ScanMode},
    versification::Versification,
    Result,
};

/// Invalid marker found by strict validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDiagnostic {
    /// Section index
    pub section: usize,
    /// Content paragraph index within the section
    pub paragraph: usize,
    /// Offending run, with its position within the paragraph
    pub error: ScanError,
}

impl RunDiagnostic {
    /// Location of the offending run
    #[must_use]
    pub const fn position(&self) -> TextPosition {
        TextPosition::new(self.section, self.paragraph, self.error.position())
    }
}

impl fmt::Display for RunDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "section {}, paragraph {}: {}",
            self.section, self.paragraph, self.error
        )
    }
}

/// Options for strict validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum number of diagnostics to report (0 = unlimited)
    pub max_diagnostics: usize,
}

impl ValidationConfig {
    /// Set maximum number of diagnostics
    #[must_use]
    pub const fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = max;
        self
    }

    const fn is_full(&self, count: usize) -> bool {
        self.max_diagnostics > 0 && count >= self.max_diagnostics
    }
}

/// Every invalid chapter or verse marker in the book's section content
///
/// # Errors
///
/// Propagates lookup failures from [`reference_at`]; a book whose sections
/// all exist never fails.
pub fn validate_book(book: &Book, scheme: &dyn Versification) -> Result<Vec<RunDiagnostic>> {
    validate_book_with_config(book, scheme, &ValidationConfig::default())
}

/// Invalid markers in the book's section content, limited by `config`
///
/// # Errors
///
/// See [`validate_book`].
pub fn validate_book_with_config(
    book: &Book,
    scheme: &dyn Versification,
    config: &ValidationConfig,
) -> Result<Vec<RunDiagnostic>> {
    let mut diagnostics = Vec::new();

    for (section_index, section) in book.sections().iter().enumerate() {
        if section.content.is_empty() {
            continue;
        }
        let seed = reference_at(book, TextPosition::new(section_index, 0, 0), scheme)?;
        let mut carried = ScanCursor::at(seed);

        for (paragraph_index, paragraph) in section.content.paragraphs().iter().enumerate() {
            let runs = paragraph.runs();
            let mut cursor = carried;
            let mut index = 0;

            while index < runs.len() {
                match scan_next_reference(runs, index, runs.len(), ScanMode::Strict, cursor, scheme) {
                    Ok(step) if step.kind.is_marker() => {
                        cursor = step.cursor;
                        index = step.next_index;
                    }
                    Ok(_) => break,
                    Err(error) => {
                        index = error.next_index();
                        diagnostics.push(RunDiagnostic {
                            section: section_index,
                            paragraph: paragraph_index,
                            error,
                        });
                        if config.is_full(diagnostics.len()) {
                            return Ok(diagnostics);
                        }
                    }
                }
            }

            carried = scan_to_end(runs, carried, scheme);
        }
    }

    Ok(diagnostics)
}
