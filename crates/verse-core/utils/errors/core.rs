//! Core error type for verse-core operations
//!
//! Provides the main `CoreError` enum that wraps all error types from different
//! modules in the crate. Designed for easy error propagation and conversion.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Divergent data is reported through verdicts, never through errors
//! - Range arithmetic violations are logic defects and always fatal
//! - Include suggestions for common error scenarios

use core::fmt;
use thiserror::Error;

use super::scan::ScanError;

/// Main error type for verse-core operations
///
/// Wraps all error types from different modules to provide a unified
/// error handling interface. Can be converted from module-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid chapter or verse numeral found by a strict scan
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Attempt to build a missing range backwards or narrow it past its end
    #[error("Illegal range operation: {0}")]
    IllegalRangeOperation(String),

    /// Section index does not exist in the book
    #[error("Section index {index} out of bounds for book with {len} sections")]
    SectionIndexOutOfBounds { index: usize, len: usize },

    /// Paragraph or run position does not exist in the section
    #[error("No run {run} in paragraph {paragraph} of section {section}")]
    PositionOutOfBounds {
        section: usize,
        paragraph: usize,
        run: usize,
    },

    /// Reference text could not be parsed
    #[error("Invalid reference '{0}'")]
    InvalidReference(String),

    /// Versification table could not be parsed
    #[error("Versification error at line {line}: {message}")]
    Versification { line: usize, message: String },
}

impl CoreError {
    /// Create illegal range error from message
    pub fn illegal_range<T: fmt::Display>(message: T) -> Self {
        Self::IllegalRangeOperation(format!("{message}"))
    }

    /// Create versification error for a source line
    pub fn versification<T: fmt::Display>(line: usize, message: T) -> Self {
        Self::Versification {
            line,
            message: format!("{message}"),
        }
    }

    /// Check if error is recoverable
    ///
    /// Scan errors can be skipped by resuming at the next run; range
    /// violations indicate a defect in the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Scan(_)
            | Self::InvalidReference(_)
            | Self::Versification { .. }
            | Self::SectionIndexOutOfBounds { .. }
            | Self::PositionOutOfBounds { .. } => true,

            Self::IllegalRangeOperation(_) => false,
        }
    }

    /// Check if error indicates a bug in the library or its caller
    #[must_use]
    pub const fn is_internal_bug(&self) -> bool {
        matches!(self, Self::IllegalRangeOperation(_))
    }

    /// Get suggested action for this error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Scan(ScanError::InvalidVerseNumber { .. }) => {
                Some("Use a verse number like '7' or a bridge like '3-5' within the chapter")
            }
            Self::Scan(ScanError::InvalidChapterNumber { .. }) => {
                Some("Use a chapter number within the book's versification")
            }
            Self::InvalidReference(_) => Some("Use format like 'GEN 1:11' for references"),
            Self::Versification { .. } => {
                Some("Use lines like 'GEN 1:31 2:25' listing every chapter in order")
            }
            Self::IllegalRangeOperation(_) => Some("Please report this bug to the maintainers"),
            Self::SectionIndexOutOfBounds { .. } | Self::PositionOutOfBounds { .. } => None,
        }
    }
}

/// Result type alias for verse-core operations
pub type Result<T> = core::result::Result<T, CoreError>;
