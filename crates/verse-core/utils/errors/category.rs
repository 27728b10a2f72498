//! Error categorization and display utilities for verse-core
//!
//! Provides error categorization for filtering, grouping, and user interface
//! organization.

use super::CoreError;
use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use verse_core::utils::errors::{CoreError, ErrorCategory};
///
/// let error = CoreError::illegal_range("start after end");
/// assert_eq!(error.category(), ErrorCategory::Range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid chapter or verse numerals in run text
    ///
    /// Found by strict scans of imported or edited content. The text is
    /// user data and can be corrected.
    Scanning,

    /// Range arithmetic violations
    ///
    /// Missing ranges built backwards or narrowed past their end. These
    /// indicate a logic defect rather than bad user data.
    Range,

    /// Versification table and reference syntax errors
    Versification,

    /// Configuration and lookup errors
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanning => write!(f, "scanning"),
            Self::Range => write!(f, "range"),
            Self::Versification => write!(f, "versification"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

impl ErrorCategory {
    /// Check if errors in this category are typically user-fixable
    #[must_use]
    pub const fn is_user_fixable(self) -> bool {
        match self {
            Self::Scanning | Self::Versification | Self::Configuration => true,
            Self::Range => false,
        }
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Scan(_) => ErrorCategory::Scanning,
            Self::IllegalRangeOperation(_) => ErrorCategory::Range,
            Self::InvalidReference(_) | Self::Versification { .. } => {
                ErrorCategory::Versification
            }
            Self::SectionIndexOutOfBounds { .. } | Self::PositionOutOfBounds { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
