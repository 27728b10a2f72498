//! Error types for verse-core and cross-module error handling
//!
//! # Examples
//!
//! ```rust
//! use verse_core::utils::errors::{CoreError, ErrorCategory, ScanError};
//!
//! let err: CoreError = ScanError::InvalidVerseNumber {
//!     text: "0".to_string(),
//!     position: 3,
//! }
//! .into();
//!
//! assert_eq!(err.category(), ErrorCategory::Scanning);
//! assert!(err.is_recoverable());
//! assert!(err.suggestion().is_some());
//! ```

mod category;
mod core;
pub mod scan;

pub use category::ErrorCategory;
pub use self::core::{CoreError, Result};
pub use scan::ScanError;

/// Convert from integer parse errors
impl From<::core::num::ParseIntError> for CoreError {
    fn from(err: ::core::num::ParseIntError) -> Self {
        Self::InvalidReference(format!("Integer parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_creation_methods() {
        let range_err = CoreError::illegal_range("start after end");
        assert!(matches!(range_err, CoreError::IllegalRangeOperation(_)));

        let vrs_err = CoreError::versification(3, "chapter out of order");
        assert!(matches!(vrs_err, CoreError::Versification { line: 3, .. }));
        assert!(!vrs_err.is_internal_bug());
    }

    #[test]
    fn error_display() {
        let error = CoreError::illegal_range("GEN 1:14 after GEN 1:11");
        let display_str = format!("{error}");
        assert!(display_str.contains("Illegal range operation"));
        assert!(display_str.contains("GEN 1:14"));
    }

    #[test]
    fn scan_errors_are_transparent() {
        let scan = ScanError::InvalidChapterNumber {
            text: "abc".to_string(),
            position: 0,
        };
        let core_err: CoreError = scan.clone().into();
        assert_eq!(format!("{core_err}"), format!("{scan}"));
    }

    #[test]
    fn error_conversion() {
        let parse_int_err: ::core::num::ParseIntError = "abc".parse::<u16>().unwrap_err();
        let core_err: CoreError = parse_int_err.into();
        assert!(matches!(core_err, CoreError::InvalidReference(_)));
    }

    #[test]
    fn error_properties() {
        let error = CoreError::illegal_range("narrowed past end");
        assert_eq!(error.category(), ErrorCategory::Range);
        assert!(!error.category().is_user_fixable());
        assert!(!error.is_recoverable());
        assert!(error.is_internal_bug());
        assert_eq!(format!("{}", error.category()), "range");
    }

    #[test]
    fn lookup_errors_are_recoverable_configuration() {
        let errors = [
            CoreError::SectionIndexOutOfBounds { index: 4, len: 2 },
            CoreError::PositionOutOfBounds {
                section: 0,
                paragraph: 1,
                run: 3,
            },
        ];
        for error in errors {
            assert_eq!(error.category(), ErrorCategory::Configuration);
            assert!(error.is_recoverable());
            assert!(!error.is_internal_bug());
            assert!(error.suggestion().is_none());
        }
    }
}
