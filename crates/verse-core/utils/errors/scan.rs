//! Run scanning errors
//!
//! Raised only by strict scans. Each error carries the literal numeral text
//! and the index of the offending run so a recovering caller can resume at
//! [`ScanError::next_index`] without re-examining the failing run.

use thiserror::Error;

/// Invalid chapter or verse numeral encountered during a strict scan
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// Verse-number run that is non-positive, malformed or past the chapter's last verse
    #[error("Invalid verse number '{text}' at run {position}")]
    InvalidVerseNumber { text: String, position: usize },

    /// Chapter-number run that is unparsable or past the book's last chapter
    #[error("Invalid chapter number '{text}' at run {position}")]
    InvalidChapterNumber { text: String, position: usize },
}

impl ScanError {
    /// Literal text of the offending run
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::InvalidVerseNumber { text, .. } | Self::InvalidChapterNumber { text, .. } => {
                text
            }
        }
    }

    /// Index of the offending run within its paragraph
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidVerseNumber { position, .. }
            | Self::InvalidChapterNumber { position, .. } => *position,
        }
    }

    /// Index at which a recovering caller should resume scanning
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.position() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_index_skips_failing_run() {
        let err = ScanError::InvalidVerseNumber {
            text: "0".to_string(),
            position: 4,
        };
        assert_eq!(err.position(), 4);
        assert_eq!(err.next_index(), 5);
        assert_eq!(err.text(), "0");
    }

    #[test]
    fn display_carries_text_and_position() {
        let err = ScanError::InvalidChapterNumber {
            text: "xii".to_string(),
            position: 2,
        };
        let shown = format!("{err}");
        assert!(shown.contains("'xii'"));
        assert!(shown.contains("run 2"));
    }
}
