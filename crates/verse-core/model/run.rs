//! Styled runs of paragraph text

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character style tag carried by a run
///
/// Only chapter and verse numbers matter to the engine; every other
/// character style collapses to `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunStyle {
    /// Ordinary text
    #[default]
    Normal,
    /// Chapter number, e.g. `3`
    ChapterNumber,
    /// Verse number or verse bridge, e.g. `16` or `3-5`
    VerseNumber,
}

/// Atomic span of paragraph text
///
/// # Examples
///
/// ```rust
/// use verse_core::model::{Run, RunStyle};
///
/// let verse = Run::verse("3-5");
/// assert_eq!(verse.style(), RunStyle::VerseNumber);
/// assert_eq!(verse.text(), "3-5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Run {
    /// Style tag
    style: RunStyle,
    /// Literal text
    text: String,
}

impl Run {
    /// Create a run with an explicit style
    #[must_use]
    pub fn new(style: RunStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Ordinary text run
    #[must_use]
    pub fn text_run(text: impl Into<String>) -> Self {
        Self::new(RunStyle::Normal, text)
    }

    /// Chapter-number run
    #[must_use]
    pub fn chapter(text: impl Into<String>) -> Self {
        Self::new(RunStyle::ChapterNumber, text)
    }

    /// Verse-number run
    #[must_use]
    pub fn verse(text: impl Into<String>) -> Self {
        Self::new(RunStyle::VerseNumber, text)
    }

    /// Style tag
    #[must_use]
    pub const fn style(&self) -> RunStyle {
        self.style
    }

    /// Literal text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether this run is a chapter or verse number
    #[must_use]
    pub const fn is_reference_marker(&self) -> bool {
        matches!(self.style, RunStyle::ChapterNumber | RunStyle::VerseNumber)
    }
}
