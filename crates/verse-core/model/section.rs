//! Sections and their verse-range boundaries

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Paragraph, TextContainer};
use crate::Reference;

/// The four boundary references of a section
///
/// - `start`: first reference found in the content
/// - `min` / `max`: lowest and highest references found
/// - `end`: reference in force after the last run, inherited by the next
///   section when it starts without a marker of its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionRange {
    /// First reference encountered
    pub start: Reference,
    /// Lowest reference encountered
    pub min: Reference,
    /// Highest reference encountered
    pub max: Reference,
    /// Reference in force at the end of the content
    pub end: Reference,
}

impl SectionRange {
    /// Range collapsed onto a single reference
    #[must_use]
    pub const fn at(reference: Reference) -> Self {
        Self {
            start: reference,
            min: reference,
            max: reference,
            end: reference,
        }
    }
}

/// Ordered element of a book: a heading plus scripture or introduction content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Section heading paragraphs
    pub heading: TextContainer,
    /// Section content paragraphs
    pub content: TextContainer,
    /// Boundaries maintained by range recomputation
    range: SectionRange,
}

impl Section {
    /// Create a section; boundaries stay at their sentinel until recomputed
    #[must_use]
    pub const fn new(heading: TextContainer, content: TextContainer) -> Self {
        Self {
            heading,
            content,
            range: SectionRange::at(Reference::new(0, 0, 0)),
        }
    }

    /// Create a section with no heading
    #[must_use]
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self::new(TextContainer::default(), TextContainer::new(paragraphs))
    }

    /// Current boundaries
    #[must_use]
    pub const fn range(&self) -> SectionRange {
        self.range
    }

    /// Overwrite the boundaries, e.g. when restoring persisted values
    pub fn set_range(&mut self, range: SectionRange) {
        self.range = range;
    }

    /// First reference encountered in the content
    #[must_use]
    pub const fn range_start(&self) -> Reference {
        self.range.start
    }

    /// Lowest reference in the content
    #[must_use]
    pub const fn range_min(&self) -> Reference {
        self.range.min
    }

    /// Highest reference in the content
    #[must_use]
    pub const fn range_max(&self) -> Reference {
        self.range.max
    }

    /// Reference in force at the end of the content
    #[must_use]
    pub const fn range_end(&self) -> Reference {
        self.range.end
    }

    /// Introduction sections end before any verse has been seen
    #[must_use]
    pub const fn is_introduction(&self) -> bool {
        self.range.end.verse == 0
    }

    /// Check whether the first content paragraph opens with its own marker
    ///
    /// Anchored sections do not depend on the previous section's end.
    #[must_use]
    pub fn is_self_anchored(&self) -> bool {
        self.content
            .paragraphs()
            .first()
            .is_some_and(Paragraph::starts_with_reference)
    }
}
