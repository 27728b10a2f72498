//! Closed verse intervals used for coverage holes and lost material

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Reference;
use crate::{utils::CoreError, versification::Versification, Result};

/// Closed interval `[start, end]` of verses with no covering content
///
/// Construction rejects `start > end`, so every value is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MissingRange {
    /// First missing verse
    start: Reference,
    /// Last missing verse
    end: Reference,
}

impl MissingRange {
    /// Create a range covering `start..=end`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IllegalRangeOperation`] if `start` is after `end`.
    pub fn new(start: Reference, end: Reference) -> Result<Self> {
        if start > end {
            return Err(CoreError::illegal_range(format!(
                "range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range covering a single verse
    #[must_use]
    pub const fn single(reference: Reference) -> Self {
        Self {
            start: reference,
            end: reference,
        }
    }

    /// First missing verse
    #[must_use]
    pub const fn start(&self) -> Reference {
        self.start
    }

    /// Last missing verse
    #[must_use]
    pub const fn end(&self) -> Reference {
        self.end
    }

    /// Narrow the range to begin just after `reference`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IllegalRangeOperation`] if the new start would
    /// be past the range's end.
    pub fn starting_after(self, reference: Reference, scheme: &dyn Versification) -> Result<Self> {
        let start = reference.next_verse(scheme);
        if start > self.end {
            return Err(CoreError::illegal_range(format!(
                "cannot narrow {self} to start at {start}"
            )));
        }
        Ok(Self { start, ..self })
    }

    /// Check whether `reference` lies inside the range
    #[must_use]
    pub fn contains(&self, reference: Reference) -> bool {
        self.start <= reference && reference <= self.end
    }

    /// Check whether the whole span `min..=max` lies inside the range
    #[must_use]
    pub fn contains_span(&self, min: Reference, max: Reference) -> bool {
        self.start <= min && max <= self.end
    }

    /// Check whether any part of the span `min..=max` lies inside the range
    #[must_use]
    pub fn overlaps_span(&self, min: Reference, max: Reference) -> bool {
        self.start <= max && min <= self.end
    }

    /// Check whether the range ends strictly before `other` begins
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.end < other.start
    }
}

impl fmt::Display for MissingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.start, self.end);
        if start == end {
            write!(f, "{start}")
        } else if start.book != end.book {
            write!(f, "{start}-{end}")
        } else if start.chapter == end.chapter {
            write!(f, "{start}-{}", end.verse)
        } else {
            write!(f, "{start}-{}:{}", end.chapter, end.verse)
        }
    }
}
