//! Scripture references and verse arithmetic
//!
//! A [`Reference`] is an immutable `(book, chapter, verse)` triple ordered
//! by book, then chapter, then verse. Verse 0 is the "no verse yet" sentinel
//! used for introduction material.
//!
//! Stepping operations never mutate in place: each returns a new value, and
//! each needs the [`Versification`] in force to know where chapters end.
//!
//! # Example
//!
//! ```rust
//! use verse_core::{Reference, versification::Scheme};
//!
//! let english = Scheme::english();
//! let last = Reference::new(1, 1, 31);
//!
//! assert_eq!(last.next_verse(&english), Reference::new(1, 2, 1));
//! assert_eq!(Reference::new(1, 2, 1).previous_verse(&english), last);
//! assert_eq!(last.to_string(), "GEN 1:31");
//! ```

use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    utils::CoreError,
    versification::{book_code, book_number, Versification},
};

mod range;

pub use range::MissingRange;

/// A verse position within a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reference {
    /// Canonical book number (1 = Genesis)
    pub book: u8,
    /// Chapter number, 0 only as a structural sentinel
    pub chapter: u16,
    /// Verse number, 0 meaning "no verse yet"
    pub verse: u16,
}

impl Reference {
    /// Create a reference
    #[must_use]
    pub const fn new(book: u8, chapter: u16, verse: u16) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Same book and chapter with a different verse
    #[must_use]
    pub const fn with_verse(self, verse: u16) -> Self {
        Self { verse, ..self }
    }

    /// Same book with a different chapter and verse
    #[must_use]
    pub const fn with_chapter(self, chapter: u16, verse: u16) -> Self {
        Self {
            chapter,
            verse,
            ..self
        }
    }

    /// Check whether this is the introduction sentinel (verse 0)
    #[must_use]
    pub const fn is_introduction(self) -> bool {
        self.verse == 0
    }

    /// Last verse of this reference's chapter
    #[must_use]
    pub fn last_verse_of_chapter(self, scheme: &dyn Versification) -> u16 {
        scheme.last_verse(self.book, self.chapter)
    }

    /// Last chapter of this reference's book
    #[must_use]
    pub fn last_chapter_of_book(self, scheme: &dyn Versification) -> u16 {
        scheme.last_chapter(self.book)
    }

    /// Check whether this is the last verse of its chapter
    #[must_use]
    pub fn is_last_verse_of_chapter(self, scheme: &dyn Versification) -> bool {
        self.verse == self.last_verse_of_chapter(scheme)
    }

    /// The verse immediately after this one
    ///
    /// Rolls over to verse 1 of the following chapter after the last verse
    /// of a chapter. The book never changes.
    #[must_use]
    pub fn next_verse(self, scheme: &dyn Versification) -> Self {
        if self.verse < self.last_verse_of_chapter(scheme) {
            self.with_verse(self.verse + 1)
        } else {
            self.with_chapter(self.chapter.saturating_add(1), 1)
        }
    }

    /// The verse immediately before this one
    ///
    /// Rolls back to the last verse of the preceding chapter from verse 1.
    /// Verse 1 of chapter 1 steps back to the introduction sentinel.
    #[must_use]
    pub fn previous_verse(self, scheme: &dyn Versification) -> Self {
        if self.verse > 1 {
            return self.with_verse(self.verse - 1);
        }
        if self.chapter > 1 {
            let chapter = self.chapter - 1;
            return self.with_chapter(chapter, scheme.last_verse(self.book, chapter));
        }
        self.with_verse(0)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match book_code(self.book) {
            Some(code) => write!(f, "{code} {}:{}", self.chapter, self.verse),
            None => write!(f, "#{} {}:{}", self.book, self.chapter, self.verse),
        }
    }
}

impl FromStr for Reference {
    type Err = CoreError;

    /// Parse `GEN 1:11`, or `GEN 1` for the chapter's verse 0
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidReference(text.to_string());

        let (code, location) = text.trim().split_once(' ').ok_or_else(invalid)?;
        let book = book_number(code).ok_or_else(invalid)?;

        let (chapter, verse) = match location.trim().split_once(':') {
            Some((chapter, verse)) => (chapter.parse()?, verse.parse()?),
            None => (location.trim().parse()?, 0),
        };

        Ok(Self::new(book, chapter, verse))
    }
}
