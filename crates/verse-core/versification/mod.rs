//! Versification schemes
//!
//! A versification scheme tells the engine how many chapters each book has
//! and how many verses each chapter has. Every scheme-dependent operation on
//! [`Reference`](crate::Reference) goes through the [`Versification`] trait,
//! so callers can plug in their own tables.
//!
//! # Fallback
//!
//! [`Scheme`] lookups for books missing from its table fall back to the
//! built-in English table. Chapters past the end of a book have no verses
//! (`last_verse` returns 0), which makes every reference in them invalid.
//!
//! # Example
//!
//! ```rust
//! use verse_core::versification::{Scheme, Versification};
//!
//! let english = Scheme::english();
//! assert_eq!(english.last_chapter(19), 150);
//! assert_eq!(english.last_verse(43, 3), 36);
//! ```

use std::collections::BTreeMap;

pub mod books;
pub mod registry;
mod vrs;

pub use books::{book_code, book_number, BOOK_CODES, CANONICAL_BOOK_COUNT};
pub use registry::SchemeRegistry;

/// Name under which the built-in English scheme is registered
pub const ENGLISH_SCHEME_NAME: &str = "English";

/// Chapter and verse limits for canonical books
///
/// Implementations must be cheap to query: the scanner and hole finder call
/// these methods once per token or section boundary.
pub trait Versification {
    /// Human-readable scheme name
    fn name(&self) -> &str;

    /// Last valid chapter of `book`, or 0 if the book is unknown
    fn last_chapter(&self, book: u8) -> u16;

    /// Last valid verse of `chapter` in `book`, or 0 if the chapter is unknown
    fn last_verse(&self, book: u8, chapter: u16) -> u16;
}

/// Table-backed versification scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    /// Scheme name used for registry lookups
    name: String,
    /// Verse counts per chapter, keyed by canonical book number
    books: BTreeMap<u8, Vec<u16>>,
}

impl Scheme {
    /// Create an empty scheme; every lookup falls back to the English table
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: BTreeMap::new(),
        }
    }

    /// Built-in English scheme covering the 66 canonical books
    #[must_use]
    pub fn english() -> Self {
        let books = (1..=CANONICAL_BOOK_COUNT)
            .filter_map(|book| books::english_chapters(book).map(|verses| (book, verses.to_vec())))
            .collect();
        Self {
            name: ENGLISH_SCHEME_NAME.to_string(),
            books,
        }
    }

    /// Set the verse counts of every chapter of `book`
    pub fn set_book(&mut self, book: u8, verses_per_chapter: Vec<u16>) {
        self.books.insert(book, verses_per_chapter);
    }

    /// Books defined by this scheme's own table
    pub fn books(&self) -> impl Iterator<Item = u8> + '_ {
        self.books.keys().copied()
    }

    /// Verse counts for `book`, falling back to the English table
    fn chapters(&self, book: u8) -> Option<&[u16]> {
        self.books
            .get(&book)
            .map(Vec::as_slice)
            .or_else(|| books::english_chapters(book))
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::english()
    }
}

impl Versification for Scheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_chapter(&self, book: u8) -> u16 {
        self.chapters(book)
            .map_or(0, |chapters| u16::try_from(chapters.len()).unwrap_or(u16::MAX))
    }

    fn last_verse(&self, book: u8, chapter: u16) -> u16 {
        let Some(index) = usize::from(chapter).checked_sub(1) else {
            return 0;
        };
        self.chapters(book)
            .and_then(|chapters| chapters.get(index))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_limits() {
        let scheme = Scheme::english();
        assert_eq!(scheme.name(), ENGLISH_SCHEME_NAME);
        assert_eq!(scheme.last_chapter(1), 50);
        assert_eq!(scheme.last_verse(1, 1), 31);
        assert_eq!(scheme.last_chapter(66), 22);
        assert_eq!(scheme.last_verse(66, 22), 21);
    }

    #[test]
    fn unknown_chapters_have_no_verses() {
        let scheme = Scheme::english();
        assert_eq!(scheme.last_verse(1, 0), 0);
        assert_eq!(scheme.last_verse(1, 51), 0);
        assert_eq!(scheme.last_chapter(99), 0);
        assert_eq!(scheme.last_verse(99, 1), 0);
    }

    #[test]
    fn custom_table_overrides_english() {
        let mut scheme = Scheme::new("Custom");
        scheme.set_book(64, vec![15]);
        assert_eq!(scheme.last_verse(64, 1), 15);
        assert_eq!(scheme.books().collect::<Vec<_>>(), vec![64]);
    }

    #[test]
    fn missing_books_fall_back_to_english() {
        let scheme = Scheme::new("Sparse");
        assert_eq!(scheme.last_chapter(43), 21);
        assert_eq!(scheme.last_verse(43, 3), 36);
    }
}
