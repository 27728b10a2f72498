//! Books, footnotes and saved snapshots

use core::ops::Deref;
use std::collections::HashSet;

use ahash::RandomState;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Section, TextContainer};
use crate::{utils::hashers::create_hash_set, utils::CoreError, Result};

/// Footnote attached to a book
///
/// Marker numbering and reference bookkeeping belong to the footnote layer;
/// the engine only reads the body for back-translation locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footnote {
    /// Marker shown in the text, e.g. `a`
    pub marker: String,
    /// Footnote body
    pub body: TextContainer,
}

/// One book of a translation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    /// Canonical book number (1 = Genesis)
    number: u8,
    /// Book title paragraphs
    pub title: TextContainer,
    /// Sections in reading order
    sections: Vec<Section>,
    /// Footnotes in marker order
    pub footnotes: Vec<Footnote>,
}

impl Book {
    /// Create an empty book
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            title: TextContainer::new(Vec::new()),
            sections: Vec::new(),
            footnotes: Vec::new(),
        }
    }

    /// Create a book from sections whose ranges are not yet computed
    #[must_use]
    pub fn with_sections(number: u8, sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..Self::new(number)
        }
    }

    /// Canonical book number
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Sections in reading order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Mutable sections, for editing layers
    ///
    /// Callers that change chapter or verse markers must recompute the
    /// affected section's range afterwards.
    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    /// Section at `index`
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Append a section
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Insert a section before `index`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SectionIndexOutOfBounds`] if `index` is past the end.
    pub fn insert_section(&mut self, index: usize, section: Section) -> Result<()> {
        if index > self.sections.len() {
            return Err(CoreError::SectionIndexOutOfBounds {
                index,
                len: self.sections.len(),
            });
        }
        self.sections.insert(index, section);
        Ok(())
    }

    /// Remove the sections at `indices`, returning them in book order
    ///
    /// Duplicate indices are ignored. Neighbouring ranges are left as they
    /// were; recompute them if the removal changes inherited references.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SectionIndexOutOfBounds`] without removing
    /// anything if any index is out of range.
    pub fn remove_sections(&mut self, indices: &[usize]) -> Result<Vec<Section>> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        if let Some(&index) = sorted.last().filter(|&&index| index >= self.sections.len()) {
            return Err(CoreError::SectionIndexOutOfBounds {
                index,
                len: self.sections.len(),
            });
        }

        let mut removed: Vec<Section> = sorted
            .iter()
            .rev()
            .map(|&index| self.sections.remove(index))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Check whether the book has no sections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the first section that is not an introduction
    #[must_use]
    pub fn first_scripture_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| !section.is_introduction())
    }

    /// Sections after any leading introductions
    #[must_use]
    pub fn scripture_sections(&self) -> &[Section] {
        self.first_scripture_index()
            .map_or(&[] as &[Section], |index| &self.sections[index..])
    }

    /// Every back-translation locale used anywhere in the book
    ///
    /// Covers the title, section headings and content, and footnote bodies.
    #[must_use]
    pub fn back_translation_locales(&self) -> HashSet<String, RandomState> {
        let containers = core::iter::once(&self.title)
            .chain(
                self.sections
                    .iter()
                    .flat_map(|section| [&section.heading, &section.content]),
            )
            .chain(self.footnotes.iter().map(|footnote| &footnote.body));

        let mut locales = create_hash_set();
        for container in containers {
            locales.extend(container.back_translation_locales().map(str::to_string));
        }
        locales
    }

    /// Archive the current state as a read-only snapshot
    #[must_use]
    pub fn snapshot(&self) -> SavedSnapshot {
        SavedSnapshot(self.clone())
    }
}

/// Archival, read-only copy of a book
///
/// Dereferences to [`Book`] for reading; there is no mutable access, so a
/// snapshot cannot drift from the state it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavedSnapshot(Book);

impl SavedSnapshot {
    /// Unwrap into an editable book, e.g. to restore it
    #[must_use]
    pub fn into_book(self) -> Book {
        self.0
    }
}

impl From<Book> for SavedSnapshot {
    fn from(book: Book) -> Self {
        Self(book)
    }
}

impl Deref for SavedSnapshot {
    type Target = Book;

    fn deref(&self) -> &Book {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Run};

    fn section(text: &str) -> Section {
        Section::from_paragraphs(vec![Paragraph::new(vec![Run::text_run(text)])])
    }

    #[test]
    fn remove_sections_returns_in_book_order() {
        let mut book = Book::with_sections(1, vec![section("a"), section("b"), section("c")]);
        let removed = book.remove_sections(&[2, 0, 2]).unwrap();

        let texts: Vec<_> = removed
            .iter()
            .map(|s| s.content.paragraphs()[0].plain_text())
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(book.sections().len(), 1);
    }

    #[test]
    fn remove_sections_is_all_or_nothing() {
        let mut book = Book::with_sections(1, vec![section("a"), section("b")]);
        let err = book.remove_sections(&[0, 5]).unwrap_err();
        assert_eq!(err, CoreError::SectionIndexOutOfBounds { index: 5, len: 2 });
        assert_eq!(book.sections().len(), 2);
    }

    #[test]
    fn insert_section_checks_bounds() {
        let mut book = Book::new(1);
        assert!(book.insert_section(1, section("x")).is_err());
        assert!(book.insert_section(0, section("x")).is_ok());
        assert!(!book.is_empty());
    }

    #[test]
    fn locales_cover_every_container() {
        let mut book = Book::new(1);
        book.title
            .push(Paragraph::new(vec![Run::text_run("Genesis")]).with_back_translation("en", "Genesis"));
        let mut body = section("text");
        body.content.paragraphs_mut()[0].set_back_translation("fr", "texte");
        book.push_section(body);
        book.footnotes.push(Footnote {
            marker: "a".to_string(),
            body: TextContainer::new(vec![
                Paragraph::new(vec![Run::text_run("note")]).with_back_translation("de", "Notiz"),
            ]),
        });

        let mut locales: Vec<_> = book.back_translation_locales().into_iter().collect();
        locales.sort();
        assert_eq!(locales, vec!["de", "en", "fr"]);
    }

    #[test]
    fn snapshot_reads_through_to_book() {
        let book = Book::with_sections(43, vec![section("a")]);
        let snapshot = book.snapshot();
        assert_eq!(snapshot.number(), 43);
        assert_eq!(snapshot.sections().len(), 1);
        assert_eq!(snapshot.into_book(), book);
    }
}
