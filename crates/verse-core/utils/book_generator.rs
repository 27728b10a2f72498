//! Synthetic book generation for benchmarks and tests
//!
//! Produces books whose content follows a versification scheme exactly:
//! every chapter opens a new section with a chapter marker, and each
//! section carries a fixed number of verses. Every generated section
//! starts with its own marker, so no section depends on the end of the
//! one before it.

use crate::{
    model::{Book, Paragraph, Run, Section, TextContainer},
    ranges::recompute_all,
    versification::Versification,
};

/// Synthetic book generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGenerator {
    /// Canonical book number
    pub book: u8,
    /// Verses per generated section
    pub verses_per_section: u16,
    /// Prepend an introduction section
    pub introduction: bool,
    /// Back-translation locales attached to every paragraph
    pub locales: Vec<String>,
    /// Maximum number of scripture sections (0 = whole book)
    pub max_sections: usize,
}

impl BookGenerator {
    /// Generator for a whole book with an introduction and five verses per section
    #[must_use]
    pub const fn new(book: u8) -> Self {
        Self {
            book,
            verses_per_section: 5,
            introduction: true,
            locales: Vec::new(),
            max_sections: 0,
        }
    }

    /// Set verses per section (at least 1)
    #[must_use]
    pub fn with_verses_per_section(mut self, verses: u16) -> Self {
        self.verses_per_section = verses.max(1);
        self
    }

    /// Set whether an introduction section is generated
    #[must_use]
    pub const fn with_introduction(mut self, introduction: bool) -> Self {
        self.introduction = introduction;
        self
    }

    /// Add a back-translation locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locales.push(locale.into());
        self
    }

    /// Limit the number of scripture sections
    #[must_use]
    pub const fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Generate the book with recomputed section boundaries
    #[must_use]
    pub fn generate(&self, scheme: &dyn Versification) -> Book {
        let mut sections = Vec::new();
        if self.introduction {
            sections.push(self.section(vec![Run::text_run("Introduction")]));
        }
        sections.extend(self.scripture_sections(scheme));

        let mut book = Book::with_sections(self.book, sections);
        recompute_all(&mut book, scheme);
        book
    }

    /// Generate the book, then drop every `every`th scripture section
    ///
    /// Surviving sections keep the boundaries they had in the full book.
    /// The first scripture section is always kept, so the result has
    /// interior holes but the same starting verse. `every` below 2 drops
    /// nothing.
    #[must_use]
    pub fn generate_with_holes(&self, scheme: &dyn Versification, every: usize) -> Book {
        let full = self.generate(scheme);
        if every < 2 {
            return full;
        }

        let offset = usize::from(self.introduction);
        let kept = full
            .sections()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index < offset || (index - offset) % every != every - 1)
            .map(|(_, section)| section.clone())
            .collect();
        Book::with_sections(self.book, kept)
    }

    /// Scripture sections in book order, before boundaries are computed
    fn scripture_sections(&self, scheme: &dyn Versification) -> Vec<Section> {
        let span = self.verses_per_section.max(1) - 1;
        let mut sections = Vec::new();

        for chapter in 1..=scheme.last_chapter(self.book) {
            let last_verse = scheme.last_verse(self.book, chapter);
            let mut first = 1;
            while first <= last_verse {
                if self.max_sections > 0 && sections.len() >= self.max_sections {
                    return sections;
                }

                let last = first.saturating_add(span).min(last_verse);
                let mut runs = Vec::new();
                if first == 1 {
                    runs.push(Run::chapter(chapter.to_string()));
                }
                for verse in first..=last {
                    runs.push(Run::verse(verse.to_string()));
                    runs.push(Run::text_run(format!("Text of {chapter}:{verse}. ")));
                }
                sections.push(self.section(runs));
                first = last + 1;
            }
        }

        sections
    }

    /// Single-paragraph section with the configured back translations
    fn section(&self, runs: Vec<Run>) -> Section {
        let text: String = runs.iter().map(Run::text).collect();
        let paragraph = self
            .locales
            .iter()
            .fold(Paragraph::new(runs), |paragraph, locale| {
                paragraph.with_back_translation(locale.as_str(), format!("[{locale}] {text}"))
            });
        Section::new(TextContainer::default(), vec![paragraph].into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versification::Scheme;

    #[test]
    fn whole_book_is_contiguous() {
        let scheme = Scheme::english();
        let book = BookGenerator::new(65).generate(&scheme);

        assert!(book.sections()[0].is_introduction());
        let scripture = book.scripture_sections();
        assert_eq!(scripture.len(), 5);
        assert_eq!(scripture[0].range_min(), crate::Reference::new(65, 1, 1));
        assert_eq!(scripture[4].range_max(), crate::Reference::new(65, 1, 25));
    }

    #[test]
    fn sections_are_capped() {
        let book = BookGenerator::new(1)
            .with_introduction(false)
            .with_max_sections(3)
            .generate(&Scheme::english());
        assert_eq!(book.sections().len(), 3);
    }

    #[test]
    fn holes_keep_first_section() {
        let scheme = Scheme::english();
        let generator = BookGenerator::new(65);
        let book = generator.generate_with_holes(&scheme, 2);

        let scripture = book.scripture_sections();
        assert_eq!(scripture.len(), 3);
        assert_eq!(scripture[1].range_min(), crate::Reference::new(65, 1, 11));
    }

    #[test]
    fn locales_are_attached() {
        let book = BookGenerator::new(65)
            .with_locale("en")
            .with_locale("fr")
            .generate(&Scheme::english());
        assert_eq!(book.back_translation_locales().len(), 2);
    }
}
