//! Section boundary recomputation
//!
//! A section's [`SectionRange`] is derived from the chapter and verse
//! markers in its content, seeded by the reference in force at the end of
//! the previous section. When a section's end moves, every following
//! section that does not open with its own marker inherits the change, so
//! [`recompute_range`] walks forward until it reaches a self-anchored
//! section or the end changes no further.
//!
//! # Example
//!
//! ```rust
//! use verse_core::model::{Book, Paragraph, Run, Section};
//! use verse_core::ranges::recompute_all;
//! use verse_core::{versification::Scheme, Reference};
//!
//! let scheme = Scheme::english();
//! let mut book = Book::with_sections(1, vec![
//!     Section::from_paragraphs(vec![Paragraph::new(vec![Run::chapter("1"), Run::text_run("In")])]),
//!     Section::from_paragraphs(vec![Paragraph::new(vec![Run::text_run("And"), Run::verse("2-3")])]),
//! ]);
//! recompute_all(&mut book, &scheme);
//!
//! let second = book.sections()[1].range();
//! assert_eq!(second.start, Reference::new(1, 1, 2));
//! assert_eq!(second.end, Reference::new(1, 1, 3));
//! ```

use tracing::debug;

use crate::{
    model::{Book, Section, SectionRange},
    scanner::{scan_next_reference, scan_to_end, ScanCursor, ScanIter, ScanMode},
    utils::CoreError,
    versification::Versification,
    Reference, Result,
};

/// Location of a run within a book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextPosition {
    /// Section index
    pub section: usize,
    /// Content paragraph index within the section
    pub paragraph: usize,
    /// Run index within the paragraph
    pub run: usize,
}

impl TextPosition {
    /// Create a position
    #[must_use]
    pub const fn new(section: usize, paragraph: usize, run: usize) -> Self {
        Self {
            section,
            paragraph,
            run,
        }
    }
}

/// Recompute the boundaries of section `index` and cascade to its dependents
///
/// Returns the indices of every section recomputed, in order. Recomputing
/// unchanged content leaves every boundary as it was.
///
/// # Errors
///
/// Returns [`CoreError::SectionIndexOutOfBounds`] if `index` is not a section.
pub fn recompute_range(
    book: &mut Book,
    index: usize,
    scheme: &dyn Versification,
) -> Result<Vec<usize>> {
    let len = book.sections().len();
    if index >= len {
        return Err(CoreError::SectionIndexOutOfBounds { index, len });
    }

    let mut recomputed = Vec::new();
    let mut pending = vec![index];

    while let Some(current) = pending.pop() {
        let previous_end = book.sections()[current].range_end();
        let range = recompute_section(book, current, scheme);
        recomputed.push(current);

        let next = current + 1;
        let cascades = range.end != previous_end
            && book
                .section(next)
                .is_some_and(|section| !section.is_self_anchored());

        if cascades {
            debug!(
                from = current,
                to = next,
                end = %range.end,
                "cascading range change"
            );
            pending.push(next);
        }
    }

    Ok(recomputed)
}

/// Recompute every section in book order
///
/// Use after bulk import, when no section's boundaries can be trusted.
pub fn recompute_all(book: &mut Book, scheme: &dyn Versification) {
    for index in 0..book.sections().len() {
        recompute_section(book, index, scheme);
    }
}

/// Reference in force just before the run at `position`
///
/// Scans the section's content from its inherited seed up to the run at
/// `position`. A chapter marker right before `position` still fuses with a
/// verse marker at `position`. A run index equal to the paragraph's
/// length gives the reference in force at the paragraph's end. The
/// section's predecessor must have up-to-date boundaries.
///
/// # Errors
///
/// Returns [`CoreError::SectionIndexOutOfBounds`] or
/// [`CoreError::PositionOutOfBounds`] if `position` does not exist.
pub fn reference_at(
    book: &Book,
    position: TextPosition,
    scheme: &dyn Versification,
) -> Result<Reference> {
    let section = book
        .section(position.section)
        .ok_or(CoreError::SectionIndexOutOfBounds {
            index: position.section,
            len: book.sections().len(),
        })?;

    let paragraphs = section.content.paragraphs();
    let target = paragraphs
        .get(position.paragraph)
        .filter(|paragraph| position.run <= paragraph.runs().len())
        .ok_or(CoreError::PositionOutOfBounds {
            section: position.section,
            paragraph: position.paragraph,
            run: position.run,
        })?;

    let mut cursor = ScanCursor::at(seed_reference(book, position.section));
    for paragraph in &paragraphs[..position.paragraph] {
        cursor = scan_to_end(paragraph.runs(), cursor, scheme);
    }

    let runs = target.runs();
    let mut index = 0;
    while index < position.run {
        let step = scan_next_reference(runs, index, position.run, ScanMode::Lenient, cursor, scheme)?;
        if !step.kind.is_marker() {
            break;
        }
        cursor = step.cursor;
        index = step.next_index;
    }

    Ok(cursor.start)
}

/// Reference a section starts from before its own markers are seen
///
/// The previous section's end, or verse 0 of chapter 1 for the first
/// section. Sections that were scripture keep at least verse 1.
fn seed_reference(book: &Book, index: usize) -> Reference {
    let inherited = match index.checked_sub(1).and_then(|previous| book.section(previous)) {
        Some(previous) => previous.range_end(),
        None => Reference::new(book.number(), 1, 0),
    };

    let was_scripture = book
        .section(index)
        .is_some_and(|section| !section.is_introduction());

    if was_scripture && inherited.verse == 0 {
        inherited.with_verse(1)
    } else {
        inherited
    }
}

/// Recompute section `index` in place without cascading
fn recompute_section(book: &mut Book, index: usize, scheme: &dyn Versification) -> SectionRange {
    let seed = seed_reference(book, index);
    let range = scan_section(&book.sections()[index], seed, scheme);

    debug!(
        section = index,
        start = %range.start,
        min = %range.min,
        max = %range.max,
        end = %range.end,
        "recomputed section range"
    );

    book.sections_mut()[index].set_range(range);
    range
}

/// Fold every marker in a section's content into its boundaries
fn scan_section(section: &Section, seed: Reference, scheme: &dyn Versification) -> SectionRange {
    let mut cursor = ScanCursor::at(seed);
    let mut found: Option<SectionRange> = None;

    for paragraph in section.content.paragraphs() {
        let mut steps = ScanIter::new(paragraph.runs(), cursor, scheme);
        for step in steps.by_ref() {
            let seen = step.cursor;
            found = Some(match found {
                None => SectionRange {
                    start: seen.start,
                    min: seen.start,
                    max: seen.end,
                    end: seen.end,
                },
                Some(range) => SectionRange {
                    min: range.min.min(seen.start),
                    max: range.max.max(seen.end),
                    end: seen.end,
                    ..range
                },
            });
        }
        cursor = steps.cursor();
    }

    found.unwrap_or_else(|| SectionRange::at(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Run};
    use crate::versification::Scheme;
    use pretty_assertions::assert_eq;

    fn section(runs: Vec<Run>) -> Section {
        Section::from_paragraphs(vec![Paragraph::new(runs)])
    }

    fn gen(chapter: u16, verse: u16) -> Reference {
        Reference::new(1, chapter, verse)
    }

    #[test]
    fn introduction_keeps_verse_zero() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(1, vec![section(vec![Run::text_run("Preface")])]);
        recompute_range(&mut book, 0, &scheme).unwrap();

        let intro = &book.sections()[0];
        assert!(intro.is_introduction());
        assert_eq!(intro.range(), SectionRange::at(gen(1, 0)));
    }

    #[test]
    fn boundaries_follow_markers() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![Section::from_paragraphs(vec![
                Paragraph::new(vec![Run::chapter("1"), Run::text_run("In"), Run::verse("2")]),
                Paragraph::new(vec![Run::verse("5-7"), Run::text_run("x"), Run::verse("3")]),
            ])],
        );
        recompute_all(&mut book, &scheme);

        assert_eq!(
            book.sections()[0].range(),
            SectionRange {
                start: gen(1, 1),
                min: gen(1, 1),
                max: gen(1, 7),
                end: gen(1, 3),
            }
        );
    }

    #[test]
    fn unmarked_section_inherits_previous_end() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![
                section(vec![Run::chapter("1"), Run::verse("1-4")]),
                section(vec![Run::text_run("continued")]),
            ],
        );
        recompute_all(&mut book, &scheme);
        assert_eq!(book.sections()[1].range(), SectionRange::at(gen(1, 4)));
    }

    #[test]
    fn recompute_is_idempotent() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![
                section(vec![Run::text_run("Intro")]),
                section(vec![Run::chapter("1"), Run::verse("1"), Run::verse("2")]),
                section(vec![Run::text_run("more"), Run::verse("3")]),
            ],
        );
        recompute_all(&mut book, &scheme);
        let before = book.clone();

        for index in 0..3 {
            recompute_range(&mut book, index, &scheme).unwrap();
        }
        assert_eq!(book, before);
    }

    #[test]
    fn cascade_reaches_unanchored_followers() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![
                section(vec![Run::chapter("1"), Run::verse("5")]),
                section(vec![Run::text_run("still verse five")]),
                section(vec![Run::text_run("and here")]),
            ],
        );
        recompute_all(&mut book, &scheme);

        book.sections_mut()[0].content.paragraphs_mut()[0].push_run(Run::chapter("2"));
        let touched = recompute_range(&mut book, 0, &scheme).unwrap();

        assert_eq!(touched, vec![0, 1, 2]);
        assert_eq!(book.sections()[2].range_end(), gen(2, 1));
    }

    #[test]
    fn cascade_stops_at_anchored_section() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![
                section(vec![Run::chapter("1"), Run::verse("5")]),
                section(vec![Run::chapter("3"), Run::text_run("anchored")]),
            ],
        );
        recompute_all(&mut book, &scheme);
        let anchored = book.sections()[1].range();

        book.sections_mut()[0].content.paragraphs_mut()[0].push_run(Run::chapter("2"));
        let touched = recompute_range(&mut book, 0, &scheme).unwrap();

        assert_eq!(touched, vec![0]);
        assert_eq!(book.sections()[1].range(), anchored);
    }

    #[test]
    fn unchanged_end_does_not_cascade() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            1,
            vec![
                section(vec![Run::chapter("1"), Run::verse("5")]),
                section(vec![Run::text_run("follows")]),
            ],
        );
        recompute_all(&mut book, &scheme);
        assert_eq!(recompute_range(&mut book, 0, &scheme).unwrap(), vec![0]);
    }

    #[test]
    fn out_of_bounds_index_is_an_error() {
        let mut book = Book::new(1);
        let err = recompute_range(&mut book, 0, &Scheme::english()).unwrap_err();
        assert_eq!(err, CoreError::SectionIndexOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn reference_at_tracks_position() {
        let scheme = Scheme::english();
        let mut book = Book::with_sections(
            43,
            vec![Section::from_paragraphs(vec![
                Paragraph::new(vec![Run::chapter("3"), Run::verse("16"), Run::text_run("For")]),
                Paragraph::new(vec![Run::text_run("x"), Run::verse("17"), Run::text_run("y")]),
            ])],
        );
        recompute_all(&mut book, &scheme);

        let at = |paragraph, run| reference_at(&book, TextPosition::new(0, paragraph, run), &scheme);
        assert_eq!(at(0, 0).unwrap(), Reference::new(43, 1, 1));
        assert_eq!(at(0, 1).unwrap(), Reference::new(43, 3, 16));
        assert_eq!(at(0, 2).unwrap(), Reference::new(43, 3, 16));
        assert_eq!(at(1, 1).unwrap(), Reference::new(43, 3, 16));
        assert_eq!(at(1, 3).unwrap(), Reference::new(43, 3, 17));
        assert!(matches!(at(1, 4), Err(CoreError::PositionOutOfBounds { .. })));
        assert!(matches!(at(2, 0), Err(CoreError::PositionOutOfBounds { .. })));
    }
}
