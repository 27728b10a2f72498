//! Run scanning for chapter and verse markers
//!
//! [`scan_next_reference`] walks a bounded slice of a paragraph's runs and
//! stops at the first chapter or verse marker it can validate against the
//! versification in force. The reference cursor is threaded through by
//! value: each call takes the cursor in force before the scan and returns
//! the cursor in force after it.
//!
//! # Example
//!
//! ```rust
//! use verse_core::model::Run;
//! use verse_core::scanner::{scan_next_reference, RunKind, ScanCursor, ScanMode};
//! use verse_core::{versification::Scheme, Reference};
//!
//! let scheme = Scheme::english();
//! let runs = vec![Run::chapter("3"), Run::verse("16"), Run::text_run("For God")];
//! let cursor = ScanCursor::at(Reference::new(43, 1, 0));
//!
//! let step = scan_next_reference(&runs, 0, runs.len(), ScanMode::Lenient, cursor, &scheme)?;
//! assert_eq!(step.kind, RunKind::ChapterAndVerse);
//! assert_eq!(step.cursor.start, Reference::new(43, 3, 16));
//! assert_eq!(step.next_index, 2);
//! # Ok::<(), verse_core::scanner::ScanError>(())
//! ```

use tracing::trace;

use crate::{
    model::{Run, RunStyle},
    versification::Versification,
    Reference,
};

mod numerals;

pub use crate::utils::errors::ScanError;
pub use numerals::{parse_chapter, parse_verse_bridge};

/// What a scan step found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// No marker before the limit
    None,
    /// Chapter marker not followed by a verse marker
    Chapter,
    /// Verse marker
    Verse,
    /// Chapter marker immediately followed by a verse marker
    ChapterAndVerse,
}

impl RunKind {
    /// Check whether a marker was found
    #[must_use]
    pub const fn is_marker(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// How invalid numerals are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Skip invalid runs and keep scanning
    #[default]
    Lenient,
    /// Stop at the first invalid run with a [`ScanError`]
    Strict,
}

/// Reference pair in force at a point in the text
///
/// `start` is the first verse of the marker last seen, `end` the last verse
/// it covers. They differ only for verse bridges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScanCursor {
    /// First verse of the current marker
    pub start: Reference,
    /// Last verse of the current marker
    pub end: Reference,
}

impl ScanCursor {
    /// Cursor with both ends on `reference`
    #[must_use]
    pub const fn at(reference: Reference) -> Self {
        Self {
            start: reference,
            end: reference,
        }
    }
}

/// Result of one scan step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanStep {
    /// What was found
    pub kind: RunKind,
    /// Index at which the next scan should start
    pub next_index: usize,
    /// Cursor in force after the step
    pub cursor: ScanCursor,
}

/// Scan `runs[start_index..limit_index]` for the next chapter or verse marker
///
/// A chapter marker resets the cursor to verse 1 of that chapter, then peeks
/// at the run right after it, even when that run lies at `limit_index`. A
/// valid verse marker there is fused into [`RunKind::ChapterAndVerse`].
/// `limit_index` past the end of `runs` is clamped.
///
/// # Errors
///
/// In [`ScanMode::Strict`] returns [`ScanError::InvalidVerseNumber`] or
/// [`ScanError::InvalidChapterNumber`] for the first marker whose numeral is
/// malformed or outside the versification. Lenient scans never fail.
pub fn scan_next_reference(
    runs: &[Run],
    start_index: usize,
    limit_index: usize,
    mode: ScanMode,
    cursor: ScanCursor,
    scheme: &dyn Versification,
) -> Result<ScanStep, ScanError> {
    let limit = limit_index.min(runs.len());

    for index in start_index..limit {
        let run = &runs[index];
        match run.style() {
            RunStyle::Normal => {}
            RunStyle::VerseNumber => match apply_verse(run, cursor, scheme) {
                Some(cursor) => {
                    return Ok(ScanStep {
                        kind: RunKind::Verse,
                        next_index: index + 1,
                        cursor,
                    })
                }
                None => reject(mode, run, index, RunStyle::VerseNumber)?,
            },
            RunStyle::ChapterNumber => match apply_chapter(run, cursor, scheme) {
                Some(cursor) => return Ok(fuse_following_verse(runs, index, cursor, scheme)),
                None => reject(mode, run, index, RunStyle::ChapterNumber)?,
            },
        }
    }

    Ok(ScanStep {
        kind: RunKind::None,
        next_index: limit.max(start_index),
        cursor,
    })
}

/// Scan every run of `runs` leniently, returning the cursor after the last marker
#[must_use]
pub fn scan_to_end(runs: &[Run], cursor: ScanCursor, scheme: &dyn Versification) -> ScanCursor {
    ScanIter::new(runs, cursor, scheme)
        .last()
        .map_or(cursor, |step| step.cursor)
}

/// Iterator over every marker of a run slice, scanned leniently
///
/// Yields one [`ScanStep`] per marker found; [`RunKind::None`] never appears.
pub struct ScanIter<'a> {
    runs: &'a [Run],
    index: usize,
    cursor: ScanCursor,
    scheme: &'a dyn Versification,
}

impl<'a> ScanIter<'a> {
    /// Start scanning `runs` from index 0 with `cursor` in force
    #[must_use]
    pub fn new(runs: &'a [Run], cursor: ScanCursor, scheme: &'a dyn Versification) -> Self {
        Self {
            runs,
            index: 0,
            cursor,
            scheme,
        }
    }

    /// Cursor in force after the last yielded step
    #[must_use]
    pub const fn cursor(&self) -> ScanCursor {
        self.cursor
    }
}

impl Iterator for ScanIter<'_> {
    type Item = ScanStep;

    fn next(&mut self) -> Option<ScanStep> {
        if self.index >= self.runs.len() {
            return None;
        }

        let step = match scan_next_reference(
            self.runs,
            self.index,
            self.runs.len(),
            ScanMode::Lenient,
            self.cursor,
            self.scheme,
        ) {
            Ok(step) => step,
            Err(_) => return None,
        };

        self.index = step.next_index;
        if !step.kind.is_marker() {
            return None;
        }
        self.cursor = step.cursor;
        Some(step)
    }
}

/// Apply a verse run to `cursor`, or `None` if the numeral is invalid
fn apply_verse(run: &Run, cursor: ScanCursor, scheme: &dyn Versification) -> Option<ScanCursor> {
    let (first, last) = parse_verse_bridge(run.text())?;
    if first > cursor.start.last_verse_of_chapter(scheme) {
        return None;
    }

    let last = last.min(cursor.end.last_verse_of_chapter(scheme)).max(first);
    Some(ScanCursor {
        start: cursor.start.with_verse(first),
        end: cursor.end.with_verse(last),
    })
}

/// Apply a chapter run to `cursor`, or `None` if the numeral is invalid
fn apply_chapter(run: &Run, cursor: ScanCursor, scheme: &dyn Versification) -> Option<ScanCursor> {
    let chapter = parse_chapter(run.text())?;
    if chapter > cursor.start.last_chapter_of_book(scheme) {
        return None;
    }

    Some(ScanCursor {
        start: cursor.start.with_chapter(chapter, 1),
        end: cursor.end.with_chapter(chapter, 1),
    })
}

/// Build the step for a valid chapter run at `index`, fusing a verse run that follows it
fn fuse_following_verse(
    runs: &[Run],
    index: usize,
    cursor: ScanCursor,
    scheme: &dyn Versification,
) -> ScanStep {
    let fused = runs
        .get(index + 1)
        .filter(|run| run.style() == RunStyle::VerseNumber)
        .and_then(|run| apply_verse(run, cursor, scheme));

    match fused {
        Some(cursor) => ScanStep {
            kind: RunKind::ChapterAndVerse,
            next_index: index + 2,
            cursor,
        },
        None => ScanStep {
            kind: RunKind::Chapter,
            next_index: index + 1,
            cursor,
        },
    }
}

/// Skip an invalid marker in lenient mode, or fail in strict mode
fn reject(mode: ScanMode, run: &Run, position: usize, style: RunStyle) -> Result<(), ScanError> {
    let text = run.text().to_string();
    match mode {
        ScanMode::Lenient => {
            trace!(position, text = %text, ?style, "skipping invalid marker");
            Ok(())
        }
        ScanMode::Strict if style == RunStyle::ChapterNumber => {
            Err(ScanError::InvalidChapterNumber { text, position })
        }
        ScanMode::Strict => Err(ScanError::InvalidVerseNumber { text, position }),
    }
}
