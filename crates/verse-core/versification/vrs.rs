//! Line-oriented versification table parser
//!
//! Accepts the common `.vrs` layout: one book per line, its code followed by
//! `chapter:last_verse` pairs for every chapter in order.
//!
//! ```text
//! # Versification "Custom"
//! GEN 1:31 2:25 3:24
//! GEN 1:1-3 = GEN 1:1-3
//! -GEN 3:24
//! ```
//!
//! Comments start with `#`. Mapping lines (containing `=`) and excluded-verse
//! lines (starting with `-`) are accepted and ignored. Books whose code is not
//! canonical are skipped.

use super::{books::book_number, Scheme};
use crate::{utils::CoreError, Result};

impl Scheme {
    /// Parse a versification table
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Versification`] if a chapter entry is malformed,
    /// has no verses, or is out of order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verse_core::versification::{Scheme, Versification};
    ///
    /// let scheme = Scheme::from_vrs("Short", "GEN 1:31 2:25\n# trailing comment\n")?;
    /// assert_eq!(scheme.last_chapter(1), 2);
    /// assert_eq!(scheme.last_verse(1, 2), 25);
    /// # Ok::<(), verse_core::CoreError>(())
    /// ```
    pub fn from_vrs(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut scheme = Self::new(name);

        for (line_index, raw_line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let line = raw_line.split('#').next().unwrap_or_default().trim();

            if line.is_empty() || line.starts_with('-') || line.contains('=') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(code) = tokens.next() else {
                continue;
            };

            let Some(book) = book_number(code) else {
                tracing::trace!(code, line = line_number, "skipping non-canonical book");
                continue;
            };

            let verses = parse_chapter_entries(tokens, line_number)?;
            if verses.is_empty() {
                return Err(CoreError::versification(
                    line_number,
                    format!("book {code} lists no chapters"),
                ));
            }
            scheme.set_book(book, verses);
        }

        Ok(scheme)
    }
}

/// Parse the `chapter:last_verse` entries of one book line
fn parse_chapter_entries<'a>(
    entries: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Vec<u16>> {
    let mut verses = Vec::new();

    for entry in entries {
        let (chapter, last_verse) = entry.split_once(':').ok_or_else(|| {
            CoreError::versification(line, format!("expected 'chapter:verse', found '{entry}'"))
        })?;

        let chapter: u16 = chapter.parse().map_err(|_| {
            CoreError::versification(line, format!("invalid chapter '{chapter}'"))
        })?;
        let last_verse: u16 = last_verse.parse().map_err(|_| {
            CoreError::versification(line, format!("invalid verse count '{last_verse}'"))
        })?;

        if usize::from(chapter) != verses.len() + 1 {
            return Err(CoreError::versification(
                line,
                format!("chapter {chapter} out of order, expected {}", verses.len() + 1),
            ));
        }
        if last_verse == 0 {
            return Err(CoreError::versification(
                line,
                format!("chapter {chapter} has no verses"),
            ));
        }
        verses.push(last_verse);
    }

    Ok(verses)
}
