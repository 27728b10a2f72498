//! Coverage holes between scripture sections

use crate::{model::Book, reference::MissingRange, versification::Versification, Reference, Result};

/// Verses with no covering section between a book's scripture sections
///
/// Leading introductions are skipped, and nothing before the first or after
/// the last scripture section is reported. Holes come back in strictly
/// ascending, non-overlapping order: each gap is measured from the highest
/// verse covered so far, so a section that steps backwards never produces
/// a hole overlapping an earlier one.
///
/// # Errors
///
/// Returns [`crate::CoreError::IllegalRangeOperation`] only if the verse
/// arithmetic produces a backwards range, which indicates inconsistent
/// section boundaries.
pub fn find_holes(book: &Book, scheme: &dyn Versification) -> Result<Vec<MissingRange>> {
    let mut sections = book.scripture_sections().iter();
    let Some(first) = sections.next() else {
        return Ok(Vec::new());
    };

    let mut holes = Vec::new();
    let mut covered = first.range_max();

    for section in sections {
        let next_min = section.range_min();
        if next_min > covered && !continues_across_chapter(covered, next_min, scheme) {
            let start = covered.next_verse(scheme);
            let end = next_min.previous_verse(scheme);
            if next_min != start && start <= end {
                holes.push(MissingRange::new(start, end)?);
            }
        }
        covered = covered.max(section.range_max());
    }

    debug_assert!(holes.windows(2).all(|pair| pair[0].is_before(&pair[1])));
    Ok(holes)
}

/// Check for the exact chapter break: last verse of one chapter, then verse 1 of the next
pub(crate) fn continues_across_chapter(
    before: Reference,
    after: Reference,
    scheme: &dyn Versification,
) -> bool {
    before.is_last_verse_of_chapter(scheme)
        && before.chapter.checked_add(1) == Some(after.chapter)
        && after.verse == 1
}
