//! Overwrite classification between a book and a saved snapshot
//!
//! Restoring a snapshot replaces the current book wholesale. Before doing
//! so, callers ask [`classify_overwrite`] which verses the current book has
//! that the snapshot lacks. The answer is one of three verdicts:
//!
//! - [`Verdict::FullNoDataLoss`]: the snapshot covers everything
//! - [`Verdict::Partial`]: the uncovered verses live in whole sections
//!   that can be removed from the current book first
//! - [`Verdict::DataLoss`]: some uncovered verses share a section with
//!   covered ones
//!
//! Divergence between the two books is the expected case and is always
//! reported through the verdict, never as an error.

use core::fmt;

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::holes::find_holes;
use crate::{
    model::{Book, SavedSnapshot, Section},
    reference::MissingRange,
    versification::Versification,
    Reference, Result,
};

/// Outcome of comparing a book with a saved snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// Restoring the snapshot loses nothing
    FullNoDataLoss,
    /// Restoring the snapshot loses verses that cannot be split off
    DataLoss,
    /// Restoring is lossless once the listed sections are removed
    Partial,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullNoDataLoss => write!(f, "full, no data loss"),
            Self::DataLoss => write!(f, "data loss"),
            Self::Partial => write!(f, "partial"),
        }
    }
}

bitflags! {
    /// Where the current book has material the snapshot lacks
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct LossKind: u8 {
        /// Introduction the snapshot does not have
        const INTRODUCTION = 1 << 0;
        /// Verses before the snapshot's first scripture section
        const LEADING = 1 << 1;
        /// Verses inside the snapshot's holes
        const INTERIOR = 1 << 2;
        /// Verses after the snapshot's last scripture section
        const TRAILING = 1 << 3;
        /// Snapshot has no scripture at all
        const ENTIRE = 1 << 4;
    }
}

/// Options for overwrite classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverwriteConfig {
    /// Report back-translation locales the snapshot lacks
    pub compare_back_translations: bool,
    /// Allow [`Verdict::Partial`]; when off, any loss is [`Verdict::DataLoss`]
    pub allow_partial: bool,
}

impl Default for OverwriteConfig {
    fn default() -> Self {
        Self {
            compare_back_translations: true,
            allow_partial: true,
        }
    }
}

impl OverwriteConfig {
    /// Set whether back-translation locales are compared
    #[must_use]
    pub const fn with_back_translations(mut self, enabled: bool) -> Self {
        self.compare_back_translations = enabled;
        self
    }

    /// Set whether partial merges may be proposed
    #[must_use]
    pub const fn with_partial(mut self, enabled: bool) -> Self {
        self.allow_partial = enabled;
        self
    }
}

/// Full result of an overwrite classification
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverwriteReport {
    /// Verdict
    pub verdict: Verdict,
    /// Verses the current book has and the snapshot lacks, ascending
    pub missing_ranges: Vec<MissingRange>,
    /// Current-book sections to remove before a partial restore, ascending
    pub sections_to_remove: Vec<usize>,
    /// Back-translation locales used by the current book but not the snapshot, sorted
    pub missing_back_translation_locales: Vec<String>,
    /// Where the missing material lies
    pub losses: LossKind,
}

impl OverwriteReport {
    /// Empty lossless report
    fn new(missing_back_translation_locales: Vec<String>) -> Self {
        Self {
            verdict: Verdict::FullNoDataLoss,
            missing_ranges: Vec::new(),
            sections_to_remove: Vec::new(),
            missing_back_translation_locales,
            losses: LossKind::empty(),
        }
    }

    /// Check whether the snapshot can replace the book as-is
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.verdict == Verdict::FullNoDataLoss
    }

    /// Record missing verses and where they were found
    fn record(&mut self, range: MissingRange, kind: LossKind) {
        self.missing_ranges.push(range);
        self.losses |= kind;
    }
}

/// Classify restoring `saved` over `current` with default options
///
/// # Errors
///
/// Returns [`crate::CoreError::IllegalRangeOperation`] only when section
/// boundaries are inconsistent enough to make the range arithmetic run
/// backwards; divergent content never fails.
pub fn classify_overwrite(
    current: &Book,
    saved: &SavedSnapshot,
    scheme: &dyn Versification,
) -> Result<OverwriteReport> {
    classify_overwrite_with_config(current, saved, scheme, &OverwriteConfig::default())
}

/// Classify restoring `saved` over `current`
///
/// Both books must have up-to-date section boundaries.
///
/// # Errors
///
/// See [`classify_overwrite`].
pub fn classify_overwrite_with_config(
    current: &Book,
    saved: &SavedSnapshot,
    scheme: &dyn Versification,
    config: &OverwriteConfig,
) -> Result<OverwriteReport> {
    let locales = if config.compare_back_translations {
        missing_locales(current, saved)
    } else {
        Vec::new()
    };
    let mut report = OverwriteReport::new(locales);

    let (Some(current_first), Some(saved_first)) = (current.section(0), saved.section(0)) else {
        if !current.is_empty() {
            lose_everything(current, &mut report)?;
        }
        return Ok(finish(report));
    };

    let introduction_lost = current_first.is_introduction() && !saved_first.is_introduction();
    if introduction_lost {
        report.losses |= LossKind::INTRODUCTION;
    }

    if let Some((current_min, current_max)) = scripture_extent(current.scripture_sections()) {
        match scripture_extent(saved.scripture_sections()) {
            Some((saved_min, saved_max)) => {
                if current_min < saved_min {
                    let end = saved_min.previous_verse(scheme).min(current_max);
                    report.record(MissingRange::new(current_min, end)?, LossKind::LEADING);
                }

                let extent = MissingRange::new(current_min, current_max)?;
                for range in diff_holes(current, saved, extent, scheme)? {
                    report.record(range, LossKind::INTERIOR);
                }

                if current_max > saved_max {
                    let start = saved_max.next_verse(scheme).max(current_min);
                    if start <= current_max {
                        report.record(MissingRange::new(start, current_max)?, LossKind::TRAILING);
                    }
                }
            }
            None => report.record(MissingRange::new(current_min, current_max)?, LossKind::ENTIRE),
        }
    }

    if report.missing_ranges.is_empty() && !introduction_lost {
        return Ok(finish(report));
    }

    report.verdict = if config.allow_partial {
        plan_partial(current, introduction_lost, &mut report)
    } else {
        Verdict::DataLoss
    };
    Ok(finish(report))
}

/// Record a snapshot with no sections at all
fn lose_everything(current: &Book, report: &mut OverwriteReport) -> Result<()> {
    report.verdict = Verdict::DataLoss;
    report.losses |= LossKind::ENTIRE;
    if current.section(0).is_some_and(Section::is_introduction) {
        report.losses |= LossKind::INTRODUCTION;
    }
    if let Some((min, max)) = scripture_extent(current.scripture_sections()) {
        report.missing_ranges.push(MissingRange::new(min, max)?);
    }
    Ok(())
}

/// First scripture verse and highest verse covered
fn scripture_extent(sections: &[Section]) -> Option<(Reference, Reference)> {
    let first = sections.first()?;
    let max = sections.iter().map(Section::range_max).max()?;
    Some((first.range_min(), max))
}

/// Parts of the snapshot's holes that the current book covers
///
/// Both hole lists are ascending and disjoint, so a single forward pass
/// pairs each snapshot hole with the current holes that overlap it. Holes
/// outside the current book's extent are clipped first, since verses the
/// current book never had cannot be lost.
fn diff_holes(
    current: &Book,
    saved: &Book,
    extent: MissingRange,
    scheme: &dyn Versification,
) -> Result<Vec<MissingRange>> {
    let current_holes = find_holes(current, scheme)?;
    let saved_holes = find_holes(saved, scheme)?;

    let mut missing = Vec::new();
    let mut next = 0;

    for hole in saved_holes {
        if !extent.overlaps_span(hole.start(), hole.end()) {
            continue;
        }
        let mut hole = MissingRange::new(
            hole.start().max(extent.start()),
            hole.end().min(extent.end()),
        )?;

        loop {
            while current_holes
                .get(next)
                .is_some_and(|covered| covered.end() < hole.start())
            {
                next += 1;
            }

            let Some(gap) = current_holes
                .get(next)
                .filter(|gap| gap.start() <= hole.end())
            else {
                missing.push(hole);
                break;
            };

            if gap.start() > hole.start() {
                let end = gap.start().previous_verse(scheme);
                missing.push(MissingRange::new(hole.start(), end)?);
            }

            if hole.end() <= gap.end() {
                break;
            }
            hole = hole.starting_after(gap.end(), scheme)?;
        }
    }

    Ok(missing)
}

/// Decide between [`Verdict::Partial`] and [`Verdict::DataLoss`]
///
/// Every section touching a missing range must lie wholly inside one, and
/// at least one section must be removable.
fn plan_partial(current: &Book, introduction_lost: bool, report: &mut OverwriteReport) -> Verdict {
    let mut removable = Vec::new();

    for (index, section) in current.sections().iter().enumerate() {
        if section.is_introduction() {
            if introduction_lost {
                removable.push(index);
            }
            continue;
        }

        let (min, max) = (section.range_min(), section.range_max());
        if report
            .missing_ranges
            .iter()
            .any(|range| range.contains_span(min, max))
        {
            removable.push(index);
        } else if report
            .missing_ranges
            .iter()
            .any(|range| range.overlaps_span(min, max))
        {
            return Verdict::DataLoss;
        }
    }

    if removable.is_empty() {
        return Verdict::DataLoss;
    }
    report.sections_to_remove = removable;
    Verdict::Partial
}

/// Back-translation locales in `current` that `saved` does not use, sorted
fn missing_locales(current: &Book, saved: &Book) -> Vec<String> {
    let saved_locales = saved.back_translation_locales();
    let mut missing: Vec<String> = current
        .back_translation_locales()
        .into_iter()
        .filter(|locale| !saved_locales.contains(locale))
        .collect();
    missing.sort_unstable();
    missing
}

/// Log the final verdict
fn finish(report: OverwriteReport) -> OverwriteReport {
    debug!(
        verdict = %report.verdict,
        missing = report.missing_ranges.len(),
        removable = report.sections_to_remove.len(),
        losses = ?report.losses,
        "classified overwrite"
    );
    report
}
