//! End-to-end overwrite classification tests
//!
//! Builds current and saved books from marker runs, recomputes their
//! boundaries, and checks the verdict a restore flow would receive.

use verse_core::{
    analysis::{
        classify_overwrite, classify_overwrite_with_config, find_holes, LossKind,
        OverwriteConfig, Verdict,
    },
    model::{Book, Paragraph, Run, Section},
    ranges::recompute_all,
    utils::BookGenerator,
    versification::Scheme,
    MissingRange, Reference,
};

fn section(runs: Vec<Run>) -> Section {
    Section::from_paragraphs(vec![Paragraph::new(runs)])
}

fn book(sections: Vec<Section>) -> Book {
    let mut book = Book::with_sections(1, sections);
    recompute_all(&mut book, &Scheme::english());
    book
}

fn gen(chapter: u16, verse: u16) -> Reference {
    Reference::new(1, chapter, verse)
}

fn missing(start: Reference, end: Reference) -> MissingRange {
    MissingRange::new(start, end).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hole_finder_reports_gap() {
        let saved = book(vec![
            section(vec![Run::chapter("1"), Run::verse("1-10")]),
            section(vec![Run::verse("15-25")]),
        ]);
        let holes = find_holes(&saved, &Scheme::english()).unwrap();
        assert_eq!(holes, vec![missing(gen(1, 11), gen(1, 14))]);
        assert_eq!(holes[0].to_string(), "GEN 1:11-14");
    }

    #[test]
    fn test_contiguous_current_against_holed_snapshot() {
        let current = book(vec![section(vec![Run::chapter("1"), Run::verse("1-25")])]);
        let saved = book(vec![
            section(vec![Run::chapter("1"), Run::verse("1-10")]),
            section(vec![Run::verse("15-25")]),
        ]);

        let report = classify_overwrite(&current, &saved.snapshot(), &Scheme::english()).unwrap();
        assert_eq!(report.verdict, Verdict::DataLoss);
        assert_eq!(report.missing_ranges, vec![missing(gen(1, 11), gen(1, 14))]);
        assert_eq!(report.losses, LossKind::INTERIOR);
    }

    #[test]
    fn test_separable_section_allows_partial_restore() {
        let current = book(vec![
            section(vec![Run::chapter("1"), Run::verse("1-10")]),
            section(vec![Run::verse("11"), Run::verse("12-14")]),
            section(vec![Run::verse("15-25")]),
        ]);
        let saved = book(vec![
            section(vec![Run::chapter("1"), Run::verse("1-10")]),
            section(vec![Run::verse("15-25")]),
        ]);

        let report = classify_overwrite(&current, &saved.snapshot(), &Scheme::english()).unwrap();
        assert_eq!(report.verdict, Verdict::Partial);
        assert_eq!(report.sections_to_remove, vec![1]);
    }

    #[test]
    fn test_superset_snapshot_is_lossless() {
        let current = book(vec![
            section(vec![Run::chapter("1"), Run::verse("3-10")]),
            section(vec![Run::verse("20-25")]),
        ]);
        let saved = book(vec![
            section(vec![Run::text_run("Introduction")]),
            section(vec![Run::chapter("1"), Run::verse("1-31")]),
            section(vec![Run::chapter("2"), Run::verse("1-3")]),
        ]);

        let report = classify_overwrite(&current, &saved.snapshot(), &Scheme::english()).unwrap();
        assert_eq!(report.verdict, Verdict::FullNoDataLoss);
        assert!(report.missing_ranges.is_empty());
    }

    #[test]
    fn test_trailing_chapter_loss() {
        let current = book(vec![
            section(vec![Run::chapter("1"), Run::verse("1-31")]),
            section(vec![Run::chapter("2"), Run::verse("1-25")]),
        ]);
        let saved = book(vec![section(vec![Run::chapter("1"), Run::verse("1-31")])]);

        let report = classify_overwrite(&current, &saved.snapshot(), &Scheme::english()).unwrap();
        assert_eq!(report.verdict, Verdict::Partial);
        assert_eq!(report.missing_ranges, vec![missing(gen(2, 1), gen(2, 25))]);
        assert_eq!(report.losses, LossKind::TRAILING);
        assert_eq!(report.sections_to_remove, vec![1]);
    }

    #[test]
    fn test_generated_books_with_holes() {
        let scheme = Scheme::english();
        let generator = BookGenerator::new(1)
            .with_max_sections(20)
            .with_locale("en")
            .with_locale("es");
        let current = generator.generate(&scheme);
        let saved = BookGenerator::new(1)
            .with_max_sections(20)
            .with_locale("en")
            .generate_with_holes(&scheme, 3);

        let report = classify_overwrite(&current, &saved.snapshot(), &scheme).unwrap();
        assert_eq!(report.verdict, Verdict::Partial);
        assert_eq!(report.sections_to_remove.len(), 6);
        assert_eq!(report.missing_back_translation_locales, vec!["es"]);

        let config = OverwriteConfig::default().with_partial(false);
        let strict = classify_overwrite_with_config(&current, &saved.snapshot(), &scheme, &config)
            .unwrap();
        assert_eq!(strict.verdict, Verdict::DataLoss);
        assert_eq!(strict.missing_ranges, report.missing_ranges);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes() {
        let current = book(vec![section(vec![Run::chapter("1"), Run::verse("1-25")])]);
        let saved = book(vec![section(vec![Run::chapter("1"), Run::verse("1-20")])]);

        let report = classify_overwrite(&current, &saved.snapshot(), &Scheme::english()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""verdict":"DataLoss""#));
    }
}
