//! Paragraphs and the text containers that own them

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Run;

/// Back translation of a paragraph into a glossing language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackTranslation {
    /// Locale of the back translation, e.g. `en` or `fr-CA`
    pub locale: String,
    /// Translated text
    pub text: String,
}

/// Ordered sequence of runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paragraph {
    /// Runs in reading order
    runs: Vec<Run>,
    /// Back translations keyed by locale
    back_translations: Vec<BackTranslation>,
}

impl Paragraph {
    /// Create a paragraph from runs
    #[must_use]
    pub const fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            back_translations: Vec::new(),
        }
    }

    /// Attach a back translation, replacing any existing one for the locale
    #[must_use]
    pub fn with_back_translation(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_back_translation(locale, text);
        self
    }

    /// Set a back translation, replacing any existing one for the locale
    pub fn set_back_translation(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        let locale = locale.into();
        let text = text.into();
        match self
            .back_translations
            .iter_mut()
            .find(|existing| existing.locale == locale)
        {
            Some(existing) => existing.text = text,
            None => self.back_translations.push(BackTranslation { locale, text }),
        }
    }

    /// Runs in reading order
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Append a run
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Back translations of this paragraph
    #[must_use]
    pub fn back_translations(&self) -> &[BackTranslation] {
        &self.back_translations
    }

    /// Check whether the first run is a chapter or verse number
    #[must_use]
    pub fn starts_with_reference(&self) -> bool {
        self.runs.first().is_some_and(Run::is_reference_marker)
    }

    /// Concatenated text of every run
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// Ordered sequence of paragraphs: a heading, content, title or footnote body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextContainer {
    /// Paragraphs in reading order
    paragraphs: Vec<Paragraph>,
}

impl TextContainer {
    /// Create a container from paragraphs
    #[must_use]
    pub const fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Paragraphs in reading order
    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Mutable paragraphs, for editing layers
    pub fn paragraphs_mut(&mut self) -> &mut Vec<Paragraph> {
        &mut self.paragraphs
    }

    /// Append a paragraph
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Check whether the container holds no paragraphs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Locales of every back translation in the container
    pub fn back_translation_locales(&self) -> impl Iterator<Item = &str> + '_ {
        self.paragraphs
            .iter()
            .flat_map(Paragraph::back_translations)
            .map(|translation| translation.locale.as_str())
    }
}

impl From<Vec<Paragraph>> for TextContainer {
    fn from(paragraphs: Vec<Paragraph>) -> Self {
        Self::new(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_translations_replace_by_locale() {
        let mut paragraph = Paragraph::new(vec![Run::text_run("In the beginning")])
            .with_back_translation("en", "first")
            .with_back_translation("fr", "premier");
        paragraph.set_back_translation("en", "second");

        let texts: Vec<_> = paragraph
            .back_translations()
            .iter()
            .map(|bt| (bt.locale.as_str(), bt.text.as_str()))
            .collect();
        assert_eq!(texts, vec![("en", "second"), ("fr", "premier")]);
    }

    #[test]
    fn anchored_paragraphs_start_with_markers() {
        let anchored = Paragraph::new(vec![Run::chapter("2"), Run::text_run("Thus")]);
        let plain = Paragraph::new(vec![Run::text_run("And"), Run::verse("2")]);
        assert!(anchored.starts_with_reference());
        assert!(!plain.starts_with_reference());
        assert!(!Paragraph::default().starts_with_reference());
    }

    #[test]
    fn plain_text_joins_runs() {
        let paragraph = Paragraph::new(vec![Run::verse("1"), Run::text_run("In the beginning")]);
        assert_eq!(paragraph.plain_text(), "1In the beginning");
    }
}
