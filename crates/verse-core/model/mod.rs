//! In-memory object model of a translated book
//!
//! Books own sections, sections own a heading and a content container,
//! containers own paragraphs, and paragraphs own runs. Only the parts the
//! consistency engine reads are modelled: run styles and literal text,
//! paragraph order, back-translation locales, and the section boundaries
//! the range consolidator maintains.
//!
//! # Example
//!
//! ```rust
//! use verse_core::model::{Book, Paragraph, Run, Section};
//!
//! let mut book = Book::new(43);
//! book.push_section(Section::from_paragraphs(vec![Paragraph::new(vec![
//!     Run::chapter("3"),
//!     Run::verse("16"),
//!     Run::text_run("For God so loved the world"),
//! ])]));
//! assert_eq!(book.sections().len(), 1);
//! ```

mod book;
mod paragraph;
mod run;
mod section;

pub use book::{Book, Footnote, SavedSnapshot};
pub use paragraph::{BackTranslation, Paragraph, TextContainer};
pub use run::{Run, RunStyle};
pub use section::{Section, SectionRange};
