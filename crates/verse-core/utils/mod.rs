//! Utility functions and shared types for verse-core
//!
//! Contains the crate-wide error types, hash container helpers, and the
//! synthetic book generator used by benchmarks and tests.
//!
//! # Example
//!
//! ```rust
//! use verse_core::utils::BookGenerator;
//! use verse_core::versification::Scheme;
//!
//! let scheme = Scheme::english();
//! let book = BookGenerator::new(65).with_verses_per_section(5).generate(&scheme);
//! assert_eq!(book.sections().len(), 6);
//! ```

pub mod book_generator;
pub mod errors;
pub mod hashers;

pub use book_generator::BookGenerator;
pub use errors::CoreError;
pub use hashers::{create_hash_map, create_hash_set};
