//! # lsearch - local full-text search
//!
//! lsearch walks a directory of text-like files, builds an in-memory
//! inverted index of their words, and answers multi-word queries with the
//! lines that contain every word, grouped by file.
//!
//! ## Architecture
//!
//! - [`index`] - Document store, inverted index, builder and snapshots
//! - [`query`] - AND search and per-file grouping of matches
//! - [`output`] - Terminal and JSON rendering
//! - [`utils`] - Tokenizer, text decoding, configuration
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```no_run
//! use lsearch::index::{IndexConfig, build_index};
//! use std::path::Path;
//!
//! let snapshot = build_index(Path::new("notes"), &IndexConfig::default()).unwrap();
//! for row in snapshot.rows("meeting agenda", 3) {
//!     println!("{}:{}: {}", row.path.display(), row.line_number, row.line_text);
//! }
//! ```
//!
//! The index is never persisted. Every run builds a fresh
//! [`IndexSnapshot`](index::IndexSnapshot); long-running callers can keep a
//! [`SharedIndex`](index::SharedIndex) and swap in rebuilt snapshots while
//! queries keep running against the old one.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{BuildError, ConfigError};
pub use index::{IndexSnapshot, SharedIndex, build_index};
