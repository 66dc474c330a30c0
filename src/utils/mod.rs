//! Utility functions shared by indexing and querying.
//!
//! - [`tokenizer`] - Term extraction used on both file lines and queries
//! - [`text`] - Lossy decoding and line splitting of file contents
//! - [`app_data`] - Configuration file loading
//! - [`progress`] - Optional build progress bar
//!
//! ```
//! use lsearch::utils::tokenize;
//!
//! assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
//! ```

pub mod app_data;
pub mod progress;
pub mod text;
pub mod tokenizer;

pub use app_data::*;
pub use text::*;
pub use tokenizer::*;
