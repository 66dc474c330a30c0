pub mod executor;
pub mod grouper;

pub use executor::search;
pub use grouper::{DEFAULT_SNIPPET_CAP, MatchGroup, SnippetRow, group, snippet_rows};
