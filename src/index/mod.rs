pub mod build;
pub mod inverted;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod types;
pub mod walk;

pub use build::{IndexBuilder, build_index};
pub use inverted::InvertedIndex;
pub use snapshot::{IndexSnapshot, SharedIndex};
pub use store::{Document, DocumentStore};
pub use types::*;
pub use walk::{FileSystem, OsFileSystem, WalkEntry};
