use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Position of a document in build order
pub type DocId = u32;

/// 1-based line number inside a document
pub type LineNo = u32;

/// Extensions indexed when no configuration overrides them
pub const DEFAULT_EXTENSIONS: &[&str] = &[".txt", ".md", ".py", ".html", ".css", ".js"];

/// A term occurrence: document and the line it appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Posting {
    pub doc_id: DocId,
    pub line: LineNo,
}

impl Posting {
    pub fn new(doc_id: DocId, line: LineNo) -> Self {
        Self { doc_id, line }
    }
}

/// Counters reported by a build pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildStats {
    pub files_indexed: usize,
    pub files_skipped: usize,
    /// Distinct terms in the index
    pub terms: usize,
    /// Total postings across all terms
    pub postings: usize,
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl BuildStats {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Configuration for the indexer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// File name suffixes to index, compared case-sensitively
    pub extensions: Vec<String>,
    /// Globs matched against root-relative paths; matching files are left out
    pub exclude: Vec<String>,
    /// Walk into hidden files and directories
    pub include_hidden: bool,
    /// Honour .gitignore / .ignore files while walking
    pub respect_ignore_files: bool,
    pub follow_links: bool,
    /// Files larger than this are skipped and counted as such
    pub max_file_size: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            include_hidden: true,
            respect_ignore_files: false,
            follow_links: false,
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl IndexConfig {
    /// True if the file name ends with one of the configured extensions
    pub fn accepts_name(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}
