use crate::index::store::DocumentStore;
use crate::index::types::{DocId, LineNo, Posting};
use serde::Serialize;
use std::path::PathBuf;

/// Lines shown per file unless configured otherwise
pub const DEFAULT_SNIPPET_CAP: usize = 3;

/// Matches of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub doc_id: DocId,
    /// First `cap` matching lines, ascending
    pub lines: Vec<LineNo>,
    /// All matching lines in the document, shown or not
    pub total: usize,
}

impl MatchGroup {
    /// Matches left out by the cap
    pub fn hidden(&self) -> usize {
        self.total - self.lines.len()
    }
}

/// A single line ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetRow {
    pub path: PathBuf,
    pub line_number: LineNo,
    pub line_text: String,
    pub total_in_document: usize,
}

/// Group ordered matches by document, keeping at most `cap` lines each.
///
/// Expects the ordering produced by [`search`](super::search), where all
/// matches of a document are contiguous. Group order follows that order.
pub fn group(matches: &[Posting], cap: usize) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();

    for posting in matches {
        let starts_group = groups
            .last()
            .is_none_or(|group| group.doc_id != posting.doc_id);
        if starts_group {
            groups.push(MatchGroup {
                doc_id: posting.doc_id,
                lines: Vec::new(),
                total: 0,
            });
        }
        let Some(group) = groups.last_mut() else {
            continue;
        };

        group.total += 1;
        if group.lines.len() < cap {
            group.lines.push(posting.line);
        }
    }

    groups
}

/// Flatten groups into rows with their line text.
///
/// Groups whose document is not in `store` are dropped.
pub fn snippet_rows(groups: &[MatchGroup], store: &DocumentStore) -> Vec<SnippetRow> {
    let mut rows = Vec::new();
    for group in groups {
        let Some(doc) = store.get(group.doc_id) else {
            continue;
        };
        for &line in &group.lines {
            rows.push(SnippetRow {
                path: doc.path.clone(),
                line_number: line,
                line_text: doc.line(line).unwrap_or_default().to_string(),
                total_in_document: group.total,
            });
        }
    }
    rows
}
