use crate::index::types::{DocId, LineNo};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// An indexed file and its raw lines
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Document {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a 1-based line
    pub fn line(&self, line: LineNo) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        self.lines.get(idx).map(String::as_str)
    }
}

/// Line content of every indexed file, in build order.
///
/// Filled only by the index builder; after a build it is never mutated.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
    by_path: FxHashMap<PathBuf, DocId>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and return its id.
    ///
    /// Re-adding a known path replaces its lines and keeps the original id.
    pub(crate) fn insert(&mut self, path: PathBuf, lines: Vec<String>) -> DocId {
        if let Some(&doc_id) = self.by_path.get(&path) {
            self.docs[doc_id as usize].lines = lines;
            return doc_id;
        }

        let doc_id = self.docs.len() as DocId;
        self.by_path.insert(path.clone(), doc_id);
        self.docs.push(Document { path, lines });
        doc_id
    }

    pub fn get(&self, doc_id: DocId) -> Option<&Document> {
        self.docs.get(doc_id as usize)
    }

    pub fn id_of(&self, path: &Path) -> Option<DocId> {
        self.by_path.get(path).copied()
    }

    pub fn by_path(&self, path: &Path) -> Option<&Document> {
        self.id_of(path).and_then(|id| self.get(id))
    }

    pub fn path(&self, doc_id: DocId) -> Option<&Path> {
        self.get(doc_id).map(|d| d.path.as_path())
    }

    /// Snippet text for a (document, line) pair
    pub fn line(&self, doc_id: DocId, line: LineNo) -> Option<&str> {
        self.get(doc_id)?.line(line)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &Document)> {
        self.docs
            .iter()
            .enumerate()
            .map(|(i, doc)| (i as DocId, doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ids_follow_insert_order() {
        let mut store = DocumentStore::new();
        let a = store.insert(PathBuf::from("a.txt"), lines(&["one"]));
        let b = store.insert(PathBuf::from("b.txt"), lines(&["two"]));
        assert_eq!((a, b), (0, 1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.id_of(Path::new("b.txt")), Some(1));
    }

    #[test]
    fn test_line_lookup_is_one_based() {
        let mut store = DocumentStore::new();
        let id = store.insert(PathBuf::from("a.txt"), lines(&["first", "second"]));
        assert_eq!(store.line(id, 1), Some("first"));
        assert_eq!(store.line(id, 2), Some("second"));
        assert_eq!(store.line(id, 0), None);
        assert_eq!(store.line(id, 3), None);
        assert_eq!(store.line(id + 1, 1), None);
    }

    #[test]
    fn test_reinsert_keeps_id() {
        let mut store = DocumentStore::new();
        let id = store.insert(PathBuf::from("a.txt"), lines(&["old"]));
        let again = store.insert(PathBuf::from("a.txt"), lines(&["new"]));
        assert_eq!(id, again);
        assert_eq!(store.len(), 1);
        assert_eq!(store.by_path(Path::new("a.txt")).unwrap().lines, vec!["new"]);
    }
}
