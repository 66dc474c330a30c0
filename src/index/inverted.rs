use crate::index::types::{DocId, LineNo, Posting};
use rustc_hash::FxHashMap;

/// Term to posting-list map.
///
/// Posting lists keep insertion order, which is build traversal order:
/// documents in the order they were indexed, lines ascending within each.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: FxHashMap<String, Vec<Posting>>,
    posting_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` occurs on `line` of `doc_id`.
    ///
    /// Returns false if that exact posting was the last one appended for the
    /// term, so repeated words on a line collapse to one posting.
    pub(crate) fn insert(&mut self, term: String, doc_id: DocId, line: LineNo) -> bool {
        let posting = Posting::new(doc_id, line);
        let list = self.postings.entry(term).or_default();

        if list.last() == Some(&posting) {
            return false;
        }

        list.push(posting);
        self.posting_count += 1;
        true
    }

    /// Posting list for a term; empty when the term was never indexed
    pub fn lookup(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn posting_count(&self) -> usize {
        self.posting_count
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}
