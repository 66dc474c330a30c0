use crate::index::inverted::InvertedIndex;
use crate::index::store::DocumentStore;
use crate::index::types::Posting;
use crate::utils::unique_terms;
use rustc_hash::FxHashSet;

/// Find the lines that contain every term of `query`.
///
/// The query goes through the same tokenizer as indexed lines; repeated
/// words count once. A match is a (document, line) pair present in the
/// posting list of every term. Results are ordered by document build order,
/// then by line number.
///
/// An empty query, or any term missing from the index, yields no matches.
pub fn search(index: &InvertedIndex, store: &DocumentStore, query: &str) -> Vec<Posting> {
    let terms = unique_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut lists: Vec<&[Posting]> = Vec::with_capacity(terms.len());
    for term in &terms {
        let list = index.lookup(term);
        if list.is_empty() {
            return Vec::new();
        }
        lists.push(list);
    }

    // Sort by size so the smallest list drives the intersection
    lists.sort_by_key(|list| list.len());

    let mut matches: Vec<Posting> = lists[0].to_vec();
    for list in &lists[1..] {
        let set: FxHashSet<Posting> = list.iter().copied().collect();
        matches.retain(|posting| set.contains(posting));
        if matches.is_empty() {
            return matches;
        }
    }

    // Doc ids are assigned in build order, so this is build order then line
    matches.sort_unstable();
    debug_assert!(matches.iter().all(|p| store.line(p.doc_id, p.line).is_some()));
    matches
}
