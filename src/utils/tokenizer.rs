use rustc_hash::FxHashSet;

/// Returns true for characters that belong inside a term
#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Split text into normalized terms.
///
/// A term is a maximal run of alphanumeric or underscore characters,
/// lowercased. Order is preserved and repeated words are kept; callers that
/// need a set use [`unique_terms`].
///
/// This is the only tokenizer in the crate: indexing and query parsing both
/// go through it, so a word can only match if both sides normalize it the
/// same way.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();

    // Lowercase first: 'İ' becomes 'i' plus a combining dot, which splits
    for ch in text.chars().flat_map(char::to_lowercase) {
        if is_word_char(ch) {
            current.push(ch);
        } else if !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        terms.push(current);
    }

    terms
}

/// Tokenize and drop repeats, keeping the first occurrence of each term
pub fn unique_terms(text: &str) -> Vec<String> {
    dedup_terms(tokenize(text))
}

/// Remove duplicate terms while keeping first-occurrence order
pub fn dedup_terms(terms: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    terms
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
