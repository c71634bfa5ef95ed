use serde::{Serialize, Deserialize};
use std::fmt;
use crate::core::types::DocId;

/// One ranked hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}

impl SearchResult {
    pub fn new(doc_id: DocId, score: f64) -> Self {
        SearchResult { doc_id, score }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ID={}, Rank={:.6};", self.doc_id, self.score)
    }
}

/// Ranked query output, descending by score. Tied scores keep ascending
/// doc_id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub hits: Vec<SearchResult>,
}

impl SearchResults {
    pub fn empty() -> Self {
        SearchResults::default()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.hits.iter()
    }

    pub fn doc_ids(&self) -> Vec<DocId> {
        self.hits.iter().map(|hit| hit.doc_id).collect()
    }
}

impl IntoIterator for SearchResults {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}
