use std::cmp::Ordering;
use ahash::AHashMap;
use crate::index::intersect::intersect;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::Posting;
use crate::scoring::bm25::Bm25;
use crate::search::results::{SearchResult, SearchResults};

/// Query executor (stateless)
///
/// Tokenizes the query through the index's analyzer, folds the skip-pointer
/// intersection over the term posting lists in tokenizer order, scores the
/// survivors with BM25 and sorts them descending. Operates on any queryable
/// index; it owns no data of its own.
pub struct QueryExecutor {
    pub scorer: Bm25,
}

impl QueryExecutor {
    pub fn new() -> Self {
        QueryExecutor {
            scorer: Bm25::default(),
        }
    }

    pub fn with_scorer(scorer: Bm25) -> Self {
        QueryExecutor { scorer }
    }

    pub fn search(&self, index: &InvertedIndex, text: &str) -> SearchResults {
        let terms = index.query_terms(text);
        if terms.is_empty() {
            return SearchResults::empty();
        }

        let mut idfs: AHashMap<&str, f64> = AHashMap::with_capacity(terms.len());
        for term in &terms {
            idfs.entry(term.as_str()).or_insert_with(|| index.idf(term));
        }

        let matched = self.intersect_terms(index, &terms);

        let mut hits = Vec::with_capacity(matched.len());
        for entry in &matched {
            let doc_len = index.doc_len(entry.doc_id) as f64;
            let mut score = 0.0;
            for term in &terms {
                let tf = index.term_freq(term, entry.doc_id).unwrap_or(0) as f64;
                score += self
                    .scorer
                    .score(tf, idfs[term.as_str()], doc_len, index.avg_len());
            }
            hits.push(SearchResult::new(entry.doc_id, score));
        }

        // stable sort: ties stay in ascending doc_id order
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        SearchResults { hits }
    }

    fn intersect_terms(&self, index: &InvertedIndex, terms: &[String]) -> Vec<Posting> {
        let stride = index.skip_stride();
        let mut result: Vec<Posting> = Vec::new();

        for (i, term) in terms.iter().enumerate() {
            let list = index
                .postings(term)
                .map(|list| list.entries())
                .unwrap_or(&[]);
            if i == 0 {
                result = list.to_vec();
            } else {
                result = intersect(&result, list, stride);
            }
            if result.is_empty() {
                break;
            }
        }

        result
    }
}

impl Default for QueryExecutor {
    fn default() -> Self {
        QueryExecutor::new()
    }
}
