use std::fmt;
use ahash::AHashMap;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::stemmer::Stemmer;
use crate::core::config::IndexConfig;
use crate::core::error::Result;
use crate::core::stats::CorpusStats;
use crate::core::types::DocId;
use crate::index::posting::{Posting, PostingList};
use crate::search::executor::QueryExecutor;
use crate::search::results::SearchResults;
use crate::scoring::bm25::Bm25;

/// In-memory inverted index with BM25 ranking.
///
/// Two build styles are supported. Eager insertion (`eager_finalize = true`)
/// keeps every posting list sorted and the corpus statistics current after
/// each document. Bulk insertion appends in caller order and defers both to
/// one [`finalize`] call, which must run before the first search.
///
/// Callers supply unique document ids; inserting the same id twice corrupts
/// the document-length bookkeeping and is not detected.
///
/// [`finalize`]: InvertedIndex::finalize
pub struct InvertedIndex {
    config: IndexConfig,
    analyzer: Analyzer,
    postings: AHashMap<String, PostingList>,
    // (term, doc) → tf, so scoring never rescans a posting list
    term_docs: AHashMap<String, AHashMap<DocId, u32>>,
    stats: CorpusStats,
}

impl InvertedIndex {
    pub fn new(stemmer: Box<dyn Stemmer>) -> Result<Self> {
        InvertedIndex::with_config(stemmer, IndexConfig::default())
    }

    pub fn with_config(stemmer: Box<dyn Stemmer>, config: IndexConfig) -> Result<Self> {
        Ok(InvertedIndex {
            analyzer: Analyzer::new(stemmer, config.min_token_len)?,
            config,
            postings: AHashMap::new(),
            term_docs: AHashMap::new(),
            stats: CorpusStats::new(),
        })
    }

    /// Insert one document.
    ///
    /// With `eager_finalize` the index stays queryable after every call; in
    /// bulk mode posting lists remain unsorted and the statistics stale until
    /// [`finalize`](InvertedIndex::finalize) runs.
    pub fn insert(&mut self, doc_id: DocId, text: &str, eager_finalize: bool) {
        let term_counts = self.analyzer.index_terms(text);

        let mut doc_len = 0u64;
        for (term, count) in term_counts {
            doc_len += count as u64;
            self.insert_entry(term, Posting::new(doc_id, count), eager_finalize);
        }

        self.stats.record_doc(doc_id, doc_len);
        if eager_finalize {
            self.stats.recompute();
        }
    }

    fn insert_entry(&mut self, term: String, posting: Posting, resort: bool) {
        self.term_docs
            .entry(term.clone())
            .or_default()
            .insert(posting.doc_id, posting.term_freq);

        let list = self.postings.entry(term).or_default();
        list.push(posting);
        if resort {
            list.sort_by_doc_id();
        }
    }

    /// Complete a bulk build: sort every posting list and recompute the
    /// corpus statistics. Idempotent.
    pub fn finalize(&mut self) {
        for list in self.postings.values_mut() {
            list.sort_by_doc_id();
        }
        self.stats.recompute();
    }

    /// Inverse document frequency, `ln(doc_count / doc_freq)`. Unknown terms
    /// and the empty index yield 0.
    pub fn idf(&self, term: &str) -> f64 {
        match self.postings.get(term) {
            Some(list) if self.stats.doc_count() > 0 => {
                (self.stats.doc_count() as f64 / list.doc_freq() as f64).ln()
            }
            _ => 0.0,
        }
    }

    /// Run a ranked conjunctive query. The index must be queryable (finalized
    /// or built eagerly).
    pub fn search(&self, text: &str) -> SearchResults {
        let executor = QueryExecutor::with_scorer(Bm25::new(self.config.k1, self.config.b));
        executor.search(self, text)
    }

    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Term frequency of `term` in `doc_id`, from the term×doc mapping.
    pub fn term_freq(&self, term: &str, doc_id: DocId) -> Option<u32> {
        self.term_docs.get(term)?.get(&doc_id).copied()
    }

    /// Tokenize `text` the way queries are tokenized.
    pub fn query_terms(&self, text: &str) -> Vec<String> {
        self.analyzer.query_terms(text)
    }

    pub fn doc_len(&self, doc_id: DocId) -> u64 {
        self.stats.doc_len(doc_id)
    }

    pub fn doc_count(&self) -> u64 {
        self.stats.doc_count()
    }

    pub fn avg_len(&self) -> f64 {
        self.stats.avg_len()
    }

    pub fn skip_stride(&self) -> usize {
        self.stats.skip_stride()
    }

    /// Number of distinct terms in the index
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

impl fmt::Display for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Inverted index. Documents count: {}", self.doc_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::IdentityStemmer;

    fn index() -> InvertedIndex {
        InvertedIndex::new(Box::new(IdentityStemmer)).unwrap()
    }

    fn short_token_index() -> InvertedIndex {
        let config = IndexConfig {
            min_token_len: 1,
            ..IndexConfig::default()
        };
        InvertedIndex::with_config(Box::new(IdentityStemmer), config).unwrap()
    }

    fn doc_ids(index: &InvertedIndex, term: &str) -> Vec<u64> {
        index
            .postings(term)
            .map(|list| list.iter().map(|p| p.doc_id.0).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_bulk_build_sorts_reverse_insertions() {
        let mut index = index();
        for id in (1..=50u64).rev() {
            index.insert(DocId(id), "shared words here", false);
        }
        index.finalize();

        let ids = doc_ids(&index, "shared");
        let sorted: Vec<u64> = (1..=50).collect();
        assert_eq!(ids, sorted);
        assert_eq!(index.skip_stride(), 7);
        assert_eq!(index.avg_len(), 3.0);
    }

    #[test]
    fn test_eager_insert_keeps_lists_sorted() {
        let mut index = index();
        for id in [5u64, 1, 9, 3] {
            index.insert(DocId(id), "alpha beta", true);
        }

        assert_eq!(doc_ids(&index, "alpha"), vec![1, 3, 5, 9]);
        assert_eq!(index.avg_len(), 2.0);
        assert_eq!(index.skip_stride(), 2);
    }

    #[test]
    fn test_eager_and_bulk_agree() {
        let docs = [
            (1u64, "the quick brown fox"),
            (2, "quick brown dogs"),
            (3, "lazy cats sleep"),
        ];

        let mut eager = index();
        let mut bulk = index();
        for (id, text) in docs {
            eager.insert(DocId(id), text, true);
            bulk.insert(DocId(id), text, false);
        }
        bulk.finalize();

        assert_eq!(eager.avg_len(), bulk.avg_len());
        assert_eq!(eager.skip_stride(), bulk.skip_stride());
        for term in ["the", "quick", "brown", "fox", "dogs", "lazy", "cats", "sleep"] {
            assert_eq!(
                eager.postings(term),
                bulk.postings(term),
                "postings for {}",
                term
            );
            assert_eq!(eager.idf(term), bulk.idf(term));
        }
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let docs = [
            (1u64, "red green blue"),
            (2, "green blue"),
            (3, "blue red red"),
        ];

        let mut forward = index();
        for (id, text) in docs {
            forward.insert(DocId(id), text, false);
        }
        forward.finalize();

        let mut backward = index();
        for (id, text) in docs.iter().rev() {
            backward.insert(DocId(*id), text, false);
        }
        backward.finalize();

        assert_eq!(forward.avg_len(), backward.avg_len());
        for term in ["red", "green", "blue"] {
            assert_eq!(forward.postings(term), backward.postings(term));
        }

        let fwd = forward.search("red blue");
        let bwd = backward.search("red blue");
        assert_eq!(fwd.hits, bwd.hits);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut index = index();
        index.insert(DocId(1), "one two three", false);
        index.insert(DocId(2), "two three four", false);
        index.finalize();

        let before: Vec<u64> = doc_ids(&index, "two");
        let avg = index.avg_len();
        index.finalize();
        assert_eq!(doc_ids(&index, "two"), before);
        assert_eq!(index.avg_len(), avg);
    }

    #[test]
    fn test_mapping_mirrors_postings() {
        let mut index = index();
        index.insert(DocId(1), "apple apple pear", false);
        index.insert(DocId(2), "pear plum", false);
        index.finalize();

        // every posting entry has the same tf in the term×doc mapping, and
        // the inner map cardinality equals the list length
        for term in ["apple", "pear", "plum"] {
            let list = index.postings(term).unwrap();
            assert_eq!(index.term_docs[term].len(), list.len());
            for posting in list.iter() {
                assert_eq!(
                    index.term_freq(term, posting.doc_id),
                    Some(posting.term_freq)
                );
            }
        }
        assert_eq!(index.term_freq("apple", DocId(1)), Some(2));
        assert_eq!(index.term_freq("apple", DocId(2)), None);
    }

    #[test]
    fn test_doc_len_is_sum_of_term_freqs() {
        let mut index = index();
        index.insert(DocId(7), "aaa bbb aaa ccc aaa", false);
        index.finalize();

        assert_eq!(index.doc_len(DocId(7)), 5);
        let total: u32 = ["aaa", "bbb", "ccc"]
            .iter()
            .filter_map(|t| index.term_freq(t, DocId(7)))
            .sum();
        assert_eq!(total as u64, index.doc_len(DocId(7)));
    }

    #[test]
    fn test_idf_forms() {
        let mut index = index();
        for id in 1..=100u64 {
            index.insert(DocId(id), "foo common", false);
        }
        index.finalize();

        // every document holds the term: ln(100/100) = 0
        assert_eq!(index.idf("foo"), 0.0);
        assert_eq!(index.idf("missing"), 0.0);

        index.insert(DocId(101), "rare foo", false);
        index.finalize();
        let expected = (101f64 / 1f64).ln();
        assert!((index.idf("rare") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_index_is_inert() {
        let mut index = index();
        index.finalize();
        assert_eq!(index.avg_len(), 0.0);
        assert_eq!(index.skip_stride(), 0);
        assert!(index.search("anything").is_empty());
        assert_eq!(index.to_string(), "Inverted index. Documents count: 0");
    }

    #[test]
    fn test_min_token_len_one_keeps_single_letters() {
        let mut index = short_token_index();
        index.insert(DocId(1), "a b a", false);
        index.finalize();

        assert_eq!(index.term_freq("a", DocId(1)), Some(2));
        assert_eq!(index.doc_len(DocId(1)), 3);
    }
}
