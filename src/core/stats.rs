use ahash::AHashMap;
use crate::core::types::DocId;

/// Corpus-wide statistics backing BM25 length normalization and the
/// skip-pointer stride.
///
/// `avg_len` and `skip_stride` are only meaningful after [`recompute`]
/// has run over the full document set (finalize, or eager insertion).
///
/// [`recompute`]: CorpusStats::recompute
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    doc_lens: AHashMap<DocId, u64>,
    doc_count: u64,
    avg_len: f64,
    skip_stride: usize,
}

impl CorpusStats {
    pub fn new() -> Self {
        CorpusStats::default()
    }

    /// Record one inserted document and its token count (sum of term
    /// frequencies after filtering).
    pub fn record_doc(&mut self, doc_id: DocId, len: u64) {
        self.doc_lens.insert(doc_id, len);
        self.doc_count += 1;
    }

    /// Recompute the derived statistics from the recorded lengths.
    pub fn recompute(&mut self) {
        if self.doc_count == 0 {
            self.avg_len = 0.0;
        } else {
            let total: u64 = self.doc_lens.values().sum();
            self.avg_len = total as f64 / self.doc_count as f64;
        }
        self.skip_stride = (self.doc_count as f64).sqrt() as usize;
    }

    /// Token count of a document; 0 for unknown ids.
    pub fn doc_len(&self, doc_id: DocId) -> u64 {
        self.doc_lens.get(&doc_id).copied().unwrap_or(0)
    }

    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    pub fn avg_len(&self) -> f64 {
        self.avg_len
    }

    pub fn skip_stride(&self) -> usize {
        self.skip_stride
    }
}
