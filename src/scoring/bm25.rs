/// BM25 scorer
///
/// Uses the unsmoothed `ln(N/n)` idf supplied by the index, so a term held
/// by every document contributes exactly zero.
#[derive(Debug, Clone, Copy)]
pub struct Bm25 {
    pub k1: f64, // term frequency saturation
    pub b: f64,  // length normalization strength
}

impl Default for Bm25 {
    fn default() -> Self {
        Bm25 { k1: 2.0, b: 0.75 }
    }
}

impl Bm25 {
    pub fn new(k1: f64, b: f64) -> Self {
        Bm25 { k1, b }
    }

    /// Score one term's contribution to one document.
    pub fn score(&self, tf: f64, idf: f64, doc_len: f64, avg_len: f64) -> f64 {
        let len_part = doc_len / avg_len;
        let numerator = tf * (self.k1 + 1.0);
        let denominator = tf + self.k1 * (1.0 - self.b + self.b * len_part);
        idf * numerator / denominator
    }
}
