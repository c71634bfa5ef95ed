/// Index tuning parameters
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Tokens shorter than this many characters are dropped at ingestion.
    /// Query tokenization always keeps everything non-empty.
    pub min_token_len: usize,

    // BM25 parameters
    pub k1: f64, // term frequency saturation
    pub b: f64,  // length normalization strength
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            min_token_len: 3,
            k1: 2.0,
            b: 0.75,
        }
    }
}
