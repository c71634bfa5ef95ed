use ahash::AHashMap;
use crate::analysis::stemmer::{Algorithm, SnowballStemmer, Stemmer};
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::IndexConfig;
use crate::core::error::Result;

/// Text analysis pipeline: tokenizer + stemmer
pub struct Analyzer {
    tokenizer: Tokenizer,
    stemmer: Box<dyn Stemmer>,
}

impl Analyzer {
    pub fn new(stemmer: Box<dyn Stemmer>, min_token_len: usize) -> Result<Self> {
        Ok(Analyzer {
            tokenizer: Tokenizer::new(min_token_len)?,
            stemmer,
        })
    }

    /// Snowball-stemmed analyzer for English corpora
    pub fn standard_english() -> Result<Self> {
        let config = IndexConfig::default();
        Analyzer::new(
            Box::new(SnowballStemmer::new(Algorithm::English)),
            config.min_token_len,
        )
    }

    /// Snowball-stemmed analyzer for Russian corpora
    pub fn standard_russian() -> Result<Self> {
        let config = IndexConfig::default();
        Analyzer::new(
            Box::new(SnowballStemmer::new(Algorithm::Russian)),
            config.min_token_len,
        )
    }

    pub fn index_terms(&self, text: &str) -> AHashMap<String, u32> {
        self.tokenizer.index_terms(text, self.stemmer.as_ref())
    }

    pub fn query_terms(&self, text: &str) -> Vec<String> {
        self.tokenizer.query_terms(text, self.stemmer.as_ref())
    }

    pub fn stemmer_name(&self) -> &str {
        self.stemmer.name()
    }
}
