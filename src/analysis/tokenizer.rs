use ahash::AHashMap;
use regex::Regex;
use crate::analysis::stemmer::Stemmer;
use crate::core::error::Result;

/// Sanitizing whitespace tokenizer.
///
/// Keeps ASCII letters, Cyrillic letters (including `ё`), digits, spaces and
/// hyphens; everything else is stripped before lowercasing and splitting.
/// Ingestion drops tokens shorter than `min_token_len` characters; query
/// tokenization only drops empty tokens, so short query words can still hit
/// whatever stems exist.
pub struct Tokenizer {
    strip: Regex,
    spaces: Regex,
    min_token_len: usize,
}

impl Tokenizer {
    pub fn new(min_token_len: usize) -> Result<Self> {
        Ok(Tokenizer {
            strip: Regex::new(r"(?i)[^a-zа-яё0-9 \-]+")?,
            spaces: Regex::new(r"[ \t]+")?,
            min_token_len,
        })
    }

    fn normalize(&self, text: &str) -> String {
        let stripped = self.strip.replace_all(text, "");
        let collapsed = self.spaces.replace_all(&stripped, " ");
        collapsed.to_lowercase()
    }

    /// Tokenize a document into stem → occurrence count.
    ///
    /// Words that fail to stem are logged and skipped; the document itself
    /// is never rejected.
    pub fn index_terms(&self, text: &str, stemmer: &dyn Stemmer) -> AHashMap<String, u32> {
        let mut counts = AHashMap::new();

        for word in self.normalize(text).split(' ') {
            if word.chars().count() < self.min_token_len {
                continue;
            }
            match stemmer.stem(word) {
                Ok(stem) => *counts.entry(stem.into_owned()).or_insert(0) += 1,
                Err(err) => log::warn!("Stemming error on {:?}: {}", word, err),
            }
        }

        counts
    }

    /// Tokenize a query into an ordered stem list. Duplicate words produce
    /// duplicate terms.
    pub fn query_terms(&self, text: &str, stemmer: &dyn Stemmer) -> Vec<String> {
        let mut terms = Vec::new();

        for word in self.normalize(text).split(' ') {
            if word.is_empty() {
                continue;
            }
            match stemmer.stem(word) {
                Ok(stem) => terms.push(stem.into_owned()),
                Err(err) => log::warn!("Stemming error on {:?}: {}", word, err),
            }
        }

        terms
    }
}
