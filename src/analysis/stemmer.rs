use std::borrow::Cow;
use crate::core::error::Result;

pub use rust_stemmers::Algorithm;

/// Stemmer capability consumed by the analyzer. Any deterministic stemmer
/// is acceptable; input and output are UTF-8.
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its canonical stem.
    fn stem<'a>(&self, word: &'a str) -> Result<Cow<'a, str>>;

    fn name(&self) -> &str;
}

/// Snowball stemmer backed by `rust_stemmers`
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            stemmer: rust_stemmers::Stemmer::create(algorithm),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Result<Cow<'a, str>> {
        Ok(self.stemmer.stem(word))
    }

    fn name(&self) -> &str {
        "snowball"
    }
}

/// Pass-through stemmer for corpora that need no stemming
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem<'a>(&self, word: &'a str) -> Result<Cow<'a, str>> {
        Ok(Cow::Borrowed(word))
    }

    fn name(&self) -> &str {
        "identity"
    }
}
