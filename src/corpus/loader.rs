use serde::{Serialize, Deserialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;

/// One news page of the benchmark corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub text: String,
}

impl Page {
    /// Text fed to the index: title and body joined by a space.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}

/// JSON corpus of shape `{"docs": [{"id", "title", "text"}, …]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub docs: Vec<Page>,
}

impl Corpus {
    pub fn load(path: impl AsRef<Path>) -> Result<Corpus> {
        let file = File::open(path)?;
        Corpus::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Corpus> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Bulk-insert every page and finalize the index.
    pub fn index_into(&self, index: &mut InvertedIndex) {
        for page in &self.docs {
            index.insert(DocId(page.id), &page.full_text(), false);
        }
        index.finalize();
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
