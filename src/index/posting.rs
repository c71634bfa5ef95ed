use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// One document's relationship to one term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,
}

impl Posting {
    pub fn new(doc_id: DocId, term_freq: u32) -> Self {
        Posting { doc_id, term_freq }
    }
}

/// Posting list for a term.
/// Note: sorted by doc_id only after the index has been finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    entries: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList::default()
    }

    pub fn push(&mut self, posting: Posting) {
        self.entries.push(posting);
    }

    pub fn sort_by_doc_id(&mut self) {
        self.entries.sort_unstable_by_key(|p| p.doc_id);
    }

    /// Number of documents containing this term (document frequency)
    pub fn doc_freq(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Posting] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.entries.iter()
    }
}

impl From<Vec<Posting>> for PostingList {
    fn from(entries: Vec<Posting>) -> Self {
        PostingList { entries }
    }
}
