pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod corpus;

/*
┌──────────────────────────────────────────────────────────────┐
│                     NEWSDEX ARCHITECTURE                     │
└──────────────────────────────────────────────────────────────┘

  corpus::loader        JSON news corpus → pages fed to the index
        │
        ▼
  index::inverted       InvertedIndex
        │                 postings:  term → PostingList (sorted on finalize)
        │                 term_docs: term → doc → tf
        │                 stats:     doc lengths, avg_len, skip_stride
        │
        ├── analysis     Analyzer = Tokenizer (sanitize/lowercase/split)
        │                          + Stemmer capability (snowball/identity)
        │
        ├── search       QueryExecutor: tokenize → fold skip-pointer
        │                intersection → BM25 → sort descending
        │
        └── scoring      Bm25 (k1 = 2.0, b = 0.75, unsmoothed idf)

Lifecycle: bulk insert → finalize() → search, or eager insert → search.
*/
