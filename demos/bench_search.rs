/// Full-text search benchmark over a JSON news corpus.
///
/// Loads `test.txt` (or the path given as the first argument), bulk-builds
/// the inverted index, then runs the same query 100 times and reports
/// indexing time, per-query latency and the average in microseconds.

use std::time::Instant;
use newsdex::analysis::stemmer::{Algorithm, SnowballStemmer};
use newsdex::corpus::loader::Corpus;
use newsdex::index::inverted::InvertedIndex;

const DEFAULT_CORPUS: &str = "test.txt";
const QUERY: &str = "australian travellers";
const RUNS: u32 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CORPUS.to_string());

    let stemmer = SnowballStemmer::new(Algorithm::English);
    let mut index = InvertedIndex::new(Box::new(stemmer))?;
    println!("{}", index);

    let corpus = Corpus::load(&path)?;
    println!("Loaded {} documents from {}", corpus.len(), path);

    let start = Instant::now();
    corpus.index_into(&mut index);
    println!(
        "Indexing finished. Terms={}, skip stride={}",
        index.term_count(),
        index.skip_stride()
    );
    println!("Indexing time: {:?}", start.elapsed());

    let mut total_micros = 0.0;
    for run in 0..RUNS {
        let start = Instant::now();
        let results = index.search(QUERY);
        let elapsed = start.elapsed();
        total_micros += elapsed.as_secs_f64() * 1e6;
        println!("Search time: {:?}", elapsed);
        if run == RUNS - 1 {
            print!("Relevant documents: ");
            for hit in results.iter() {
                print!("{} ", hit);
            }
            println!();
        }
    }
    println!("AVG Search time: {:.2} microseconds", total_micros / RUNS as f64);

    Ok(())
}
