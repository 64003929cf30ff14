//! Build a snapshot from the bundled sample corpus and print what
//! survived. Run with `cargo run --example corpus_demo -p bukurec-corpus`.

use corpus::{build_snapshot, Book, CorpusConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let books: Vec<Book> = serde_json::from_str(include_str!("sample_books.json"))?;
    let snapshot = build_snapshot(&books, &CorpusConfig::default())?;

    println!("snapshot fingerprint: {}", snapshot.fingerprint);
    println!("entries: {}", snapshot.len());
    for entry in &snapshot.entries {
        println!(
            "  {}  {} [{}]",
            entry.book.id,
            entry.book.title,
            entry.genre_labels.join(", ")
        );
    }
    if !snapshot.excluded.is_empty() {
        println!("excluded: {}", snapshot.excluded.len());
        for rejected in &snapshot.excluded {
            println!("  #{} {} ({})", rejected.index, rejected.id, rejected.reason);
        }
    }

    Ok(())
}
