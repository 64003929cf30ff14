use std::error::Error;

use bukurec::{RecommendRequest, sample_corpus_demo};

fn main() -> Result<(), Box<dyn Error>> {
    let request = RecommendRequest::by_title("kucing").with_top_n(3);

    let response = sample_corpus_demo(&request)?;

    println!("target: {} ({})", response.target.title, response.target.id);
    for hit in &response.recommendations {
        println!("  {:.4}  {} ({})", hit.score, hit.book.title, hit.book.id);
    }

    Ok(())
}
