// Local entry point: reads a post body on stdin and prints the API response body.

use anyhow::{Context, Result};
use blog_summary::core::models::SummarizeResponse;
use blog_summary::summarizer;
use std::io::Read;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read content from stdin")?;

    let report = summarizer::analyze(&content);
    info!(
        outcome = ?report.outcome,
        keywords = ?report.keyword_words(),
        "Summary generated"
    );

    let response = SummarizeResponse::new(&content, report.summary);
    let body = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
    println!("{body}");
    Ok(())
}
