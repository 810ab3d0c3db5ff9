//! Blog summary - extractive summaries for Markdown blog posts.
//!
//! This crate backs the blog's "AI summarize" button. The summary is built
//! locally with a heuristic extractive pipeline, without any external model:
//! 1. Markdown is stripped and whitespace collapsed
//! 2. The text is split into candidate sentences
//! 3. Word frequencies give the top keywords
//! 4. Sentences are ranked by keyword overlap, position and length
//! 5. The best few are joined and capped at 150 characters
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (behind API Gateway) for the HTTP endpoint
//! - regex + once_cell for Markdown normalization and tokenization
//! - serde/serde_json for request and response bodies
//! - tracing for structured logs
//!
//! # Example
//!
//! ```
//! use blog_summary::summarizer::generate_summary;
//!
//! let summary = generate_summary(
//!     "# Release notes\n\n\
//!      This release rewrites the comment moderation queue from scratch. \
//!      Moderators can now approve comments in bulk. \
//!      Spam detection also runs before a comment is stored.",
//! );
//! assert!(!summary.is_empty());
//! assert!(!summary.contains('#'));
//! ```
pub mod api;
pub mod core;
pub mod errors;
pub mod summarizer;

pub use errors::SummaryError;
pub use summarizer::{analyze, generate_summary};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler. Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// blog_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
