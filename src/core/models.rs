use serde::{Deserialize, Serialize};

/// Body of a summarize request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizeRequest {
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub word_count: usize,
    pub char_count: usize,
}

impl SummarizeResponse {
    /// Builds a successful response; counts are taken from the raw content.
    #[must_use]
    pub fn new(content: &str, summary: String) -> Self {
        Self {
            success: true,
            summary,
            word_count: content.split(' ').count(),
            char_count: content.chars().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}
