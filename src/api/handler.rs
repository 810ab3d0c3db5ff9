//! API Lambda handler for the summarize endpoint.
//!
//! This module handles:
//! - Method filtering (POST only, OPTIONS preflight)
//! - Body extraction and JSON decoding
//! - Content validation against the configured length bounds
//! - Summarization and response building

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::errors::SummaryError;
use crate::summarizer;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails in practice: configuration and request problems are both
/// reported as HTTP responses.
#[tracing::instrument(level = "info", skip(event), fields(correlation_id))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("correlation_id", correlation_id.as_str());

    Ok(respond(AppConfig::from_env(), &event.payload))
}

/// Answers a proxy event given the outcome of loading configuration.
///
/// A configuration failure becomes a 500 with the generic failure message.
#[must_use]
pub fn respond(config: Result<AppConfig, String>, payload: &Value) -> Value {
    match config {
        Ok(config) => handle_request(&config, payload),
        Err(e) => error_response(&SummaryError::ConfigError(e)),
    }
}

/// Turns one API Gateway proxy event into a proxy response.
#[must_use]
pub fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    match parsing::request_method(payload) {
        Some("OPTIONS") => return helpers::no_content(),
        Some(method) if !method.eq_ignore_ascii_case("POST") => {
            warn!(method = %method, "Rejected non-POST request");
            return error_response(&SummaryError::MethodNotAllowed(method.to_string()));
        }
        _ => {}
    }

    match summarize_payload(config, payload) {
        Ok(response) => helpers::json_response(200, &response),
        Err(e) => error_response(&e),
    }
}

fn summarize_payload(
    config: &AppConfig,
    payload: &Value,
) -> Result<SummarizeResponse, SummaryError> {
    let body = parsing::extract_body(payload)?;
    let request = parsing::parse_summarize_request(&body)?;
    let content = validate_content(config, &request)?;

    info!(
        title = request.title.as_deref().unwrap_or(""),
        chars = content.chars().count(),
        "Summarizing content"
    );

    let report = summarizer::analyze(content);
    info!(outcome = ?report.outcome, "Summary generated");

    Ok(SummarizeResponse::new(content, report.summary))
}

/// Checks `content` is a string whose length lies within the configured bounds.
///
/// # Errors
///
/// Returns `InvalidRequest` if `content` is missing or not a string, and
/// `ContentTooShort`/`ContentTooLong` if it is out of bounds.
pub fn validate_content<'a>(
    config: &AppConfig,
    request: &'a SummarizeRequest,
) -> Result<&'a str, SummaryError> {
    let Some(content) = request.content.as_ref().and_then(Value::as_str) else {
        return Err(SummaryError::InvalidRequest(
            "content must be a string".to_string(),
        ));
    };

    let trimmed_len = content.trim().chars().count();
    if trimmed_len < config.min_content_chars {
        return Err(SummaryError::ContentTooShort {
            min: config.min_content_chars,
            actual: trimmed_len,
        });
    }

    let raw_len = content.chars().count();
    if raw_len > config.max_content_chars {
        return Err(SummaryError::ContentTooLong {
            max: config.max_content_chars,
            actual: raw_len,
        });
    }

    Ok(content)
}

fn error_response(err: &SummaryError) -> Value {
    if err.is_client_error() {
        warn!("Rejected summarize request: {}", err);
        helpers::err_response(err.status_code(), &err.to_string())
    } else {
        error!("Failed to summarize request: {}", err);
        helpers::internal_error()
    }
}
