//! Response builders for the API Lambda.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::models::ErrorBody;

/// Message returned for any server-side failure; the cause is only logged.
pub const GENERIC_FAILURE_MESSAGE: &str = "요약 생성 중 오류가 발생했습니다.";

/// Returns a JSON response with the given status code and serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(
        status_code,
        &ErrorBody {
            success: false,
            error: message.to_string(),
        },
    )
}

/// Returns a 500 response with the generic failure message.
#[must_use]
pub fn internal_error() -> Value {
    err_response(500, GENERIC_FAILURE_MESSAGE)
}

/// Returns a 204 response for CORS preflight requests.
#[must_use]
pub fn no_content() -> Value {
    json!({ "statusCode": 204, "body": "" })
}
