use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::SummarizeRequest;
use crate::errors::SummaryError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway v2 (`requestContext.http.method`) or v1
/// (`httpMethod`) proxy event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Returns the request body as text, base64-decoding it when flagged.
pub fn extract_body(payload: &Value) -> Result<String, SummaryError> {
    let Some(body) = payload.get("body") else {
        return Err(SummaryError::DecodeError("missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(SummaryError::DecodeError("body is not a string".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        let bytes = STANDARD.decode(body_str)?;
        let text = std::str::from_utf8(&bytes)?;
        return Ok(text.to_string());
    }

    Ok(body_str.to_string())
}

/// Parses a JSON body into a [`SummarizeRequest`]. The body must be an object.
pub fn parse_summarize_request(body: &str) -> Result<SummarizeRequest, SummaryError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(SummaryError::DecodeError(
            "body is not a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
