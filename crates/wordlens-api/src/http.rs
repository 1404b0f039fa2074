//! Response body handling for the dictionary endpoint.
//!
//! The endpoint answers "no definitions" with a 404 and a JSON object, so
//! the status code is never used for classification. The body shape decides:
//! a JSON sequence is a hit, any other JSON value is a miss, and a body that
//! is not JSON at all is an error.

use serde_json::Value;
use wordlens_core::{DictionaryEntry, Query};

use crate::LookupOutcome;
use crate::error::ApiError;

/// Longest body excerpt carried in a parse error.
const BODY_EXCERPT_LEN: usize = 120;

/// Read a response body as JSON regardless of its status code.
pub async fn read_payload(resp: reqwest::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "dictionary response");

    serde_json::from_str(&body).map_err(|e| {
        ApiError::Parse(format!(
            "status {} body is not JSON ({e}): {}",
            status.as_u16(),
            excerpt(&body)
        ))
    })
}

/// Turn a parsed payload into a lookup outcome.
pub fn classify(query: &Query, payload: Value) -> Result<LookupOutcome, ApiError> {
    let Value::Array(items) = payload else {
        let title = payload
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Ok(LookupOutcome::NotFound { title });
    };

    let first = items
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::EmptyResult(query.to_string()))?;
    let entry: DictionaryEntry = serde_json::from_value(first)
        .map_err(|e| ApiError::Parse(format!("unexpected entry shape: {e}")))?;
    Ok(LookupOutcome::Found(entry))
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
