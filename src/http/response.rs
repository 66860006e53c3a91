//! Interpretation of registry responses.
//!
//! Every registry response goes through [`interpret_response`], which turns a
//! raw status code, content type and body into either the parsed JSON payload
//! or a single [`NetkiError`].
//!
//! The envelope's `success` flag arrives either as a JSON boolean or as the
//! strings `"true"`/`"false"`, depending on the endpoint. It is normalised
//! here and nowhere else.

use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::{Map, Value};

use super::error::{NetkiError, ServerFailure};

/// An empty JSON object, the payload of a "success with nothing to report".
pub(crate) fn empty_payload() -> Value {
    Value::Object(Map::new())
}

/// Decides whether an exchange succeeded and extracts its payload.
///
/// * `204 No Content` is always a success with an empty object payload.
/// * Any other status requires a JSON content type.
/// * A body reporting `success: false` becomes [`NetkiError::Server`], with
///   the `message` and the `failures[].message` entries aggregated.
pub fn interpret_response(status: StatusCode, content_type: Option<&str>, body: &[u8]) -> Result<Value, NetkiError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(empty_payload());
    }

    let content_type = content_type.unwrap_or_default();
    if !is_json_content_type(content_type) {
        warn!(status = status.as_u16(), content_type = content_type; "Registry response is not JSON");
        return Err(NetkiError::InvalidContentType(content_type.to_string()));
    }

    let payload: Value = serde_json::from_slice(body)?;

    if is_success(&payload) {
        return Ok(payload);
    }

    let failure = server_failure(&payload);
    debug!(
        status = status.as_u16(),
        failures = failure.failures().map_or(0, |f| f.len());
        "Registry reported failure"
    );
    Err(NetkiError::Server(failure))
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("json")
}

/// A missing `success` key counts as success; anything present that is not
/// `true` (boolean or string) counts as failure.
fn is_success(payload: &Value) -> bool {
    match payload.get("success") {
        None => true,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag.trim().eq_ignore_ascii_case("true"),
        Some(_) => false,
    }
}

fn server_failure(payload: &Value) -> ServerFailure {
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let failures = payload.get("failures").and_then(Value::as_array).map(|entries| {
        entries
            .iter()
            .filter_map(|entry| entry.get("message").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    });

    ServerFailure::new(message, failures)
}
