//! Response envelope unwrapping.
//!
//! The Coddie API has answered with three shapes over time:
//!
//! ```text
//! {"success": true, "data": [...]}   wrapped
//! {"data": [...]}                    wrapped, no flag
//! [...]  /  {...}                    bare payload
//! ```
//!
//! [`unwrap`] reduces all of them to the payload. An explicit
//! `"success": false` is rejected; anything else that fails to deserialize
//! into the expected entity type is reported by the caller as a decode error.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("API reported failure: {0}")]
    Rejected(String),
}

/// Extract the payload from a response body.
pub fn unwrap(body: Value) -> Result<Value, EnvelopeError> {
    let Value::Object(mut object) = body else {
        return Ok(body);
    };

    if object.get("success") == Some(&Value::Bool(false)) {
        return Err(EnvelopeError::Rejected(failure_message(&object)));
    }

    match object.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(object)),
    }
}

fn failure_message(object: &Map<String, Value>) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| match object.get(*key) {
            Some(Value::String(msg)) => Some(msg.clone()),
            Some(Value::Object(inner)) => inner
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| "no error message".to_string())
}
