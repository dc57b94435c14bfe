//! Response shapes of the enquiry API.
//!
//! The list endpoint has returned both a bare array and a `{ "data": [...] }`
//! envelope; the detail endpoint likewise returns the record bare or wrapped.

use serde_json::Value;

use solace_core::models::inquiry::Inquiry;

use crate::error::InquiryClientError;

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Parse a `GET /enquiry/list` response body.
///
/// Items that do not decode as an [`Inquiry`] (a non-numeric `_id`, an
/// unknown status) are logged and skipped; the rest of the list is kept.
pub fn parse_list(value: Value) -> Result<Vec<Inquiry>, InquiryClientError> {
    match unwrap_data(value) {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(inquiry) => Some(inquiry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed enquiry");
                    None
                }
            })
            .collect()),
        other => Err(InquiryClientError::Payload(format!(
            "expected an array of enquiries, got {}",
            kind(&other)
        ))),
    }
}

/// Parse a `GET /enquiry/{id}` response body.
pub fn parse_detail(value: Value) -> Result<Inquiry, InquiryClientError> {
    match unwrap_data(value) {
        obj @ Value::Object(_) => Ok(serde_json::from_value(obj)?),
        other => Err(InquiryClientError::Payload(format!(
            "expected an enquiry object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
