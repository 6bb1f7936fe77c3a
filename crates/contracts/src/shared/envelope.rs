use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response wrapper used by part of the report API.
///
/// Endpoints are inconsistent: some return a bare JSON array, others wrap the
/// rows as `{success, data: [...], message?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalizes a report API body into a typed row list.
///
/// Accepts either a bare array or an envelope whose `data` field is an array.
/// Any other shape (null, scalar, object without `data`, row that fails to
/// deserialize) yields `None`; callers log and substitute an empty list so the
/// UI lands in a defined empty state.
pub fn parse_rows<T: DeserializeOwned>(body: Value) -> Option<Vec<T>> {
    if body.is_array() {
        return serde_json::from_value(body).ok();
    }
    let envelope: ApiEnvelope<Vec<T>> = serde_json::from_value(body).ok()?;
    Some(envelope.data)
}
