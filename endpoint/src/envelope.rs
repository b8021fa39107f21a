//! JSON:API-style envelopes wrapping everything the hub sends to a client.

use log::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope: whatever the endpoint produced, under a `data` key.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse {
    pub data: Value,
}

/// One error in the JSON:API format. `status` is the decimal string form of
/// the HTTP status code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub status: String,
    pub title: String,
    pub detail: String,
}

/// Error envelope. The shape allows several errors, but the hub only ever
/// emits one at a time.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

// Last-resort body for when serializing the error envelope itself fails.
const ENCODE_ERROR_FALLBACK: &str = r#"{"errors":[{"status":"500","title":"Internal Server Error","detail":"error encoding error response"}]}"#;

/// Wraps one chunk of endpoint output in the success envelope.
///
/// The chunk is auto-detected: if it parses as JSON it is embedded as-is in
/// the `data` field, otherwise its literal (lossy UTF-8) string value is.
/// An empty chunk therefore yields `{"data":""}`.
pub fn encode_success(chunk: &[u8]) -> Result<String, serde_json::Error> {
    let data = match serde_json::from_slice::<Value>(chunk) {
        Ok(value) => value,
        Err(_) => Value::String(String::from_utf8_lossy(chunk).into_owned()),
    };

    serde_json::to_string(&DataResponse { data })
}

/// Renders the error envelope for `status`/`title`/`detail`.
///
/// Infallible at the call site: if serializing the envelope fails (it should
/// not, the fields are plain strings) the failure is logged and a canned
/// internal-error body is returned instead of partial output.
pub fn encode_error(status: u16, title: &str, detail: &str) -> String {
    let response = ErrorResponse {
        errors: vec![ApiError {
            status: status.to_string(),
            title: title.to_owned(),
            detail: detail.to_owned(),
        }],
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        error!("Error encoding error response: {e}");
        ENCODE_ERROR_FALLBACK.to_owned()
    })
}
