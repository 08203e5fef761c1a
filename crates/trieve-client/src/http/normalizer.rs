//! Response normalization for dispatch calls
//!
//! Success responses are read as raw text and parsed as JSON when possible,
//! falling back to the text itself. Failure responses are converted into a
//! structured API error carrying everything needed to reconstruct the call.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// Callback invoked with the raw response headers on success
pub type HeaderCallback = Box<dyn FnOnce(&HeaderMap) + Send>;

/// Normalized body of a successful dispatch call
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body parsed as JSON
    Json(Value),
    /// Body kept as raw text because it did not parse as JSON
    Text(String),
}

impl ResponseBody {
    /// Parse raw response text, falling back to the text itself
    ///
    /// A decode failure on a success response is not an error. Some
    /// endpoints legitimately return plain text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    /// The parsed JSON value, when the body parsed as JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Deserialize the JSON branch into a caller-chosen type
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ResponseBody::Json(value) => serde_json::from_value(value).map_err(Error::from),
            ResponseBody::Text(text) => Err(Error::HttpRequest {
                message: format!("response body is not JSON: {}", text),
                source: None,
            }),
        }
    }
}

/// Normalize one transport response into the success or failure shape
///
/// Non-2xx statuses become [`Error::Api`] with the raw response text, the
/// serialized request body, and the method plus path of the failing call.
/// On success the header callback fires before the body is returned.
pub async fn normalize_response(
    response: reqwest::Response,
    method: &str,
    path: &str,
    request_body: Option<&Value>,
    on_headers: Option<HeaderCallback>,
) -> Result<ResponseBody> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            body,
            request_body: request_body.map(|v| v.to_string()).unwrap_or_default(),
            method: method.to_string(),
            path: path.to_string(),
        });
    }

    let headers = response.headers().clone();
    let text = response.text().await.map_err(|e| Error::HttpRequest {
        message: format!("failed to read response body: {}", e),
        source: Some(Box::new(e)),
    })?;

    if let Some(callback) = on_headers {
        callback(&headers);
    }

    Ok(ResponseBody::from_text(text))
}
