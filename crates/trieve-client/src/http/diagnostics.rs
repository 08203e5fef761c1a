//! Debug records for composed requests and normalized responses
//!
//! When the client debug flag is set, the fully composed request is emitted
//! before sending and the normalized response after receiving. Records go
//! through `tracing` at debug level under the `trieve_client::dispatch`
//! target.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::http::normalizer::ResponseBody;

/// Snapshot of a fully composed request, taken just before sending
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
    pub timestamp: String,
}

impl RequestRecord {
    pub fn new(
        url: &str,
        method: &str,
        headers: &HashMap<String, String>,
        body: Option<Value>,
    ) -> Self {
        Self {
            url: url.to_string(),
            method: method.to_string(),
            headers: headers.clone(),
            body,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn emit(&self) {
        tracing::debug!(
            target: "trieve_client::dispatch",
            url = %self.url,
            method = %self.method,
            headers = ?self.headers,
            body = ?self.body,
            "sending request"
        );
    }
}

/// Snapshot of a normalized response, taken after receiving
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRecord {
    pub status: u16,
    pub body: String,
    pub timestamp: String,
}

impl ResponseRecord {
    pub fn new(status: u16, body: &ResponseBody) -> Self {
        let rendered = match body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
        };
        Self {
            status,
            body: rendered,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn emit(&self) {
        tracing::debug!(
            target: "trieve_client::dispatch",
            status = self.status,
            body = %self.body,
            "received response"
        );
    }
}
