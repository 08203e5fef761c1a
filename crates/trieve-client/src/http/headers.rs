//! Header assembly for dispatch calls
//!
//! Starts from the JSON content type, adds the bearer line when the client
//! holds a non-empty API key, then merges the classified identity headers.
//! Per-call values win over client-level defaults; the organization-id
//! default was already resolved during classification.

use std::collections::HashMap;

use crate::config::ClientConfig;

/// Name of the content-type header
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Name of the authorization header
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Content type sent on every dispatch call
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the full header set for one dispatch call
pub fn build_headers(
    config: &ClientConfig,
    classified: &HashMap<&'static str, String>,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string());

    if let Some(api_key) = config.api_key.as_deref() {
        if !api_key.is_empty() {
            headers.insert(
                AUTHORIZATION_HEADER.to_string(),
                format!("Bearer {}", api_key),
            );
        }
    }

    for (name, value) in classified {
        headers.insert((*name).to_string(), value.clone());
    }

    headers
}
