//! Parameter classification for dispatch calls
//!
//! Inspects the caller-supplied parameter bag and partitions it into path
//! parameters, identity headers, and an optional body payload, without
//! mutating the input. Keys that match none of the fixed rules are silently
//! ignored for transport purposes.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Flat mapping of camelCase keys to call-time values
pub type ParamBag = Map<String, Value>;

/// Bag key carrying the dataset id
pub const DATASET_ID_KEY: &str = "datasetId";
/// Bag key carrying the organization id
pub const ORGANIZATION_ID_KEY: &str = "organizationId";
/// Bag key carrying the API version
pub const API_VERSION_KEY: &str = "xApiVersion";
/// Bag key carrying the request body payload
pub const BODY_KEY: &str = "data";

/// Wire header for the dataset id
pub const DATASET_HEADER: &str = "TR-Dataset";
/// Wire header for the organization id
pub const ORGANIZATION_HEADER: &str = "TR-Organization";
/// Wire header for the API version
pub const API_VERSION_HEADER: &str = "X-API-VERSION";

/// Classified view of one parameter bag
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassifiedParams {
    /// snake_case placeholder name to rendered value
    pub path_params: HashMap<String, String>,
    /// Fixed identity header names to their per-call values
    pub headers: HashMap<&'static str, String>,
    /// Body payload taken from the `data` key, when it is an object
    pub body: Option<Value>,
}

/// Convert a camelCase key to its snake_case wire form
///
/// Inserts `_` before each ASCII uppercase letter and lowercases it, e.g.
/// `groupTrackingId` becomes `group_tracking_id`. Idempotent: a key already
/// in snake_case passes through unchanged.
pub fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Partition a parameter bag against a path template
///
/// A key becomes a path parameter iff its snake_case placeholder occurs in
/// the template and its value is a string or number. A key becomes a header
/// iff it is one of the three recognized identity keys with a string value.
/// The same key may satisfy both rules. When the bag carries no explicit
/// organization id, `default_organization` is injected as `TR-Organization`;
/// the dataset id has no such fallback.
pub fn classify(
    bag: &ParamBag,
    template: &str,
    default_organization: Option<&str>,
) -> ClassifiedParams {
    let mut classified = ClassifiedParams::default();

    for (key, value) in bag {
        let wire_name = snake_case(key);
        let placeholder = format!("{{{}}}", wire_name);
        if template.contains(&placeholder) {
            if let Some(rendered) = render_scalar(value) {
                classified.path_params.insert(wire_name, rendered);
            }
        }

        if let Some(header) = identity_header(key) {
            if let Some(text) = value.as_str() {
                classified.headers.insert(header, text.to_string());
            }
        }

        if key == BODY_KEY && value.is_object() {
            classified.body = Some(value.clone());
        }
    }

    if !classified.headers.contains_key(ORGANIZATION_HEADER) {
        if let Some(organization) = default_organization {
            classified
                .headers
                .insert(ORGANIZATION_HEADER, organization.to_string());
        }
    }

    classified
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn identity_header(key: &str) -> Option<&'static str> {
    match key {
        DATASET_ID_KEY => Some(DATASET_HEADER),
        ORGANIZATION_ID_KEY => Some(ORGANIZATION_HEADER),
        API_VERSION_KEY => Some(API_VERSION_HEADER),
        _ => None,
    }
}
