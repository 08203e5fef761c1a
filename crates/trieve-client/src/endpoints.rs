//! Endpoint descriptors for the Trieve API surface
//!
//! Each API operation is identified by an [`Endpoint`]: an opaque path
//! template with `{snake_case}` placeholders plus an HTTP method token.
//! Descriptors are const-constructible and immutable; the registry replaces
//! the per-resource wrapper layer with data the generic dispatcher consumes.

use crate::{Error, Result};

/// HTTP method token accepted by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Parse a method token, case-insensitively
    pub fn parse(token: &str) -> Result<Self> {
        match token.to_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "delete" => Ok(Method::Delete),
            "patch" => Ok(Method::Patch),
            _ => Err(Error::HttpRequest {
                message: format!("unsupported HTTP method: {}", token),
                source: None,
            }),
        }
    }

    /// Lowercase wire token for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Patch => "patch",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One API operation: a path template and its HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Registry name of the operation
    pub name: &'static str,
    /// Path template with `{snake_case}` placeholders
    pub path: &'static str,
    /// HTTP method token
    pub method: Method,
}

impl Endpoint {
    /// Create a descriptor; intended for const registry entries
    pub const fn new(name: &'static str, path: &'static str, method: Method) -> Self {
        Self { name, path, method }
    }

    /// Look up a registered endpoint by name
    pub fn find(name: &str) -> Option<&'static Endpoint> {
        REGISTRY.iter().find(|endpoint| endpoint.name == name)
    }
}

pub const SEARCH_CHUNKS: Endpoint = Endpoint::new("search_chunks", "/api/chunk/search", Method::Post);
pub const AUTOCOMPLETE: Endpoint = Endpoint::new("autocomplete", "/api/chunk/autocomplete", Method::Post);
pub const CREATE_CHUNK: Endpoint = Endpoint::new("create_chunk", "/api/chunk", Method::Post);
pub const UPDATE_CHUNK: Endpoint = Endpoint::new("update_chunk", "/api/chunk", Method::Put);
pub const GET_CHUNK_BY_ID: Endpoint =
    Endpoint::new("get_chunk_by_id", "/api/chunk/{chunk_id}", Method::Get);
pub const GET_CHUNK_BY_TRACKING_ID: Endpoint = Endpoint::new(
    "get_chunk_by_tracking_id",
    "/api/chunk/tracking_id/{tracking_id}",
    Method::Get,
);
pub const DELETE_CHUNK: Endpoint =
    Endpoint::new("delete_chunk", "/api/chunk/{chunk_id}", Method::Delete);
pub const SCROLL_CHUNKS: Endpoint =
    Endpoint::new("scroll_chunks", "/api/chunks/scroll", Method::Post);
pub const COUNT_CHUNKS: Endpoint =
    Endpoint::new("count_chunks", "/api/chunk/count", Method::Post);
pub const CREATE_CHUNK_GROUP: Endpoint =
    Endpoint::new("create_chunk_group", "/api/chunk_group", Method::Post);
pub const UPDATE_CHUNK_GROUP: Endpoint =
    Endpoint::new("update_chunk_group", "/api/chunk_group", Method::Put);
pub const DELETE_CHUNK_GROUP: Endpoint = Endpoint::new(
    "delete_chunk_group",
    "/api/chunk_group/{group_id}",
    Method::Delete,
);
pub const GET_CHUNKS_IN_GROUP: Endpoint = Endpoint::new(
    "get_chunks_in_group",
    "/api/chunk_group/{group_id}/{page}",
    Method::Get,
);
pub const GET_GROUPS_FOR_DATASET: Endpoint = Endpoint::new(
    "get_groups_for_dataset",
    "/api/dataset/groups/{dataset_id}/{page}",
    Method::Get,
);
pub const SEARCH_OVER_GROUPS: Endpoint = Endpoint::new(
    "search_over_groups",
    "/api/chunk_group/group_oriented_search",
    Method::Post,
);
pub const GET_DATASET_USAGE: Endpoint = Endpoint::new(
    "get_dataset_usage",
    "/api/dataset/usage/{dataset_id}",
    Method::Get,
);

static REGISTRY: &[Endpoint] = &[
    SEARCH_CHUNKS,
    AUTOCOMPLETE,
    CREATE_CHUNK,
    UPDATE_CHUNK,
    GET_CHUNK_BY_ID,
    GET_CHUNK_BY_TRACKING_ID,
    DELETE_CHUNK,
    SCROLL_CHUNKS,
    COUNT_CHUNKS,
    CREATE_CHUNK_GROUP,
    UPDATE_CHUNK_GROUP,
    DELETE_CHUNK_GROUP,
    GET_CHUNKS_IN_GROUP,
    GET_GROUPS_FOR_DATASET,
    SEARCH_OVER_GROUPS,
    GET_DATASET_USAGE,
];
