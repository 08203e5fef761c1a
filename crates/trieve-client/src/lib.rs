//! Trieve Client - Typed request dispatcher for the Trieve API
//!
//! This crate provides a single generic dispatch pipeline for all Trieve API
//! operations: a caller supplies an endpoint descriptor and a flat parameter
//! bag, and the dispatcher classifies parameters, renders the path template,
//! assembles headers, sends the request, and normalizes the response.
//!
//! # Main Components
//!
//! - **Error Handling**: Structured error types using `thiserror` and `anyhow`
//! - **Configuration**: Client-level settings with environment loading
//! - **Endpoint Registry**: Const descriptors for every API operation
//! - **Dispatch Pipeline**: Classification, templating, headers, transport,
//!   and normalization under `http`
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use trieve_client::{ClientConfig, TrieveClient, Result};
//! use trieve_client::endpoints::GET_CHUNKS_IN_GROUP;
//!
//! async fn example() -> Result<()> {
//!     let config = ClientConfig::new("https://api.trieve.ai")
//!         .with_api_key("tr-key")
//!         .with_organization_id("org-1");
//!     let client = TrieveClient::new(config)?;
//!
//!     let bag = json!({
//!         "groupId": "g1",
//!         "page": 1,
//!         "datasetId": "d1",
//!     })
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//!     let body = client.dispatch(&GET_CHUNKS_IN_GROUP, &bag).await?;
//!     println!("{:?}", body.as_json());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use endpoints::{Endpoint, Method};
pub use error::{Error, Result};
pub use http::{
    cancel_pair, CancelHandle, CancelToken, DispatchOptions, HeaderCallback, ParamBag,
    ResponseBody, TrieveClient,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
