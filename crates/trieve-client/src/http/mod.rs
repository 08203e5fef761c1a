//! HTTP dispatch pipeline
//!
//! Every API call flows through the same five stages:
//!
//! 1. Parameter classification ([`params`]) partitions the caller's bag
//!    into path parameters, identity headers, and an optional body.
//! 2. Path templating ([`path`]) renders the endpoint template against the
//!    classified path parameters.
//! 3. Header assembly ([`headers`]) merges content type, bearer auth, and
//!    identity headers.
//! 4. Transport ([`client`]) sends the composed request, racing an optional
//!    cancellation token ([`cancel`]).
//! 5. Normalization ([`normalizer`]) turns the raw response into a success
//!    body or a structured API error.
//!
//! [`diagnostics`] snapshots the composed request and normalized response
//! when the client debug flag is set.

pub mod cancel;
pub mod client;
pub mod diagnostics;
pub mod headers;
pub mod normalizer;
pub mod params;
pub mod path;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::{DispatchOptions, TrieveClient};
pub use normalizer::{HeaderCallback, ResponseBody};
pub use params::{classify, snake_case, ClassifiedParams, ParamBag};
pub use path::render_path;

pub use reqwest::StatusCode;
