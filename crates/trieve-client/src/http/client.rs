//! Typed request dispatcher orchestrating the full pipeline
//!
//! One dispatch call runs classification, path templating, header assembly,
//! transport, and response normalization in order. Every endpoint goes
//! through the same path; only the endpoint descriptor and parameter bag
//! vary between calls.

use reqwest::Client as ReqwestClient;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::http::cancel::CancelToken;
use crate::http::diagnostics::{RequestRecord, ResponseRecord};
use crate::http::headers::build_headers;
use crate::http::normalizer::{normalize_response, HeaderCallback, ResponseBody};
use crate::http::params::{classify, ParamBag};
use crate::http::path::render_path;
use crate::{Error, Result};

/// Per-call options threaded into one dispatch
#[derive(Default)]
pub struct DispatchOptions {
    /// Cooperative cancellation token for this call
    pub cancel: Option<CancelToken>,
    /// Invoked with the raw response headers on success
    pub on_headers: Option<HeaderCallback>,
}

impl DispatchOptions {
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_header_callback(mut self, callback: HeaderCallback) -> Self {
        self.on_headers = Some(callback);
        self
    }
}

/// Client dispatching typed endpoint calls against one deployment
pub struct TrieveClient {
    client: ReqwestClient,
    config: ClientConfig,
}

impl TrieveClient {
    /// Create a client from a validated configuration
    ///
    /// Cookie persistence is disabled when the configuration asks for
    /// credentials to be omitted from requests.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = ReqwestClient::builder()
            .cookie_store(!config.omit_credentials)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {}", e),
                source: Some(anyhow::anyhow!("{}", e)),
            })?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch one endpoint call with default options
    pub async fn dispatch(&self, endpoint: &Endpoint, bag: &ParamBag) -> Result<ResponseBody> {
        self.dispatch_with(endpoint, bag, DispatchOptions::default())
            .await
    }

    /// Dispatch one endpoint call with per-call options
    pub async fn dispatch_with(
        &self,
        endpoint: &Endpoint,
        bag: &ParamBag,
        options: DispatchOptions,
    ) -> Result<ResponseBody> {
        let classified = classify(bag, endpoint.path, self.config.organization_id.as_deref());
        let path = render_path(endpoint.path, &classified.path_params)?;
        let headers = build_headers(&self.config, &classified.headers);

        let url = format!("{}{}", self.config.base_url, path);
        Url::parse(&url).map_err(|e| Error::Configuration {
            message: format!("composed URL {} is not valid: {}", url, e),
            source: Some(anyhow::anyhow!("{}", e)),
        })?;

        let method = endpoint.method;
        let mut request = self.client.request(method.to_reqwest(), &url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &classified.body {
            request = request.json(body);
        }

        if self.config.debug {
            RequestRecord::new(&url, method.as_str(), &headers, classified.body.clone()).emit();
        }

        let response = match options.cancel {
            Some(mut token) => {
                if token.is_cancelled() {
                    return Err(Error::Cancelled);
                }
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(Error::Cancelled),
                    sent = request.send() => sent.map_err(from_send_error)?,
                }
            }
            None => request.send().await.map_err(from_send_error)?,
        };

        let status = response.status().as_u16();
        let result = normalize_response(
            response,
            method.as_str(),
            &path,
            classified.body.as_ref(),
            options.on_headers,
        )
        .await;

        if self.config.debug {
            if let Ok(body) = &result {
                ResponseRecord::new(status, body).emit();
            }
        }

        result
    }
}

fn from_send_error(e: reqwest::Error) -> Error {
    Error::HttpRequest {
        message: format!("request failed: {}", e),
        source: Some(Box::new(e)),
    }
}
