//! HTTP client utilities for the Mason storefront.
//!
//! Requests are described with a builder and sent through an
//! [`HttpTransport`], so the same client code runs against the browser
//! Fetch API and against test doubles.
//!
//! # Example
//!
//! ```rust,ignore
//! use mason_data::{BrowserTransport, FetchClient};
//!
//! let client = FetchClient::new(BrowserTransport).with_base_url("https://api.mason.store");
//! let resp = client.send(client.get("/api/health")).await?;
//! ```

mod error;
pub mod payments;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use payments::{PaymentsClient, VerifyPaymentRequest, VerifyPaymentResponse};
pub use request::{Method, RequestBuilder};
pub use response::Response;
#[cfg(feature = "browser")]
pub use transport::BrowserTransport;
pub use transport::HttpTransport;

use std::collections::BTreeMap;

/// HTTP client for making outbound requests.
pub struct FetchClient<T> {
    transport: T,
    base_url: Option<String>,
    default_headers: BTreeMap<String, String>,
}

impl<T: HttpTransport> FetchClient<T> {
    /// Create a client over a transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: BTreeMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url).filter(|b| !b.trim().is_empty());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl AsRef<str>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl AsRef<str>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with the client's base URL and default headers applied.
    pub fn request(&self, method: Method, url: impl AsRef<str>) -> RequestBuilder {
        let url = self.resolve(url.as_ref());
        self.default_headers
            .iter()
            .fold(RequestBuilder::new(method, url), |req, (k, v)| {
                req.header(k.clone(), v.clone())
            })
    }

    /// Send a request.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        tracing::debug!(method = request.method().as_str(), url = request.url(), "sending request");
        let resp = self.transport.execute(request).await;
        match &resp {
            Ok(r) => tracing::debug!(status = r.status, "received response"),
            Err(e) => tracing::warn!(error = %e, "request failed"),
        }
        resp
    }

    fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(_) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/')),
            None => url.to_string(),
        }
    }
}
