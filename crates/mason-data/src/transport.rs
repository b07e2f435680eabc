//! Pluggable request execution.
//!
//! The client builds requests; a transport sends them. The browser build uses
//! the Fetch API via gloo-net, tests substitute a recording mock.

use crate::{FetchError, RequestBuilder, Response};
use async_trait::async_trait;

/// Sends a request and returns the raw response.
///
/// Non-2xx statuses are returned as responses, not errors.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        (**self).execute(request).await
    }
}

/// Transport backed by the browser Fetch API.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "browser")]
#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use crate::Method;
        use gloo_net::http::Request;

        let mut builder = match request.method() {
            Method::Get => Request::get(request.url()),
            Method::Post => Request::post(request.url()),
        };
        for (key, value) in request.headers() {
            builder = builder.header(key, value);
        }

        let outgoing = match request.body() {
            Some(body) => {
                let array = js_sys::Uint8Array::from(body);
                builder.body(array)
            }
            None => builder.build(),
        }
        .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let resp = outgoing
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .binary()
            .await
            .map_err(|e| FetchError::ParseError(e.to_string()))?;

        Ok(Response::new(status, body))
    }
}
