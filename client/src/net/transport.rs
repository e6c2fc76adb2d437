//! HTTP transport seam for JSON POST requests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `GlooTransport` fails every request,
//! and tests substitute their own `HttpTransport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::TransportError;

/// Status and raw text body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// True for 2xx statuses.
    pub ok: bool,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, ok: (200..300).contains(&status), body: body.into() }
    }
}

/// Issues JSON POST requests.
///
/// Futures are awaited on the single-threaded browser executor, so no `Send`
/// bound is required.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST `body` to `url` with `Content-Type: application/json` and read
    /// the response body as text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response was received.
    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
        (**self).post_json(url, body).await
    }
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .body(body.to_owned())
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let ok = resp.ok();
            let text = read_body(resp.text().await)?;
            Ok(RawResponse { status, ok, body: text })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

/// A body read that fails mid-stream is a transport failure, not an empty body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn read_body<E: std::fmt::Display>(read: Result<String, E>) -> Result<String, TransportError> {
    read.map_err(|e| TransportError(e.to_string()))
}
