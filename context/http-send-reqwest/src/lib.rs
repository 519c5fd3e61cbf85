//! Reqwest-based HTTP client for provsign.
//!
//! This crate provides `ReqwestHttpSend`, which implements the `HttpSend`
//! trait from `provsign_core` on top of a `reqwest::Client`.
//!
//! ## Example
//!
//! ```no_run
//! use provsign_core::Context;
//! use provsign_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn example() -> provsign_core::Result<()> {
//! let ctx = Context::new()
//!     .with_http_send(ReqwestHttpSend::with_timeout(Duration::from_secs(10))?);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use provsign_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use std::time::Duration;

/// Reqwest-based implementation of the `HttpSend` trait.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose requests fail after `timeout`.
    ///
    /// A timeout surfaces as a retryable transport error.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            Error::config_invalid("failed to build http client")
                .with_source(e)
                .with_context(format!("timeout: {timeout:?}"))
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let method = req.method().clone();
        let uri = req.uri().clone();

        let req = Request::try_from(req)
            .map_err(|e| Error::invalid_request("failed to convert http request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| transport_error(e, &method, &uri))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| transport_error(e, &method, &uri))?;
        debug!("{method} {uri} answered {} with {} bytes", parts.status, bs.len());
        Ok(http::Response::from_parts(parts, bs))
    }
}

fn transport_error(e: reqwest::Error, method: &http::Method, uri: &http::Uri) -> Error {
    let message = if e.is_timeout() {
        "request timed out"
    } else {
        "failed to send request"
    };
    Error::transport(message)
        .with_source(e)
        .with_context(format!("{method} {uri}"))
}
