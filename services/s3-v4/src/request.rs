use crate::constants::AWS_QUERY_ENCODE_SET;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use percent_encoding::utf8_percent_encode;
use provsign_core::Result;

/// SignableRequest is an S3 request in the shape the signer consumes.
///
/// The canonical URI is used verbatim, callers pass it already encoded.
#[derive(Debug, Clone)]
pub struct SignableRequest {
    /// HTTP method, only `GET` and `PUT` can be signed.
    pub method: Method,
    /// Host the request is sent to, `{bucket}.{endpoint}` for virtual-hosted buckets.
    pub host: String,
    /// Absolute path of the request, starting with `/`.
    pub canonical_uri: String,
    /// Query pairs, a valueless key is stored with an empty value.
    pub query: Vec<(String, String)>,
    /// Request headers, stamped by the signer.
    pub headers: HeaderMap,
    /// Request body.
    pub payload: Bytes,
}

impl SignableRequest {
    /// Create a request against `host` at path `/` with an empty body.
    pub fn new(method: Method, host: impl Into<String>) -> Self {
        Self {
            method,
            host: host.into(),
            canonical_uri: "/".to_string(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            payload: Bytes::new(),
        }
    }

    /// Create a request addressed to `bucket` using virtual-hosted style.
    pub fn virtual_hosted(method: Method, bucket: &str, endpoint: &str) -> Self {
        Self::new(method, format!("{bucket}.{endpoint}"))
    }

    /// Set the canonical URI.
    pub fn with_canonical_uri(mut self, uri: impl Into<String>) -> Self {
        self.canonical_uri = uri.into();
        self
    }

    /// Append a query pair. Use an empty value for subresources like `cors`.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Insert a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the request body.
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Render the https URL of this request.
    ///
    /// Valueless query keys are rendered bare, so the CORS subresource becomes `?cors`.
    pub fn url(&self) -> String {
        let mut url = format!("https://{}{}", self.host, self.canonical_uri);
        if self.query.is_empty() {
            return url;
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                let k = utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET);
                if v.is_empty() {
                    k.to_string()
                } else {
                    format!("{k}={}", utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET))
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
        url
    }

    /// Convert into an `http::Request` ready to be sent.
    pub fn into_http_request(self) -> Result<http::Request<Bytes>> {
        let mut req = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url())
            .body(self.payload)?;
        *req.headers_mut() = self.headers;
        Ok(req)
    }
}
