mod bucket;
mod validate;

use async_trait::async_trait;
use bytes::Bytes;
use provsign_core::{Context, Error, HttpSend, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A canned answer of the mock provider.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Status(u16, String),
    Unreachable,
}

impl MockResponse {
    pub fn ok() -> Self {
        MockResponse::Status(200, String::new())
    }

    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Status(status, body.to_string())
    }
}

/// MockHttpSend records every request and answers from a queue.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
}

impl MockHttpSend {
    pub fn new(responses: impl IntoIterator<Item = MockResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        let resp = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request, no response queued");
        match resp {
            MockResponse::Status(status, body) => Ok(http::Response::builder()
                .status(status)
                .body(Bytes::from(body))
                .unwrap()),
            MockResponse::Unreachable => Err(Error::transport("connection refused")),
        }
    }
}

/// Build a context whose http client is the returned mock.
pub fn mock_context(responses: impl IntoIterator<Item = MockResponse>) -> (Context, MockHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockHttpSend::new(responses);
    (Context::new().with_http_send(mock.clone()), mock)
}
