//! # Transport seam: the HTTP stack behind the pipeline
//!
//! [`Transport`] separates *what* the pipeline sends (an [`ApiRequest`] with
//! headers already decided) from *how* bytes move. The production
//! implementation is [`HttpTransport`] over `reqwest`, which compiles to the
//! browser's `fetch` on wasm and to a native client elsewhere. Tests swap in
//! [`mock::MockTransport`] to observe outbound headers and script responses
//! without a network.

use reqwest::Method;
use thiserror::Error;

/// A fully assembled outbound request. The pipeline has already resolved the
/// URL against the base address and attached every header it intends to send.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw response: status plus body text, decoded downstream.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// The request never produced an HTTP response (DNS, refused connection,
/// aborted fetch). HTTP error statuses are *not* transport errors.
#[derive(Debug, Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

pub trait Transport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport used in production.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self.http.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Scripted transport: replies are popped in order, requests recorded.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        requests: Arc<Mutex<Vec<ApiRequest>>>,
        replies: Arc<Mutex<VecDeque<Result<ApiResponse, String>>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, status: u16, body: &str) -> &Self {
            self.replies.lock().unwrap().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
            self.reply(status, &body.to_string())
        }

        pub fn fail(&self, message: &str) -> &Self {
            self.replies
                .lock()
                .unwrap()
                .push_back(Err(message.to_string()));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for MockTransport {
        async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("mock transport ran out of scripted replies")
                .map_err(TransportError)
        }
    }
}
