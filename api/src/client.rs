//! # ApiClient: auth-header injection and the unauthorized-response policy
//!
//! Every outbound call goes through [`ApiClient::send`]:
//!
//! 1. The path is resolved against the fixed base address and
//!    `Content-Type: application/json` is always set.
//! 2. **Outbound stage**: the bearer token is read fresh from the session
//!    store on each call (never cached in memory) and attached as
//!    `Authorization: Bearer {token}` when present. When absent the request
//!    goes out unmodified; unauthenticated calls are allowed to be attempted
//!    and fail server-side.
//! 3. **Inbound stage**: a 401 from *any* endpoint clears the stored token
//!    and maps to [`ApiError::Unauthorized`]. Navigation is the caller's
//!    side of the contract; the pipeline only signals. The handler fires at
//!    most once per failing response and never retries the request.
//! 4. 404 maps to [`ApiError::NotFound`]; other non-success statuses carry
//!    the server's `message` field when one exists. Network errors propagate
//!    untouched. No retry, no backoff, no queuing.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{Session, SessionStore};

use crate::config;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport, Transport};

pub struct ApiClient<S: SessionStore, T: Transport = HttpTransport> {
    base_url: String,
    session: Session<S>,
    transport: T,
}

impl<S: SessionStore> ApiClient<S> {
    /// Client against the configured base address (see [`config::base_url`]).
    pub fn new(session: Session<S>) -> Self {
        Self::with_base_url(config::base_url(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: Session<S>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport: HttpTransport::new(),
        }
    }
}

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// Client over an explicit transport. Tests use this with a mock.
    pub fn with_transport(base_url: impl Into<String>, session: Session<S>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<crate::transport::ApiResponse, ApiError> {
        let mut headers = vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )];
        // Read fresh from the store each call; a login or 401 in between
        // requests must be reflected immediately.
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            headers,
            body,
        };

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| ApiError::Network(e.0))?;

        match response.status {
            status if (200..300).contains(&status) => Ok(response),
            401 => {
                tracing::warn!(path, "unauthorized response, invalidating session");
                self.session.clear_token();
                Err(ApiError::Unauthorized)
            }
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::Status {
                status,
                message: server_message(&response.body),
            }),
        }
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self.send(Method::GET, path, query, None).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn post_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        let response = self.send(Method::POST, path, query, Some(body)).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST with no body, where the caller only cares about success.
    pub(crate) async fn post_empty(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), ApiError> {
        self.send(Method::POST, path, query, None).await?;
        Ok(())
    }

    /// POST a JSON body, ignoring the response body.
    pub(crate) async fn post_body(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> Result<(), ApiError> {
        let body = encode(body)?;
        self.send(Method::POST, path, query, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_body(&self, path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        let body = encode(body)?;
        self.send(Method::PUT, path, &[], Some(body)).await?;
        Ok(())
    }
}

fn encode(body: &impl Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the server's `message` field out of an error body, if any.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    Some(value.get("message")?.as_str()?.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::transport::mock::MockTransport;

    fn client_with(
        transport: MockTransport,
    ) -> ApiClient<MemoryStore, MockTransport> {
        ApiClient::with_transport(
            "http://api.test/api",
            Session::new(MemoryStore::new()),
            transport,
        )
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_stored() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([]));
        let client = client_with(transport.clone());
        client.session().set_token("abc");

        let _: Vec<serde_json::Value> = client.get_json("/events", &[]).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("Authorization"), Some("Bearer abc"));
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert_eq!(requests[0].url, "http://api.test/api/events");
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([]));
        let client = client_with(transport.clone());

        let _: Vec<serde_json::Value> = client.get_json("/events", &[]).await.unwrap();

        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_token_read_fresh_each_call() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([])).reply_json(200, json!([]));
        let client = client_with(transport.clone());

        client.session().set_token("first");
        let _: Vec<serde_json::Value> = client.get_json("/events", &[]).await.unwrap();
        client.session().set_token("second");
        let _: Vec<serde_json::Value> = client.get_json("/events", &[]).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer first"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer second"));
    }

    #[tokio::test]
    async fn test_401_clears_token_and_signals_without_retry() {
        let transport = MockTransport::new();
        transport.reply(401, "");
        let client = client_with(transport.clone());
        client.session().set_token("stale");

        let err = client
            .get_json::<serde_json::Value>("/events", &[])
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert!(client.session().token().is_none());
        // Exactly one request issued; the pipeline must not retry.
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let transport = MockTransport::new();
        transport.reply(404, "");
        let client = client_with(transport.clone());

        let err = client
            .get_json::<serde_json::Value>("/events/99", &[])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_other_statuses_carry_server_message() {
        let transport = MockTransport::new();
        transport.reply_json(500, json!({"message": "boom"}));
        let client = client_with(transport.clone());
        client.session().set_token("abc");

        let err = client
            .get_json::<serde_json::Value>("/events", &[])
            .await
            .unwrap_err();

        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.as_deref(), Some("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Non-401 failures must not touch the session.
        assert_eq!(client.session().token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_network_errors_propagate() {
        let transport = MockTransport::new();
        transport.fail("connection refused");
        let client = client_with(transport.clone());

        let err = client
            .get_json::<serde_json::Value>("/events", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_query_pairs_passed_to_transport() {
        let transport = MockTransport::new();
        transport.reply(200, "{}");
        let client = client_with(transport.clone());

        client
            .post_empty(
                "/registrations/register",
                &[
                    ("personId", "42".to_string()),
                    ("eventId", "7".to_string()),
                ],
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.query,
            vec![
                ("personId".to_string(), "42".to_string()),
                ("eventId".to_string(), "7".to_string()),
            ]
        );
    }
}
