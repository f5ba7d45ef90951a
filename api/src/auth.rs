//! Authentication endpoints: login and registration.
//!
//! Both store the credential on success so that every subsequent request
//! picks it up through the outbound interceptor. `userId` comes from the
//! embedded user when the server sends one (login always does, registration
//! may not).

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials};
use crate::transport::Transport;

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// `POST /auth/login`. On success the session holds `token` and `userId`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post_json(
                "/auth/login",
                &[],
                &Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        self.session().set_token(&response.token);
        if let Some(user) = &response.user {
            self.session().set_user_id(user.id);
        }
        Ok(response)
    }

    /// `POST /auth/register`. Stores the token, and `userId` when present.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post_json(
                "/auth/register",
                &[],
                &Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        self.session().set_token(&response.token);
        if let Some(user) = &response.user {
            self.session().set_user_id(user.id);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryStore, Session};

    use super::*;
    use crate::transport::mock::MockTransport;

    fn client_with(transport: MockTransport) -> ApiClient<MemoryStore, MockTransport> {
        ApiClient::with_transport(
            "http://api.test/api",
            Session::new(MemoryStore::new()),
            transport,
        )
    }

    #[tokio::test]
    async fn test_login_stores_token_and_user_id() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"token": "abc", "user": {"id": 7}}));
        let client = client_with(transport.clone());

        client.login("ada@example.com", "secret").await.unwrap();

        assert_eq!(client.session().token().as_deref(), Some("abc"));
        assert_eq!(client.session().user_id().as_deref(), Some("7"));

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://api.test/api/auth/login");
        assert_eq!(
            request.body.as_ref().unwrap()["email"],
            "ada@example.com"
        );
        // Not yet authenticated: no bearer header on the login call itself.
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let transport = MockTransport::new();
        transport.reply_json(403, json!({"message": "bad credentials"}));
        let client = client_with(transport.clone());

        let err = client.login("ada@example.com", "wrong").await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 403, .. }));
        assert!(client.session().token().is_none());
        assert!(client.session().user_id().is_none());
    }

    #[tokio::test]
    async fn test_register_without_embedded_user_stores_token_only() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"token": "fresh"}));
        let client = client_with(transport.clone());

        client.register("new@example.com", "secret").await.unwrap();

        assert_eq!(client.session().token().as_deref(), Some("fresh"));
        assert!(client.session().user_id().is_none());
    }
}
