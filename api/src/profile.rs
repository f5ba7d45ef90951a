//! Profile endpoints. The profile fetch doubles as the identity-resolution
//! lookup (see [`crate::identity`]); these wrappers are the plain CRUD side.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Profile, ProfileDraft};
use crate::transport::Transport;

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// `GET /users/{userId}/profile`. 404 means "no profile yet"; callers
    /// check [`ApiError::is_not_found`] and render first-time setup.
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        self.get_json(&format!("/users/{user_id}/profile"), &[])
            .await
    }

    /// `PUT /users/{userId}/profile`. Creates or updates.
    pub async fn save_profile(&self, user_id: &str, draft: &ProfileDraft) -> Result<(), ApiError> {
        self.put_body(&format!("/users/{user_id}/profile"), draft)
            .await
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
    async fn test_get_profile_decodes_preferences() {
        let transport = MockTransport::new();
        transport.reply_json(
            200,
            json!({
                "name": "Ada",
                "contactNo": "555-0100",
                "description": "Hi",
                "birthday": "1990-01-01",
                "preferences": ["Music", "Sports"],
                "personId": 42
            }),
        );
        let client = client_with(transport.clone());

        let profile = client.get_profile("7").await.unwrap();

        assert_eq!(profile.contact_no, "555-0100");
        assert_eq!(profile.preferences.len(), 2);
        assert_eq!(profile.person_id, Some(42));
    }

    #[tokio::test]
    async fn test_save_profile_puts_draft_without_person_id() {
        let transport = MockTransport::new();
        transport.reply(200, "");
        let client = client_with(transport.clone());

        let draft = ProfileDraft {
            name: "Ada".into(),
            preferences: vec!["Music".into()],
            ..Default::default()
        };
        client.save_profile("7", &draft).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://api.test/api/users/7/profile");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["name"], "Ada");
        assert!(body.get("personId").is_none());
    }
}
