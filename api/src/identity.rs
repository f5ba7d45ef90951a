//! # Identity resolution: bridging `userId` to `personId`
//!
//! The API authenticates a *user* but events, registrations and
//! notifications operate on a *person* (the domain profile). Every page that
//! needs the person identity calls [`ensure_person_id`] on entry; the step is
//! idempotent and safe to repeat, so a stale `personId` self-heals at the
//! cost of a redundant profile fetch. There is no cross-page cache beyond
//! what the session store persists.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Profile;
use crate::transport::Transport;

/// Outcome of an identity-resolution attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// `personId` is known and has been persisted to the session store.
    Resolved(i64),
    /// The user is authenticated but has not created a profile yet. Pages
    /// should offer a profile-creation affordance and keep loading data that
    /// does not depend on the person identity.
    NoProfile,
    /// No `userId` in the session store. Fail closed: the caller must
    /// redirect to the login view.
    NotLoggedIn,
}

/// Resolve the logged-in user's `personId` and persist it.
///
/// - payload carries `personId` → stored (overwriting any stale value) and
///   returned as [`Resolution::Resolved`].
/// - payload without `personId`, or a 404 → [`Resolution::NoProfile`]; not
///   an error, the page continues with independent data.
/// - any other failure (including [`ApiError::Unauthorized`]) propagates;
///   the caller halts dependent loads with a "failed to load profile"
///   condition.
pub async fn ensure_person_id<S: SessionStore, T: Transport>(
    client: &ApiClient<S, T>,
) -> Result<Resolution, ApiError> {
    let Some(user_id) = client.session().user_id() else {
        return Ok(Resolution::NotLoggedIn);
    };

    let profile: Profile = match client
        .get_json(&format!("/users/{user_id}/profile"), &[])
        .await
    {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            tracing::debug!(%user_id, "no profile yet for user");
            return Ok(Resolution::NoProfile);
        }
        Err(err) => return Err(err),
    };

    match profile.person_id {
        Some(person_id) => {
            client.session().set_person_id(person_id);
            tracing::debug!(%user_id, person_id, "resolved person identity");
            Ok(Resolution::Resolved(person_id))
        }
        None => Ok(Resolution::NoProfile),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryStore, Session};

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
    async fn test_resolves_and_persists_person_id() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"name": "Ada", "personId": 42}));
        let client = client_with(transport.clone());
        client.session().set_user_id(7);

        let resolution = ensure_person_id(&client).await.unwrap();

        assert_eq!(resolution, Resolution::Resolved(42));
        assert_eq!(client.session().person_id(), Some(42));
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/users/7/profile"
        );
    }

    #[tokio::test]
    async fn test_idempotent_with_unchanged_remote_profile() {
        let transport = MockTransport::new();
        transport
            .reply_json(200, json!({"personId": 42}))
            .reply_json(200, json!({"personId": 42}));
        let client = client_with(transport.clone());
        client.session().set_user_id(7);

        assert_eq!(
            ensure_person_id(&client).await.unwrap(),
            Resolution::Resolved(42)
        );
        assert_eq!(
            ensure_person_id(&client).await.unwrap(),
            Resolution::Resolved(42)
        );
        assert_eq!(client.session().person_id(), Some(42));
    }

    #[tokio::test]
    async fn test_overwrites_stale_person_id() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"personId": 42}));
        let client = client_with(transport.clone());
        client.session().set_user_id(7);
        client.session().set_person_id(13);

        ensure_person_id(&client).await.unwrap();

        assert_eq!(client.session().person_id(), Some(42));
    }

    #[tokio::test]
    async fn test_missing_user_id_fails_closed() {
        let transport = MockTransport::new();
        let client = client_with(transport.clone());

        let resolution = ensure_person_id(&client).await.unwrap();

        assert_eq!(resolution, Resolution::NotLoggedIn);
        // Fail closed means no request was even attempted.
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_404_is_no_profile_not_an_error() {
        let transport = MockTransport::new();
        transport.reply(404, "");
        let client = client_with(transport.clone());
        client.session().set_user_id(7);

        let resolution = ensure_person_id(&client).await.unwrap();

        assert_eq!(resolution, Resolution::NoProfile);
        assert!(client.session().person_id().is_none());
    }

    #[tokio::test]
    async fn test_profile_without_person_id_is_no_profile() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!({"name": "Ada"}));
        let client = client_with(transport.clone());
        client.session().set_user_id(7);

        assert_eq!(
            ensure_person_id(&client).await.unwrap(),
            Resolution::NoProfile
        );
    }

    #[tokio::test]
    async fn test_other_errors_propagate() {
        let transport = MockTransport::new();
        transport.reply_json(500, json!({"message": "db down"}));
        let client = client_with(transport.clone());
        client.session().set_user_id(7);

        let err = ensure_person_id(&client).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unauthorized_propagates_after_session_invalidation() {
        let transport = MockTransport::new();
        transport.reply(401, "");
        let client = client_with(transport.clone());
        client.session().set_user_id(7);
        client.session().set_token("stale");

        let err = ensure_person_id(&client).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(client.session().token().is_none());
    }
}
