//! Registration endpoints: who participates in an event, and joining or
//! leaving one. Register/unregister address the pair by query parameters,
//! matching the server's contract.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Participation;
use crate::transport::Transport;

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// `GET /registrations/event/{id}`, all participants with their roles.
    pub async fn list_participants(&self, event_id: i64) -> Result<Vec<Participation>, ApiError> {
        self.get_json(&format!("/registrations/event/{event_id}"), &[])
            .await
    }

    /// `POST /registrations/register?personId=&eventId=`.
    pub async fn register_for_event(&self, person_id: i64, event_id: i64) -> Result<(), ApiError> {
        self.post_empty(
            "/registrations/register",
            &[
                ("personId", person_id.to_string()),
                ("eventId", event_id.to_string()),
            ],
        )
        .await
    }

    /// `POST /registrations/unregister?personId=&eventId=`.
    pub async fn unregister_from_event(
        &self,
        person_id: i64,
        event_id: i64,
    ) -> Result<(), ApiError> {
        self.post_empty(
            "/registrations/unregister",
            &[
                ("personId", person_id.to_string()),
                ("eventId", event_id.to_string()),
            ],
        )
        .await
    }
}
