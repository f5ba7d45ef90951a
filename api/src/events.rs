//! Event endpoints: list, search, detail, create, update.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{EventDetail, EventDraft, EventSummary, Tag};
use crate::transport::Transport;

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// `GET /events`, the full dashboard list.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        self.get_json("/events", &[]).await
    }

    /// `GET /events/filter?search=`, server-side dashboard search.
    pub async fn search_events(&self, search: &str) -> Result<Vec<EventSummary>, ApiError> {
        self.get_json("/events/filter", &[("search", search.to_string())])
            .await
    }

    /// `GET /events/{id}`.
    pub async fn get_event(&self, event_id: i64) -> Result<EventDetail, ApiError> {
        self.get_json(&format!("/events/{event_id}"), &[]).await
    }

    /// `POST /events?creatorPersonId=`. The creator becomes the organizer.
    pub async fn create_event(
        &self,
        creator_person_id: i64,
        draft: &EventDraft,
    ) -> Result<(), ApiError> {
        self.post_body(
            "/events",
            &[("creatorPersonId", creator_person_id.to_string())],
            draft,
        )
        .await
    }

    /// `PUT /events/{id}`.
    pub async fn update_event(&self, event_id: i64, draft: &EventDraft) -> Result<(), ApiError> {
        self.put_body(&format!("/events/{event_id}"), draft).await
    }

    /// `GET /tags`, the available preference/category tags.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/tags", &[]).await
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
    async fn test_list_events_decodes_summaries() {
        let transport = MockTransport::new();
        transport.reply_json(
            200,
            json!([{
                "id": 3,
                "title": "Park cleanup",
                "description": "Bring gloves",
                "location": "Riverside",
                "eventStartDt": "2026-09-05T09:00:00",
                "status": "Active",
                "tagId": 2
            }]),
        );
        let client = client_with(transport.clone());

        let events = client.list_events().await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 3);
        assert_eq!(events[0].title, "Park cleanup");
        assert_eq!(events[0].tag_id, Some(2));
    }

    #[tokio::test]
    async fn test_search_passes_query() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([]));
        let client = client_with(transport.clone());

        client.search_events("music").await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://api.test/api/events/filter");
        assert_eq!(
            request.query,
            vec![("search".to_string(), "music".to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_event_sends_creator_and_draft() {
        let transport = MockTransport::new();
        transport.reply(200, "");
        let client = client_with(transport.clone());

        let draft = EventDraft {
            title: "Picnic".into(),
            description: "Food".into(),
            location: "Hilltop".into(),
            event_start_dt: "2026-09-01T10:00".into(),
            event_end_dt: "2026-09-01T12:00".into(),
            tag: "Outdoors".into(),
        };
        client.create_event(42, &draft).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.query,
            vec![("creatorPersonId".to_string(), "42".to_string())]
        );
        assert_eq!(request.body.as_ref().unwrap()["tag"], "Outdoors");
    }

    #[tokio::test]
    async fn test_update_event_puts_to_event_path() {
        let transport = MockTransport::new();
        transport.reply(200, "");
        let client = client_with(transport.clone());

        client
            .update_event(9, &EventDraft::default())
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, reqwest::Method::PUT);
        assert_eq!(request.url, "http://api.test/api/events/9");
    }
}
