//! Notification endpoints: per-person inbox, read receipts, and the
//! organizer broadcast to an event's participants.

use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Notification, NotificationBroadcast};
use crate::transport::Transport;

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// `GET /notifications/person/{id}` or `.../unread` when filtering.
    pub async fn list_notifications(
        &self,
        person_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, ApiError> {
        let path = if unread_only {
            format!("/notifications/person/{person_id}/unread")
        } else {
            format!("/notifications/person/{person_id}")
        };
        self.get_json(&path, &[]).await
    }

    /// `POST /notifications/{id}/read`.
    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.post_empty(&format!("/notifications/{notification_id}/read"), &[])
            .await
    }

    /// `POST /notifications/event`. Notifies every participant of an event.
    pub async fn notify_event(&self, broadcast: &NotificationBroadcast) -> Result<(), ApiError> {
        self.post_body("/notifications/event", &[], broadcast).await
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
    async fn test_unread_toggle_switches_paths() {
        let transport = MockTransport::new();
        transport.reply_json(200, json!([])).reply_json(200, json!([]));
        let client = client_with(transport.clone());

        client.list_notifications(42, false).await.unwrap();
        client.list_notifications(42, true).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/api/notifications/person/42");
        assert_eq!(
            requests[1].url,
            "http://api.test/api/notifications/person/42/unread"
        );
    }

    #[tokio::test]
    async fn test_mark_read_posts_to_notification_path() {
        let transport = MockTransport::new();
        transport.reply(200, "");
        let client = client_with(transport.clone());

        client.mark_notification_read(5).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.url, "http://api.test/api/notifications/5/read");
    }

    #[tokio::test]
    async fn test_notify_event_sends_broadcast_body() {
        let transport = MockTransport::new();
        transport.reply(200, "");
        let client = client_with(transport.clone());

        client
            .notify_event(&NotificationBroadcast {
                event_id: 9,
                subject: "Venue change".into(),
                content: "Now at the town hall".into(),
            })
            .await
            .unwrap();

        let body = transport.requests()[0].body.as_ref().unwrap().clone();
        assert_eq!(body["eventId"], 9);
        assert_eq!(body["subject"], "Venue change");
    }
}
