//! Wire types for the remote REST API. All bodies are camelCase JSON.
//!
//! Fields the server may omit are `Option` so a sparse payload never fails
//! to decode; the flows treat absence as "not set yet" rather than an error.

use serde::{Deserialize, Serialize};

/// `POST /auth/login` and `POST /auth/register` body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful authentication payload. Registration responses may omit the
/// embedded user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
}

/// One row of the dashboard event list (`GET /events`, `GET /events/filter`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_start_dt: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tag_id: Option<i64>,
}

/// Full event payload (`GET /events/{id}`), with the tag embedded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_start_dt: String,
    #[serde(default)]
    pub event_end_dt: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tag: Option<Tag>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Body for `POST /events` and `PUT /events/{id}`. Datetimes are the
/// `YYYY-MM-DDTHH:MM` strings produced by a `datetime-local` input.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_start_dt: String,
    pub event_end_dt: String,
    pub tag: String,
}

/// `GET /users/{userId}/profile` payload. `person_id` is the derived domain
/// identity the rest of the app needs; it is absent until a profile exists.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub person_id: Option<i64>,
}

/// Body for `PUT /users/{userId}/profile`, the editable fields only.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub contact_no: String,
    pub description: String,
    pub birthday: String,
    pub image_id: Option<i64>,
    pub preferences: Vec<String>,
}

/// One row of `GET /registrations/event/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: i64,
    pub role: String,
    #[serde(default)]
    pub status: String,
    pub person: Person,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Participation {
    pub fn is_organizer(&self) -> bool {
        self.role == "Organizer"
    }
}

/// The viewer's own participation in an event, if any.
pub fn find_participation(participants: &[Participation], person_id: i64) -> Option<&Participation> {
    participants.iter().find(|p| p.person.id == person_id)
}

/// One row of `GET /notifications/person/{id}`. Status `"U"` means unread.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_dt: String,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == "U"
    }
}

/// Body for `POST /notifications/event`: an organizer broadcast to every
/// participant of an event.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBroadcast {
    pub event_id: i64,
    pub subject: String,
    pub content: String,
}
