//! # Session store: durable per-browser key/value persistence
//!
//! [`SessionStore`] is the seam over browser local storage. The web platform
//! uses [`crate::LocalStore`]; tests and non-web targets use
//! [`crate::MemoryStore`].
//!
//! [`Session`] wraps a store with typed accessors for the four identity
//! fields ([`crate::keys`]). It is an explicit context object handed to each
//! flow rather than a process-wide global, so cross-page coupling stays
//! visible at call sites. Writes are idempotent overwrites; concurrent tabs
//! race with last-write-wins, which is acceptable for a single logical user
//! per browser session. No expiry is enforced client-side; a stale token is
//! only invalidated reactively by the server returning 401.

use crate::keys;

/// Key/value persistence scoped to the browser. Synchronous, like the
/// underlying localStorage API.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed session context over a [`SessionStore`].
#[derive(Clone, Debug, Default)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Raw access for callers that need a key outside the typed set.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(keys::TOKEN)
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(keys::TOKEN, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(keys::TOKEN);
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(keys::USER_ID)
    }

    pub fn set_user_id(&self, id: i64) {
        self.store.set(keys::USER_ID, &id.to_string());
    }

    /// The derived domain identity, parsed back to a number. `None` when the
    /// value is absent or unparseable.
    pub fn person_id(&self) -> Option<i64> {
        self.store.get(keys::PERSON_ID)?.parse().ok()
    }

    pub fn set_person_id(&self, id: i64) {
        self.store.set(keys::PERSON_ID, &id.to_string());
    }

    pub fn selected_event_id(&self) -> Option<i64> {
        self.store.get(keys::SELECTED_EVENT_ID)?.parse().ok()
    }

    pub fn set_selected_event_id(&self, id: i64) {
        self.store.set(keys::SELECTED_EVENT_ID, &id.to_string());
    }
}
