//! # localStorage-backed session store
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It persists the identity fields into the browser's
//! localStorage via `web_sys`, so they survive a full page reload and are
//! shared by every tab of the origin.
//!
//! ## Error handling
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled or full degrades to
//! "no session" (the user is simply asked to log in again) rather than
//! crashing the app.

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the handle to the underlying storage is
/// re-acquired from the window on every operation.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
