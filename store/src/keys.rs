//! Well-known session storage keys.
//!
//! These are the exact key names used in browser local storage, shared by
//! every page of the app. All values are stored as strings; numeric ids are
//! stringified on write and parsed on read.

/// Opaque bearer credential. Present ⇔ the user is considered authenticated.
pub const TOKEN: &str = "token";

/// Authentication principal id, set on login/registration.
pub const USER_ID: &str = "userId";

/// Domain profile id, lazily derived from `userId` via a profile lookup.
pub const PERSON_ID: &str = "personId";

/// The event the user last clicked, carried across a page navigation.
/// Overwritten on each new selection, never explicitly cleared.
pub const SELECTED_EVENT_ID: &str = "selectedEventId";
