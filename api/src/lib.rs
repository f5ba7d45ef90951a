//! # API crate: the Eventry client request pipeline
//!
//! This crate is the backbone of the Eventry client. It wraps every outbound
//! call to the remote REST API with consistent auth-header injection and a
//! uniform unauthorized-response policy, and bridges the authentication
//! identity (`userId`) to the domain identity (`personId`) that event,
//! registration and notification operations require.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: base address, bearer-token injection, 401 interception |
//! | [`transport`] | `Transport` seam over the HTTP stack (`reqwest`), mockable in tests |
//! | [`error`] | `ApiError` taxonomy: `Unauthorized` is global, everything else is the caller's |
//! | [`identity`] | `ensure_person_id`: idempotent `userId` → `personId` resolution |
//! | [`models`] | Wire types (camelCase JSON) shared by the endpoint wrappers |
//! | [`config`] | Base-address configuration with a local-development fallback |
//!
//! Endpoint wrappers are grouped by feature area as `impl` blocks on
//! [`ApiClient`]: [`auth`], [`events`], [`profile`], [`registrations`],
//! [`notifications`].
//!
//! ## Policy summary
//!
//! - The token is read **fresh from the session store on every request**;
//!   nothing is cached in memory.
//! - A 401 response clears the stored token and surfaces
//!   [`ApiError::Unauthorized`], a redirect *signal* the view layer acts on.
//!   The pipeline itself never navigates, retries, or queues.
//! - 404 and other failures are local to the initiating flow.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod identity;
pub mod models;
pub mod notifications;
pub mod profile;
pub mod registrations;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use identity::{ensure_person_id, Resolution};
pub use models::{
    find_participation, AuthResponse, AuthUser, Credentials, EventDetail, EventDraft,
    EventSummary, Notification, NotificationBroadcast, Participation, Person, Profile,
    ProfileDraft, Tag,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, TransportError};
