//! Shared client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] over the platform-appropriate
//! [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStore`], so the session survives page reloads
//! - **Elsewhere** (native test harnesses): in-memory via
//!   [`store::MemoryStore`]
//!
//! Clients are cheap to construct; views make a fresh one per operation and
//! rely on the store for continuity.

use api::ApiClient;
use store::Session;

/// Create a platform-appropriate session context.
pub fn make_session() -> Session<impl store::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::new(store::MemoryStore::new())
    }
}

/// Create an API client against the configured base address.
pub fn make_client() -> ApiClient<impl store::SessionStore> {
    ApiClient::new(make_session())
}
