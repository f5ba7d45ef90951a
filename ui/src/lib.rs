//! This crate contains the shared UI for the workspace: the platform-aware
//! API client constructor and the chrome components every page uses.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_session};

mod header;
pub use header::AppHeader;

mod back_button;
pub use back_button::BackButton;
