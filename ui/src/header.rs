use dioxus::prelude::*;

use crate::icons::FaBolt;
use crate::Icon;

/// Branded page header shown on every view.
#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header {
            class: "app-header",
            Icon { class: "app-header-icon", icon: FaBolt }
            span { class: "app-header-title", "Eventry" }
            span { class: "app-header-tagline", "Find something happening near you" }
        }
    }
}
