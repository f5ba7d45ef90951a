use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::Icon;

/// Back link used by the secondary pages. The caller decides where "back"
/// goes, so this takes a plain click handler rather than a route.
#[component]
pub fn BackButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "back-button",
            onclick: move |evt| onclick.call(evt),
            Icon { icon: FaArrowLeft }
            "Back"
        }
    }
}
