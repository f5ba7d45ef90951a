use dioxus::prelude::*;

use views::{
    Dashboard, EventCreate, EventDetail, EventEdit, Login, Notifications, Profile, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/events")]
    EventDetail {},
    #[route("/events/create")]
    EventCreate {},
    #[route("/events/edit")]
    EventEdit {},
    #[route("/profile")]
    Profile {},
    #[route("/notifications")]
    Notifications {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Redirect `/` based on whether a credential is stored: dashboard when one
/// is present, login otherwise. The token may still be stale; the first 401
/// will bounce the user back to login.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let session = ui::make_session();
    if session.token().is_some() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}
