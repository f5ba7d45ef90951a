//! Dashboard: the event list with server-side search.
//!
//! On entry the page loads the event list and resolves the person identity
//! in parallel; the two calls are independent, so they are explicitly joined
//! before the loading state clears. Identity failures don't block the event
//! list; the profile page re-runs resolution anyway.

use api::{EventSummary, Resolution};
use dioxus::prelude::*;
use ui::AppHeader;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let mut events = use_signal(Vec::<EventSummary>::new);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let session = ui::make_session();
        if session.user_id().is_none() {
            nav.replace(Route::Login {});
            return;
        }

        let client = ui::make_client();
        let (events_result, identity_result) =
            futures::join!(client.list_events(), api::ensure_person_id(&client));

        match events_result {
            Ok(list) => events.set(list),
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                tracing::error!("failed to fetch events: {err}");
                error.set(Some("Failed to fetch events.".to_string()));
            }
        }

        match identity_result {
            Ok(Resolution::NotLoggedIn) => {
                nav.replace(Route::Login {});
                return;
            }
            Ok(_) => {}
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                // The event list still renders; pages that depend on the
                // person identity re-resolve it themselves.
                tracing::error!("identity resolution failed: {err}");
            }
        }

        loading.set(false);
    });

    let run_search = move |_| {
        spawn(async move {
            error.set(None);
            let client = ui::make_client();
            let query = search().trim().to_string();
            let result = if query.is_empty() {
                client.list_events().await
            } else {
                client.search_events(&query).await
            };
            match result {
                Ok(list) => events.set(list),
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("event search failed: {err}");
                    error.set(Some("Failed to fetch events.".to_string()));
                }
            }
        });
    };

    let handle_event_click = move |id: i64| {
        ui::make_session().set_selected_event_id(id);
        nav.push(Route::EventDetail {});
    };

    if loading() {
        return rsx! { p { class: "loading", "Loading events..." } };
    }

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "content",
                div {
                    class: "page-actions",
                    h1 { "Dashboard" }
                    div {
                        button {
                            class: "secondary",
                            onclick: move |_| { nav.push(Route::Profile {}); },
                            "Profile"
                        }
                        button {
                            class: "secondary",
                            onclick: move |_| { nav.push(Route::Notifications {}); },
                            "Notifications"
                        }
                        button {
                            class: "primary",
                            onclick: move |_| { nav.push(Route::EventCreate {}); },
                            "Create Event"
                        }
                    }
                }

                form {
                    class: "search-bar",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        run_search(());
                    },
                    input {
                        r#type: "search",
                        placeholder: "Search events",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                    button { class: "secondary", r#type: "submit", "Search" }
                }

                if let Some(err) = error() {
                    p { class: "page-error", "{err}" }
                }

                div {
                    class: "event-grid",
                    for event in events() {
                        div {
                            key: "{event.id}",
                            class: "event-card",
                            onclick: move |_| handle_event_click(event.id),
                            h2 { "{event.title}" }
                            p { "{event.description}" }
                            p {
                                class: "event-meta",
                                "{event.location} · {event.event_start_dt}"
                            }
                        }
                    }
                }
            }
        }
    }
}
