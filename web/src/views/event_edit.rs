//! Event editing: pre-fills the form from `GET /events/{id}` and saves with
//! a `PUT`. Keyed by `selectedEventId`, like the detail page.

use api::EventDraft;
use dioxus::prelude::*;
use ui::{AppHeader, BackButton};

use crate::Route;

#[component]
pub fn EventEdit() -> Element {
    let nav = use_navigator();
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut event_start_dt = use_signal(String::new);
    let mut event_end_dt = use_signal(String::new);
    let mut tag = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let session = ui::make_session();
        let Some(event_id) = session.selected_event_id() else {
            nav.replace(Route::Dashboard {});
            return;
        };

        let client = ui::make_client();
        match client.get_event(event_id).await {
            Ok(event) => {
                title.set(event.title);
                description.set(event.description);
                location.set(event.location);
                // datetime-local inputs take "YYYY-MM-DDTHH:MM"; drop any
                // seconds the server sends.
                event_start_dt.set(truncate_minutes(&event.event_start_dt));
                event_end_dt.set(truncate_minutes(&event.event_end_dt));
                tag.set(event.tag.map(|t| t.name).unwrap_or_default());
                loading.set(false);
            }
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
            }
            Err(err) => {
                tracing::error!("failed to fetch event {event_id}: {err}");
                error.set(Some("Failed to fetch event details.".to_string()));
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let session = ui::make_session();
            let Some(event_id) = session.selected_event_id() else {
                return;
            };

            let draft = EventDraft {
                title: title(),
                description: description(),
                location: location(),
                event_start_dt: event_start_dt(),
                event_end_dt: event_end_dt(),
                tag: tag().trim().to_string(),
            };

            let client = ui::make_client();
            match client.update_event(event_id, &draft).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to update event {event_id}: {err}");
                    error.set(Some("Failed to update event".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { p { class: "loading", "Loading event details for editing..." } };
    }

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "card",
                BackButton { onclick: move |_| { nav.push(Route::EventDetail {}); } }
                h1 { "Edit Event" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { "Title" }
                        input {
                            r#type: "text",
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Description" }
                        textarea {
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Location" }
                        input {
                            r#type: "text",
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Event Start Date" }
                        input {
                            r#type: "datetime-local",
                            value: event_start_dt(),
                            oninput: move |evt| event_start_dt.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Event End Date" }
                        input {
                            r#type: "datetime-local",
                            value: event_end_dt(),
                            oninput: move |evt| event_end_dt.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Tag" }
                        input {
                            r#type: "text",
                            value: tag(),
                            oninput: move |evt| tag.set(evt.value()),
                        }
                    }
                    button { class: "primary", r#type: "submit", "Update Event" }
                }
            }
        }
    }
}

fn truncate_minutes(datetime: &str) -> String {
    datetime.chars().take(16).collect()
}
