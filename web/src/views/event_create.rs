//! Event creation. The creator must have a person profile (the server
//! records them as the organizer), so identity is resolved before the form
//! is shown; a missing profile blocks the page with a pointer to profile
//! setup instead of failing on submit.

use api::{EventDraft, Resolution};
use dioxus::prelude::*;
use ui::{AppHeader, BackButton};

use crate::Route;

#[component]
pub fn EventCreate() -> Element {
    let nav = use_navigator();
    let mut person_id = use_signal(|| Option::<i64>::None);
    let mut blocker = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut event_start_dt = use_signal(String::new);
    let mut event_end_dt = use_signal(String::new);
    let mut tag = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let session = ui::make_session();
        if session.user_id().is_none() {
            nav.replace(Route::Login {});
            return;
        }

        let client = ui::make_client();
        match api::ensure_person_id(&client).await {
            Ok(Resolution::Resolved(id)) => person_id.set(Some(id)),
            Ok(Resolution::NoProfile) => {
                blocker.set(Some(
                    "No person profile found. Please create your profile first.".to_string(),
                ));
            }
            Ok(Resolution::NotLoggedIn) => {
                nav.replace(Route::Login {});
            }
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
            }
            Err(err) => {
                tracing::error!("failed to load profile: {err}");
                blocker.set(Some("Failed to load profile.".to_string()));
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let Some(creator) = person_id() else {
                return;
            };
            if tag().trim().is_empty() {
                error.set(Some("Please enter a tag.".to_string()));
                return;
            }

            let draft = EventDraft {
                title: title(),
                description: description(),
                location: location(),
                event_start_dt: event_start_dt(),
                event_end_dt: event_end_dt(),
                tag: tag().trim().to_string(),
            };

            let client = ui::make_client();
            match client.create_event(creator, &draft).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to create event: {err}");
                    error.set(Some("Failed to create event".to_string()));
                }
            }
        });
    };

    if let Some(msg) = blocker() {
        return rsx! {
            div {
                class: "page",
                AppHeader {}
                div {
                    class: "card narrow",
                    BackButton { onclick: move |_| { nav.push(Route::Dashboard {}); } }
                    p { class: "page-error", "{msg}" }
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::Profile {}); },
                        "Go to Profile"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "card",
                BackButton { onclick: move |_| { nav.push(Route::Dashboard {}); } }
                h1 { "Create Event" }

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
                            placeholder: "Enter a tag for your event",
                            value: tag(),
                            oninput: move |evt| tag.set(evt.value()),
                        }
                    }
                    button { class: "primary", r#type: "submit", "Create Event" }
                }
            }
        }
    }
}
