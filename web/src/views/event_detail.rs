//! Event detail: the selected event, its participants, and the viewer's own
//! registration state.
//!
//! The page is keyed by `selectedEventId` from the session store (set by the
//! dashboard click); arriving without one bounces back to the dashboard.
//! Identity is resolved first, then the event and participant list are
//! fetched with a parallel join. Organizers additionally get the participant
//! roster, an edit link, and a broadcast form for notifying participants.

use api::{EventDetail as EventPayload, NotificationBroadcast, Participation, Resolution};
use dioxus::prelude::*;
use ui::{AppHeader, BackButton};

use crate::Route;

#[component]
pub fn EventDetail() -> Element {
    let nav = use_navigator();
    let mut event = use_signal(|| Option::<EventPayload>::None);
    let mut participants = use_signal(Vec::<Participation>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let mut subject = use_signal(String::new);
    let mut content = use_signal(String::new);

    let _loader = use_resource(move || async move {
        reload(); // refetch after register/unregister

        let session = ui::make_session();
        let Some(event_id) = session.selected_event_id() else {
            nav.replace(Route::Dashboard {});
            return;
        };

        let client = ui::make_client();
        match api::ensure_person_id(&client).await {
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
                tracing::error!("failed to load profile: {err}");
                error.set(Some("Failed to load event or participants".to_string()));
                loading.set(false);
                return;
            }
        }

        let (event_result, participants_result) = futures::join!(
            client.get_event(event_id),
            client.list_participants(event_id)
        );

        let payload = match event_result {
            Ok(payload) => payload,
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                tracing::error!("failed to load event {event_id}: {err}");
                error.set(Some("Failed to load event or participants".to_string()));
                loading.set(false);
                return;
            }
        };
        let roster = match participants_result {
            Ok(roster) => roster,
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                tracing::error!("failed to load participants for {event_id}: {err}");
                error.set(Some("Failed to load event or participants".to_string()));
                loading.set(false);
                return;
            }
        };

        event.set(Some(payload));
        participants.set(roster);
        loading.set(false);
    });

    let handle_participate = move |_| {
        spawn(async move {
            notice.set(None);
            let session = ui::make_session();
            let (Some(person_id), Some(event_id)) =
                (session.person_id(), session.selected_event_id())
            else {
                notice.set(Some(
                    "Invalid person or event id. Please refresh the page and try again."
                        .to_string(),
                ));
                return;
            };

            let client = ui::make_client();
            match client.register_for_event(person_id, event_id).await {
                Ok(()) => {
                    notice.set(Some("Successfully registered!".to_string()));
                    reload.set(reload() + 1);
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    notice.set(Some("Failed to register".to_string()));
                }
            }
        });
    };

    let handle_unregister = move |_| {
        spawn(async move {
            notice.set(None);
            let session = ui::make_session();
            let (Some(person_id), Some(event_id)) =
                (session.person_id(), session.selected_event_id())
            else {
                notice.set(Some(
                    "Invalid person or event id. Please refresh the page and try again."
                        .to_string(),
                ));
                return;
            };

            let client = ui::make_client();
            match client.unregister_from_event(person_id, event_id).await {
                Ok(()) => {
                    notice.set(Some(
                        "Successfully unregistered from the event!".to_string(),
                    ));
                    reload.set(reload() + 1);
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("unregister failed: {err}");
                    notice.set(Some("Failed to unregister".to_string()));
                }
            }
        });
    };

    let handle_notify = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            notice.set(None);
            let session = ui::make_session();
            let Some(event_id) = session.selected_event_id() else {
                return;
            };
            if subject().trim().is_empty() {
                notice.set(Some("Please enter a subject.".to_string()));
                return;
            }

            let client = ui::make_client();
            let broadcast = NotificationBroadcast {
                event_id,
                subject: subject().trim().to_string(),
                content: content().trim().to_string(),
            };
            match client.notify_event(&broadcast).await {
                Ok(()) => {
                    notice.set(Some("Notification sent to participants.".to_string()));
                    subject.set(String::new());
                    content.set(String::new());
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to notify participants: {err}");
                    notice.set(Some("Failed to send notification".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { p { class: "loading", "Loading event details..." } };
    }
    if let Some(err) = error() {
        return rsx! { p { class: "page-error", "{err}" } };
    }
    let Some(payload) = event() else {
        return rsx! { p { class: "page-error", "Event not found." } };
    };

    let roster = participants();
    let person_id = ui::make_session().person_id();
    let mine = person_id.and_then(|id| api::find_participation(&roster, id).cloned());
    let is_participant = mine.is_some();
    let is_organizer = mine.as_ref().is_some_and(|p| p.is_organizer());
    let tag_name = payload
        .tag
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "card",
                BackButton { onclick: move |_| { nav.push(Route::Dashboard {}); } }

                h1 { "{payload.title}" }
                p { "{payload.description}" }
                p { class: "event-meta", "Location: {payload.location}" }
                p { class: "event-meta", "Start: {payload.event_start_dt}" }
                p { class: "event-meta", "End: {payload.event_end_dt}" }
                p { class: "event-meta", "Status: {payload.status}" }
                p { class: "event-meta", "Category: {tag_name}" }

                if let Some(msg) = notice() {
                    p { class: "notice", "{msg}" }
                }

                if !is_participant {
                    button {
                        class: "primary",
                        onclick: handle_participate,
                        "Participate in Event"
                    }
                } else {
                    button {
                        class: "danger",
                        onclick: handle_unregister,
                        "Unregister from Event"
                    }
                }

                if is_organizer {
                    div {
                        class: "organizer-panel",
                        div {
                            class: "page-actions",
                            h2 { "Participants" }
                            button {
                                class: "secondary",
                                onclick: move |_| { nav.push(Route::EventEdit {}); },
                                "Edit Event"
                            }
                        }
                        div {
                            class: "participant-list",
                            for p in roster.clone() {
                                div {
                                    key: "{p.id}",
                                    class: "participant-row",
                                    b { "Participant Name: " }
                                    "{p.person.name}"
                                    br {}
                                    b { "Role: " }
                                    "{p.role}"
                                }
                            }
                        }

                        h2 { "Notify Participants" }
                        form {
                            onsubmit: handle_notify,
                            div {
                                class: "form-field",
                                label { "Subject" }
                                input {
                                    r#type: "text",
                                    value: subject(),
                                    oninput: move |evt| subject.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { "Message" }
                                textarea {
                                    value: content(),
                                    oninput: move |evt| content.set(evt.value()),
                                }
                            }
                            button { class: "primary", r#type: "submit", "Send Notification" }
                        }
                    }
                }
            }
        }
    }
}
