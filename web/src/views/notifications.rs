//! Notification inbox for the logged-in person, with an unread-only filter
//! and per-notification read receipts.

use api::{Notification, Resolution};
use dioxus::prelude::*;
use ui::{AppHeader, BackButton};

use crate::Route;

#[component]
pub fn Notifications() -> Element {
    let nav = use_navigator();
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut show_unread_only = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    // Re-runs when the unread filter is toggled or a receipt is posted.
    let _loader = use_resource(move || async move {
        let unread_only = show_unread_only();
        reload();

        let session = ui::make_session();
        if session.user_id().is_none() {
            nav.replace(Route::Login {});
            return;
        }

        let client = ui::make_client();
        let person_id = match session.person_id() {
            Some(id) => id,
            None => match api::ensure_person_id(&client).await {
                Ok(Resolution::Resolved(id)) => id,
                Ok(Resolution::NoProfile) => {
                    error.set(Some(
                        "Create your profile to receive notifications.".to_string(),
                    ));
                    return;
                }
                Ok(Resolution::NotLoggedIn) => {
                    nav.replace(Route::Login {});
                    return;
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                    return;
                }
                Err(err) => {
                    tracing::error!("failed to load profile: {err}");
                    error.set(Some("Failed to fetch notifications.".to_string()));
                    return;
                }
            },
        };

        match client.list_notifications(person_id, unread_only).await {
            Ok(list) => {
                error.set(None);
                notifications.set(list);
            }
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
            }
            Err(err) => {
                tracing::error!("failed to fetch notifications: {err}");
                error.set(Some("Failed to fetch notifications.".to_string()));
            }
        }
    });

    let handle_mark_read = move |id: i64| {
        spawn(async move {
            let client = ui::make_client();
            match client.mark_notification_read(id).await {
                Ok(()) => reload.set(reload() + 1),
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to mark notification {id} as read: {err}");
                    error.set(Some("Failed to mark notification as read.".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "content",
                BackButton { onclick: move |_| { nav.push(Route::Dashboard {}); } }

                div {
                    class: "page-actions",
                    h1 { "Notifications" }
                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: show_unread_only(),
                            onchange: move |evt| show_unread_only.set(evt.checked()),
                        }
                        span { "Show unread only" }
                    }
                }

                if let Some(err) = error() {
                    p { class: "page-error", "{err}" }
                }

                div {
                    class: "notification-list",
                    for n in notifications() {
                        div {
                            key: "{n.id}",
                            class: "notification-card",
                            div {
                                class: "notification-meta",
                                span { "{n.created_dt}" }
                                if n.is_unread() {
                                    span { class: "status-unread", "Unread" }
                                } else {
                                    span { class: "status-read", "Read" }
                                }
                            }
                            h2 { "{n.subject}" }
                            p { "{n.content}" }
                            if n.is_unread() {
                                button {
                                    class: "link-button",
                                    onclick: move |_| handle_mark_read(n.id),
                                    "Mark as Read"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
