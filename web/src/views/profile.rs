//! Profile page with tag-based preferences.
//!
//! A 404 from the profile fetch is first-time setup, not a failure: the form
//! renders empty and the available tag list (independent data) still loads.
//! A successful fetch also persists `personId`, making this page one of the
//! identity-resolution entry points.

use api::{ProfileDraft, Tag};
use dioxus::prelude::*;
use ui::{AppHeader, BackButton};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut name = use_signal(String::new);
    let mut contact_no = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut birthday = use_signal(String::new);
    let mut image_id = use_signal(|| Option::<i64>::None);
    let mut preferences = use_signal(Vec::<String>::new);
    let mut new_preference = use_signal(String::new);
    let mut all_tags = use_signal(Vec::<Tag>::new);

    let _loader = use_resource(move || async move {
        let session = ui::make_session();
        let Some(user_id) = session.user_id() else {
            nav.replace(Route::Login {});
            return;
        };

        let client = ui::make_client();
        match client.get_profile(&user_id).await {
            Ok(profile) => {
                name.set(profile.name);
                contact_no.set(profile.contact_no);
                description.set(profile.description);
                birthday.set(profile.birthday);
                image_id.set(profile.image_id);
                preferences.set(profile.preferences);
                if let Some(person_id) = profile.person_id {
                    session.set_person_id(person_id);
                }
            }
            Err(err) if err.is_not_found() => {
                // No profile yet; fall through and load tags so the user can
                // fill in a fresh form.
            }
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                tracing::error!("failed to fetch profile: {err}");
                error.set(Some("Failed to fetch profile or tags.".to_string()));
                loading.set(false);
                return;
            }
        }

        match client.list_tags().await {
            Ok(tags) => all_tags.set(tags),
            Err(err) if err.is_unauthorized() => {
                nav.replace(Route::Login {});
                return;
            }
            Err(err) => {
                tracing::error!("failed to fetch tags: {err}");
                error.set(Some("Failed to fetch profile or tags.".to_string()));
            }
        }
        loading.set(false);
    });

    let mut add_preference = move |value: String| {
        let value = value.trim().to_string();
        if value.is_empty() || preferences().contains(&value) {
            return;
        }
        let mut current = preferences();
        current.push(value);
        preferences.set(current);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let session = ui::make_session();
            let Some(user_id) = session.user_id() else {
                return;
            };

            let draft = ProfileDraft {
                name: name(),
                contact_no: contact_no(),
                description: description(),
                birthday: birthday(),
                image_id: image_id(),
                preferences: preferences(),
            };

            let client = ui::make_client();
            match client.save_profile(&user_id, &draft).await {
                Ok(()) => {
                    error.set(None);
                    notice.set(Some("Profile saved successfully".to_string()));
                    // A first-time save just created the person; re-resolve so
                    // the rest of the app can use it without a reload.
                    if let Ok(api::Resolution::Resolved(person_id)) =
                        api::ensure_person_id(&client).await
                    {
                        tracing::debug!(person_id, "person identity ready after save");
                    }
                }
                Err(err) if err.is_unauthorized() => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to save profile: {err}");
                    notice.set(None);
                    error.set(Some("Failed to save profile".to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! { p { class: "loading", "Loading..." } };
    }

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "card",
                BackButton { onclick: move |_| { nav.push(Route::Dashboard {}); } }
                h1 { "Profile" }

                if let Some(err) = error() {
                    p { class: "page-error", "{err}" }
                }
                if let Some(msg) = notice() {
                    p { class: "notice", "{msg}" }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Contact Number" }
                        input {
                            r#type: "text",
                            value: contact_no(),
                            oninput: move |evt| contact_no.set(evt.value()),
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
                        label { "Birthday" }
                        input {
                            r#type: "date",
                            value: birthday(),
                            oninput: move |evt| birthday.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Preferences" }
                        input {
                            r#type: "text",
                            placeholder: "Type a preference and press Enter",
                            value: new_preference(),
                            oninput: move |evt| new_preference.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_preference(new_preference());
                                    new_preference.set(String::new());
                                }
                            },
                        }

                        div {
                            class: "chip-row",
                            for (idx, pref) in preferences().into_iter().enumerate() {
                                div {
                                    key: "{idx}",
                                    class: "chip",
                                    span { "{pref}" }
                                    button {
                                        r#type: "button",
                                        class: "chip-remove",
                                        onclick: move |_| {
                                            let mut current = preferences();
                                            current.retain(|p| p != &pref);
                                            preferences.set(current);
                                        },
                                        "×"
                                    }
                                }
                            }
                        }

                        if !all_tags().is_empty() {
                            p { class: "hint", "Available tags:" }
                            div {
                                class: "chip-row",
                                for tag in all_tags() {
                                    button {
                                        key: "{tag.id}",
                                        r#type: "button",
                                        class: "chip chip-suggestion",
                                        onclick: move |_| add_preference(tag.name.clone()),
                                        "{tag.name}"
                                    }
                                }
                            }
                        }
                    }

                    button { class: "primary", r#type: "submit", "Save Profile" }
                }
            }
        }
    }
}
