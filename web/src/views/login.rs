//! Login page: email/password form against `POST /auth/login`.

use dioxus::prelude::*;
use ui::AppHeader;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let client = ui::make_client();
            match client.login(&e, &p).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    loading.set(false);
                    error.set(Some(
                        "Login failed. Please check your credentials.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            AppHeader {}

            div {
                class: "card narrow",
                h1 { "Login" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Log In" }
                    }
                }

                p {
                    class: "form-footnote",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
            }
        }
    }
}
