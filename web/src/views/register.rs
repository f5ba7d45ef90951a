//! Registration page. The confirm-password check is purely local; the
//! server owns every other validation rule.

use dioxus::prelude::*;
use ui::AppHeader;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            loading.set(true);
            let client = ui::make_client();
            match client.register(email().trim(), &password()).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    loading.set(false);
                    error.set(Some(format!("Registration failed. {err}")));
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
                h1 { "Register" }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_register,

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
                    div {
                        class: "form-field",
                        label { "Confirm Password" }
                        input {
                            r#type: "password",
                            value: confirm_password(),
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }

                p {
                    class: "form-footnote",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login here" }
                }
            }
        }
    }
}
