use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};
use std::collections::HashMap;

/// Staff sign-in, served at `/`. Every redirect out of the staff pages
/// lands here.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(Route::StaffDashboard {});
            }
            Err(e) => {
                let err_str = e.to_string();
                match AppError::from_server_error(&err_str) {
                    Some(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                    Some(err) => error_msg.set(Some(err.message)),
                    None => error_msg.set(Some("Sign-in failed. Please try again.".to_string())),
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "centered-page",
            Card { class: "login-card",
                CardHeader {
                    CardTitle { "Staff Sign In" }
                    CardDescription { "Use your firm email address" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "login-error", role: "alert", "{err}" }
                    }
                    form { class: "login-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            kind: "email",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            kind: "password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            submit: true,
                            busy: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
