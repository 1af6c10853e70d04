use api::LoginRequest;
use dioxus::prelude::*;
use tracing::info;

use crate::core::{
    config::use_api_client,
    feedback,
    session::{use_session, Session},
};
use crate::t;

use super::form::{Field, StatusLine};

#[component]
pub fn LoginScreen(
    on_authenticated: EventHandler<()>,
    on_register: EventHandler<()>,
    on_recover: EventHandler<()>,
) -> Element {
    let client = use_api_client();
    let mut session = use_session();
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        let request = LoginRequest {
            username: username(),
            password: password(),
        };
        busy.set(true);
        error.set(None);

        spawn(async move {
            let outcome = client.login(&request).await;
            busy.set(false);
            match outcome {
                Ok(response) => {
                    info!(username = %request.username, "login accepted");
                    session.sign_in(Session::new(response.token, request.username));
                    on_authenticated.call(());
                }
                Err(err) => {
                    let message = feedback::describe(
                        &err,
                        || t!("login-failed"),
                        || t!("error-unreachable"),
                    );
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { {t!("login-title")} }
            form { class: "form", onsubmit: submit,
                Field {
                    id: "login-username",
                    label: t!("auth-username"),
                    value: username,
                    autocomplete: "username",
                }
                Field {
                    id: "login-password",
                    label: t!("auth-password"),
                    value: password,
                    input_type: "password",
                    autocomplete: "current-password",
                }
                StatusLine { error: error() }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: busy(),
                    {t!("login-submit")}
                }
            }
            div { class: "page-auth__links",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_register.call(()),
                    {t!("login-register-link")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_recover.call(()),
                    {t!("login-recover-link")}
                }
            }
        }
    }
}
