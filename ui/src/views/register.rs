use api::RegisterRequest;
use dioxus::prelude::*;
use tracing::info;

use crate::core::{config::use_api_client, feedback};
use crate::t;

use super::form::{Field, StatusLine};

#[component]
pub fn RegisterScreen(on_registered: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let client = use_api_client();
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let dog_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        let request = RegisterRequest {
            username: username(),
            password: password(),
            dog_name: dog_name(),
        };
        busy.set(true);
        error.set(None);

        spawn(async move {
            let outcome = client.register(&request).await;
            busy.set(false);
            match outcome {
                Ok(()) => {
                    info!(username = %request.username, "account registered");
                    on_registered.call(());
                }
                Err(err) => error.set(Some(feedback::describe(
                    &err,
                    || t!("register-failed"),
                    || t!("error-unreachable"),
                ))),
            }
        });
    };

    rsx! {
        section { class: "page page-auth",
            h1 { {t!("register-title")} }
            form { class: "form", onsubmit: submit,
                Field {
                    id: "register-username",
                    label: t!("auth-username"),
                    value: username,
                    autocomplete: "username",
                }
                Field {
                    id: "register-password",
                    label: t!("auth-password"),
                    value: password,
                    input_type: "password",
                    autocomplete: "new-password",
                }
                Field {
                    id: "register-dog-name",
                    label: t!("auth-dog-name"),
                    value: dog_name,
                }
                p { class: "form__hint", {t!("register-dog-hint")} }
                StatusLine { error: error() }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: busy(),
                    {t!("register-submit")}
                }
            }
            div { class: "page-auth__links",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| on_back.call(()),
                    {t!("auth-back-to-login")}
                }
            }
        }
    }
}
