use api::{ChangePasswordRequest, RecoverPasswordRequest};
use dioxus::prelude::*;
use tracing::info;

use crate::core::{config::use_api_client, feedback};
use crate::t;

use super::form::{Field, StatusLine};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Stage {
    /// Username and dog name are checked against the account.
    #[default]
    Verify,
    /// Verified; only the new password field is shown. The account is fixed
    /// to the username that passed verification.
    ChangePassword { username: String },
}

impl Stage {
    fn change_request(&self, new_password: String) -> Option<ChangePasswordRequest> {
        match self {
            Stage::Verify => None,
            Stage::ChangePassword { username } => Some(ChangePasswordRequest {
                username: username.clone(),
                new_password,
            }),
        }
    }
}

#[component]
pub fn RecoverScreen(on_back: EventHandler<()>) -> Element {
    let client = use_api_client();
    let mut stage = use_signal(Stage::default);
    let mut username = use_signal(String::new);
    let mut dog_name = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = client.clone();
        busy.set(true);
        error.set(None);
        notice.set(None);

        match stage() {
            Stage::Verify => {
                let request = RecoverPasswordRequest {
                    username: username(),
                    dog_name: dog_name(),
                };
                spawn(async move {
                    let outcome = client.recover_password(&request).await;
                    busy.set(false);
                    match outcome {
                        Ok(()) => {
                            info!(username = %request.username, "recovery answer accepted");
                            notice.set(Some(t!("recover-verified")));
                            dog_name.set(String::new());
                            stage.set(Stage::ChangePassword {
                                username: request.username,
                            });
                        }
                        Err(err) => error.set(Some(feedback::describe(
                            &err,
                            || t!("recover-failed"),
                            || t!("error-unreachable"),
                        ))),
                    }
                });
            }
            verified @ Stage::ChangePassword { .. } => {
                let Some(request) = verified.change_request(new_password()) else {
                    busy.set(false);
                    return;
                };
                spawn(async move {
                    let outcome = client.change_password(&request).await;
                    busy.set(false);
                    match outcome {
                        Ok(()) => {
                            info!(username = %request.username, "password changed");
                            notice.set(Some(t!("recover-changed")));
                            username.set(String::new());
                            dog_name.set(String::new());
                            new_password.set(String::new());
                            stage.set(Stage::Verify);
                        }
                        Err(err) => error.set(Some(feedback::describe(
                            &err,
                            || t!("recover-change-failed"),
                            || t!("error-unreachable"),
                        ))),
                    }
                });
            }
        }
    };

    let verified_as = match stage() {
        Stage::ChangePassword { username } => Some(username),
        Stage::Verify => None,
    };
    let submit_label = if verified_as.is_some() {
        t!("recover-change")
    } else {
        t!("recover-verify")
    };

    rsx! {
        section { class: "page page-auth",
            h1 { {t!("recover-title")} }
            form { class: "form", onsubmit: submit,
                if let Some(account) = verified_as {
                    p { class: "form__account", {t!("recover-account", username = account)} }
                    Field {
                        id: "recover-new-password",
                        label: t!("auth-new-password"),
                        value: new_password,
                        input_type: "password",
                        autocomplete: "new-password",
                    }
                } else {
                    Field {
                        id: "recover-username",
                        label: t!("auth-username"),
                        value: username,
                        autocomplete: "username",
                    }
                    Field {
                        id: "recover-dog-name",
                        label: t!("auth-dog-name"),
                        value: dog_name,
                    }
                }
                StatusLine { error: error(), notice: notice() }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: busy(),
                    "{submit_label}"
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
