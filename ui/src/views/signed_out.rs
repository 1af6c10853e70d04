use dioxus::prelude::*;

use crate::t;

/// Stand-in for screens that need a session token.
#[component]
pub fn SignedOutNotice(on_sign_in: EventHandler<()>) -> Element {
    rsx! {
        section { class: "page page-signed-out",
            p { class: "page-signed-out__message", {t!("session-required")} }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| on_sign_in.call(()),
                {t!("session-sign-in")}
            }
        }
    }
}
