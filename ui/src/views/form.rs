use dioxus::prelude::*;

/// Labelled text input bound to a string signal.
#[component]
pub fn Field(
    id: &'static str,
    label: String,
    value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] autocomplete: Option<&'static str>,
) -> Element {
    let mut value = value;
    rsx! {
        div { class: "form__field",
            label { class: "form__label", r#for: id, "{label}" }
            input {
                id,
                class: "form__input",
                r#type: input_type,
                autocomplete,
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

/// Success or error line under a form. Renders nothing when both are empty.
#[component]
pub fn StatusLine(error: Option<String>, #[props(default)] notice: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            p { class: "form__status form__status--error", role: "alert", "{message}" }
        } else if let Some(message) = notice {
            p { class: "form__status form__status--ok", role: "status", "{message}" }
        }
    }
}
