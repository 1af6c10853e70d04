use crate::core::session::use_session;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors, so `ui` never sees a `Route` enum.
///
/// Each function receives the localized label and returns a `Link` (or any
/// element styled as `navbar__link`) that already contains it:
///
/// ```ignore
/// register_nav(NavBuilder {
///     rooms: |label| rsx!( Link { class: "navbar__link", to: Route::Iot {}, "{label}" } ),
///     charts: |label| rsx!( Link { class: "navbar__link", to: Route::Graphs {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub rooms: fn(label: &str) -> Element,
    pub charts: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("navigation builder already registered");
    }
}

#[component]
pub fn AppNavbar(on_sign_out: EventHandler<()>) -> Element {
    i18n::init();

    let mut session = use_session();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Provided by the launcher; its root is keyed on this value so a switch remounts every screen.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                debug!(lang = %tag, "language switched");
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => warn!(%err, lang = %tag, "language switch failed"),
        }
    };

    let signed_in = session.current();
    let links = match (signed_in.as_ref(), NAV_BUILDER.get()) {
        (Some(_), Some(builder)) => Some((
            (builder.rooms)(&t!("nav-rooms")),
            (builder.charts)(&t!("nav-charts")),
        )),
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Homewatch" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some((rooms, charts)) = links {
                    nav { class: "navbar__links",
                        {rooms}
                        {charts}
                    }
                }

                div { class: "navbar__actions",
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang}",
                                oninput: on_change,
                                for code in langs().into_iter() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }

                    if let Some(active) = signed_in {
                        span { class: "navbar__user",
                            "{active.username}"
                            if active.is_admin() {
                                span { class: "navbar__badge", "admin" }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "button button--ghost navbar__sign-out",
                            onclick: move |_| {
                                session.sign_out();
                                on_sign_out.call(());
                            },
                            {t!("nav-sign-out")}
                        }
                    }
                }
            }
        }
    }
}
