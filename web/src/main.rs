use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{config::AppConfig, logging, session::use_session_provider};
use ui::views::{GraphScreen, IotScreen, LoginScreen, RecoverScreen, RegisterScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/recover")]
    Recover {},
    #[route("/graphs")]
    Graphs {},
    #[route("/iot")]
    Iot {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_rooms(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Iot {},
        "{label}"
    })
}
fn nav_charts(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Graphs {},
        "{label}"
    })
}

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(AppConfig::from_env);
    use_session_provider();
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        rooms: nav_rooms,
        charts: nav_charts,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Remount the routed tree when the language changes.
        div { key: "{lang_code()}", Router::<Route> {} }
    }
}

#[component]
fn WebNavbar() -> Element {
    let nav = navigator();
    rsx! {
        AppNavbar {
            on_sign_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Login() -> Element {
    let nav = navigator();
    rsx! {
        LoginScreen {
            on_authenticated: move |_| {
                nav.push(Route::Graphs {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
            on_recover: move |_| {
                nav.push(Route::Recover {});
            },
        }
    }
}

#[component]
fn Register() -> Element {
    let nav = navigator();
    rsx! {
        RegisterScreen {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_back: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
fn Recover() -> Element {
    let nav = navigator();
    rsx! {
        RecoverScreen {
            on_back: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
fn Graphs() -> Element {
    let nav = navigator();
    rsx! {
        GraphScreen {
            on_sign_in: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
fn Iot() -> Element {
    let nav = navigator();
    rsx! {
        IotScreen {
            on_sign_in: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
