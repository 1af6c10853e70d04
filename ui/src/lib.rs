//! Shared UI crate for Homewatch: screens, charts, session handling and the
//! client-side reading pipeline used by every platform launcher.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

use dioxus::prelude::*;

/// Shared theme for launchers that load stylesheets as assets (web, mobile).
/// The desktop launcher embeds the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
