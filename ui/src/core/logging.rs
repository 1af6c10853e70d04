//! Logger bootstrap. Call once from each platform `main` before launching.

use tracing::{info, Level};

use super::platform::{self, Platform};

pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[logging] logger already installed ({err}); keeping existing subscriber");
    }

    info!(
        platform = %Platform::current(),
        user_agent = platform::user_agent().as_deref().unwrap_or("-"),
        version = env!("CARGO_PKG_VERSION"),
        "homewatch starting"
    );
}
