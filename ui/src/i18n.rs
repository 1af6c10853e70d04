//! Localization for the `homewatch_ui` Fluent domain.
//!
//! Fluent bundles are embedded at compile time from `i18n/<lang>/homewatch_ui.ftl`
//! and looked up through the [`t!`](crate::t) macro, which routes every call
//! through the shared [`LOADER`]. `fl!` checks message ids against the en-US
//! fallback at build time, so a typo in a key fails the build.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/homewatch_ui.ftl   (fallback)
//!   pt-BR/homewatch_ui.ftl
//! ```
//!
//! Desktop and mobile pick the initial language from the OS locale list; web
//! uses `navigator.languages`. The navbar switcher calls [`set_language`].
use std::sync::Once;

use i18n_embed::{fluent::FluentLanguageLoader, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-rooms")`, `t!("iot-occupied", level = 7)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the ftl filename in every locale folder.
const DOMAIN: &str = "homewatch_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "localization bundles loaded"),
            Err(err) => warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch language at runtime. Tags that do not parse are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        warn!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// The language currently serving lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted, for the switcher.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "pt-BR"));
    }

    #[test]
    fn domain_matches_crate_and_ftl_files() {
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        for lang in ["en-US", "pt-BR"] {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn lookups_resolve_to_text() {
        init();
        let label = fl!(&*LOADER, "nav-rooms");
        assert!(!label.is_empty());
        assert_ne!(label, "nav-rooms");
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        init();
        let before = current_language();
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(current_language(), before);
    }
}
