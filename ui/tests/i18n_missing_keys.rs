use std::collections::{BTreeMap, BTreeSet};

/// Translation completeness check for `homewatch_ui.ftl`.
///
/// Every non-fallback locale must define each en-US message and use the same
/// `{ $variable }` placeholders. Parsing is line based: comments, attributes
/// and continuation lines are skipped.
const EN_US: &str = include_str!("../i18n/en-US/homewatch_ui.ftl");
const PT_BR: &str = include_str!("../i18n/pt-BR/homewatch_ui.ftl");

const LOCALES: &[(&str, &str)] = &[("pt-BR", PT_BR)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let translated = messages(src, locale);
        let missing: Vec<&str> = fallback
            .keys()
            .filter(|key| !translated.contains_key(*key))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "{locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        for (key, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&key) {
                assert_eq!(&vars, expected, "{locale}: placeholders differ for `{key}`");
            }
        }
    }
}

#[test]
fn no_locale_defines_extra_keys() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        let extra: Vec<String> = messages(src, locale)
            .into_keys()
            .filter(|key| !fallback.contains_key(key))
            .collect();
        assert!(extra.is_empty(), "{locale} defines unknown keys: {extra:?}");
    }
}

/// Message id -> placeholder names. Panics on a duplicate id.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with(['[', '@']) {
            continue;
        }
        let previous = out.insert(key.to_string(), placeholders(value));
        assert!(previous.is_none(), "{locale}: duplicate key `{key}`");
    }
    out
}

fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
