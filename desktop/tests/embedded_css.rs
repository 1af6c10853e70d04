#![cfg(test)]
//! The desktop launcher inlines `ui/assets/theme/main.css` with `include_str!`.
//! A truncated or moved theme would only show up at runtime, so check it here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-light-on", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn every_custom_property_used_is_declared() {
    let declared: Vec<&str> = EMBEDDED_CSS
        .lines()
        .filter_map(|line| line.trim().strip_prefix("--"))
        .filter_map(|rest| rest.split(':').next())
        .collect();

    let mut undeclared = Vec::new();
    for usage in EMBEDDED_CSS.split("var(--").skip(1) {
        let name = usage
            .split(|c: char| c == ')' || c == ',')
            .next()
            .unwrap_or_default();
        if !declared.contains(&name) {
            undeclared.push(name.to_string());
        }
    }
    undeclared.sort();
    undeclared.dedup();
    assert!(undeclared.is_empty(), "undeclared custom properties: {undeclared:?}");
}
