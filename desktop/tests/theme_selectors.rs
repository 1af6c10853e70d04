#![cfg(test)]
/*!
Selector lint for the shared theme embedded by the desktop build.

The screens in `ui` render these class names; if a refactor renames one in
markup, update `REQUIRED_SELECTORS` together with `ui/assets/theme/main.css`.
A substring check is enough as an early warning.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-auth",
    ".page-signed-out",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Forms
    ".form {",
    ".form__field",
    ".form__input",
    ".form__status--error",
    ".form__status--ok",
    // Graphs & charts
    ".graphs__controls",
    ".graphs__panels",
    ".chart-panel",
    ".chart-panel__placeholder",
    ".chart__grid",
    ".chart__tick",
    ".chart-legend__swatch",
    // IoT
    ".iot__grid",
    ".iot__actions",
    ".iot-card",
    ".iot-card__stepper",
    ".iot-switch--on",
    ".iot-occupancy--occupied",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn status_modifiers_come_in_pairs() {
    for block in [".iot__status", ".graphs__status", ".form__status"] {
        assert!(
            THEME_CSS.contains(&format!("{block}--error")),
            "{block} lacks an error modifier"
        );
    }
}
