use std::collections::{BTreeMap, BTreeSet};

/// Locale parity checks against the fallback (en-US) `cloaktrip-ui.ftl`.
///
/// Lightweight line parser, not a Fluent parser:
/// - comment lines (`#`) and attribute lines (`.`) are skipped
/// - `key = value` defines a message
/// - `{ $name }` inside a value is a variable the translation must keep
///
/// Adding a locale: create `ui/i18n/<locale>/cloaktrip-ui.ftl` with every
/// en-US key, then register it in `LOCALES`.
const EN_US: &str = include_str!("../i18n/en-US/cloaktrip-ui.ftl");
const LOCALES: &[(&str, &str)] = &[("hi-IN", include_str!("../i18n/hi-IN/cloaktrip-ui.ftl"))];

/// Message id -> set of variables referenced in its value.
fn messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        let vars = variables(value);
        assert!(
            out.insert(key.to_string(), vars).is_none(),
            "Duplicate key `{key}` in {locale}"
        );
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(" }").map(|(name, _)| name.to_string()))
        .collect()
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = messages(src, locale);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|k| !keys.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn translations_keep_fallback_variables() {
    let fallback = messages(EN_US, "en-US");
    assert_eq!(
        fallback.get("not-found-body").map(|v| v.iter().cloned().collect::<Vec<_>>()),
        Some(vec!["path".to_string()])
    );

    for (locale, src) in LOCALES {
        for (key, vars) in messages(src, locale) {
            if let Some(expected) = fallback.get(&key) {
                assert_eq!(&vars, expected, "{locale}: `{key}` variables differ from en-US");
            }
        }
    }
}

#[test]
fn menu_labels_are_translated() {
    let fallback = messages(EN_US, "en-US");
    for (locale, src) in LOCALES {
        for line in src.lines().filter(|l| l.starts_with("nav-")) {
            let (key, value) = line.split_once('=').expect("message line");
            let english = EN_US
                .lines()
                .find(|l| l.split_once('=').map(|(k, _)| k.trim()) == Some(key.trim()))
                .and_then(|l| l.split_once('=').map(|(_, v)| v.trim()))
                .expect("key exists in en-US");
            assert!(fallback.contains_key(key.trim()));
            assert_ne!(value.trim(), english, "{locale}: `{}` is untranslated", key.trim());
        }
    }
}
