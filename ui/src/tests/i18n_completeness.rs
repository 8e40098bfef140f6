//! Source-scan guard: every message id referenced from Rust code exists in the
//! fallback locale, and every locale covers the fallback.
//!
//! Two reference forms are recognised:
//! - `t!("key")` literal lookups (also compile-time checked by `fl!`)
//! - `*_id: "key"` fields in the static navigation / footer tables, which are
//!   resolved at runtime through `i18n::message` and get no compile-time check

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "cloaktrip-ui.ftl";
const I18N_DIR: &str = "i18n";

const NEEDLES: &[&str] = &["t!(\"", "_id: \""];

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Keys referenced by `needle"key"` occurrences, mapped to the first file seen.
fn referenced_keys(src_root: &Path) -> BTreeMap<String, PathBuf> {
    let mut found = BTreeMap::new();
    for path in rust_sources(src_root) {
        // This file spells the needles out; skip it.
        if path.ends_with("i18n_completeness.rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for needle in NEEDLES {
            for (pos, _) in content.match_indices(needle) {
                let rest = &content[pos + needle.len()..];
                let Some(end) = rest.find('"') else { continue };
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.entry(key.to_string()).or_insert_with(|| path.clone());
                }
            }
        }
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn referenced_keys_exist_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback = parse_ftl_keys(
        &fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file"),
    );
    assert!(!fallback.is_empty(), "No keys parsed from {fallback_file:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(
        referenced.contains_key("nav-comparison"),
        "navigation table ids were not picked up by the scan"
    );

    let missing: Vec<String> = referenced
        .iter()
        .filter(|(key, _)| !fallback.contains(*key))
        .map(|(key, file)| format!("{key}  ({})", file.display()))
        .collect();
    assert!(
        missing.is_empty(),
        "Referenced keys missing in en-US ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let mut report = Vec::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale {locale} missing expected file {path:?}"));
        let keys = parse_ftl_keys(&content);
        let gaps: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !gaps.is_empty() {
            report.push(format!("  {locale}: {}", gaps.join(", ")));
        }
    }
    assert!(
        report.is_empty(),
        "Locales with missing translations relative to en-US:\n{}",
        report.join("\n")
    );

    let unused: Vec<_> = fallback
        .iter()
        .filter(|k| !referenced.contains_key(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: {} fallback keys unused: {}", unused.len(), unused.join(", "));
    }
}
