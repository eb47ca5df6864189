//! Fluent catalog checks for every embedded locale.
//!
//! - every `t!("…")` key used under `src/` exists in the fallback bundle
//! - every locale defines exactly the fallback's keys, once each
//! - the key families built from enums (`status-*`, `trend-mode-*`) cover
//!   every variant, and the filter bar's labels are all present

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use ui::core::automation::Status;

const FALLBACK: &str = "en-US";
const BUNDLE: &str = "impactboard-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids (`id = value`) in a bundle, in file order. Terms, comments,
/// attributes and select-expression variants are skipped.
fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id.starts_with(|c: char| c.is_ascii_lowercase())
                && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
        .map(str::to_string)
        .collect()
}

fn bundles() -> BTreeMap<String, Vec<String>> {
    let root = crate_root().join("i18n");
    fs::read_dir(&root)
        .expect("i18n directory exists")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            let locale = entry.file_name().to_string_lossy().into_owned();
            let source = fs::read_to_string(entry.path().join(BUNDLE))
                .unwrap_or_else(|err| panic!("{locale} has no {BUNDLE}: {err}"));
            (locale, message_ids(&source))
        })
        .collect()
}

/// Literal keys passed to `t!` in every `.rs` file under `dir`.
fn referenced_keys(dir: &Path, keys: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, keys);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).expect("readable source file");
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                keys.insert(key.to_string());
            }
        }
    }
}

fn fallback_keys() -> BTreeSet<String> {
    bundles()
        .remove(FALLBACK)
        .expect("fallback bundle present")
        .into_iter()
        .collect()
}

#[test]
fn source_keys_exist_in_fallback() {
    let mut used = BTreeSet::new();
    referenced_keys(&crate_root().join("src"), &mut used);
    assert!(used.contains("nav-dashboard"), "scanner found no keys");

    let defined = fallback_keys();
    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(missing.is_empty(), "keys used in src/ but missing from {FALLBACK}: {missing:?}");
}

#[test]
fn locales_match_the_fallback_exactly() {
    let bundles = bundles();
    assert!(bundles.contains_key("es-ES"));
    let fallback: BTreeSet<_> = bundles[FALLBACK].iter().cloned().collect();

    for (locale, ids) in &bundles {
        let unique: BTreeSet<_> = ids.iter().cloned().collect();
        assert_eq!(unique.len(), ids.len(), "{locale} defines a key twice");

        let missing: Vec<_> = fallback.difference(&unique).collect();
        let extra: Vec<_> = unique.difference(&fallback).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{locale}: missing {missing:?}, extra {extra:?}"
        );
    }
}

#[test]
fn enum_label_families_are_complete() {
    let defined = fallback_keys();

    let statuses = Status::ALL.iter().map(|status| format!("status-{}", status.as_str()));
    let modes = ["hours", "value", "both"].iter().map(|mode| format!("trend-mode-{mode}"));
    for key in statuses.chain(modes) {
        assert!(defined.contains(&key), "missing {key}");
    }

    for field in ["search", "department", "tag", "author", "status", "customer"] {
        let key = format!("filter-{field}-label");
        assert!(defined.contains(&key), "missing {key}");
    }
    for any in ["department", "tag", "author", "status"] {
        let key = format!("filter-any-{any}");
        assert!(defined.contains(&key), "missing {key}");
    }
}

#[test]
fn plural_variants_are_not_mistaken_for_messages() {
    let ids = message_ids("list-count = { $count ->\n    [one] one\n   *[other] many\n}\n-brand = Impactboard\n");
    assert_eq!(ids, ["list-count"]);
}
