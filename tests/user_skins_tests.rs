//! Integration tests for saving and deleting user skins.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use skinner::settings::SettingsStore;
use skinner::skins;

fn seed_settings(packages_dir: &Path, target: &str, body: &Value) {
    let path = SettingsStore::target_path(packages_dir, target);
    fs::create_dir_all(path.parent().expect("parent")).expect("create User dir");
    fs::write(&path, serde_json::to_string_pretty(body).expect("serialize")).expect("seed");
}

#[test]
fn save_captures_exactly_the_templated_keys() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pkgs = tmp.path();
    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "A", "theme": "B", "font_size": 12 }),
    );
    seed_settings(
        pkgs,
        "Skinner",
        &json!({ "skin-template": { "Preferences": ["color_scheme", "theme"] } }),
    );

    skins::save_user_skin(pkgs, "X").expect("save skin");

    let registry = skins::scan(pkgs);
    let skin = registry.find("User", "X").expect("saved skin resolves");
    assert_eq!(
        Value::Object(skin.targets["Preferences"].clone()),
        json!({ "color_scheme": "A", "theme": "B" })
    );
    // font_size was not templated and must be excluded
    assert!(skin.targets["Preferences"].get("font_size").is_none());
}

#[test]
fn save_without_template_uses_the_default() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pkgs = tmp.path();
    seed_settings(
        pkgs,
        "Preferences",
        &json!({
            "color_scheme": "A",
            "theme": "B",
            "font_face": "Iosevka",
            "word_wrap": true
        }),
    );

    skins::save_user_skin(pkgs, "Default Capture").expect("save skin");

    let registry = skins::scan(pkgs);
    let skin = registry
        .find("User", "Default Capture")
        .expect("saved skin resolves");
    let prefs = &skin.targets["Preferences"];
    assert_eq!(prefs.get("color_scheme"), Some(&json!("A")));
    assert_eq!(prefs.get("theme"), Some(&json!("B")));
    assert_eq!(prefs.get("font_face"), Some(&json!("Iosevka")));
    // untemplated keys stay out of the capture
    assert!(prefs.get("word_wrap").is_none());
}

#[test]
fn save_overwrites_same_name_and_keeps_others() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pkgs = tmp.path();
    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "old.cs", "theme": "old.theme" }),
    );
    skins::save_user_skin(pkgs, "Keep").expect("save first skin");
    skins::save_user_skin(pkgs, "Evolving").expect("save second skin");

    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "new.cs", "theme": "new.theme" }),
    );
    skins::save_user_skin(pkgs, "Evolving").expect("overwrite skin");

    let registry = skins::scan(pkgs);
    let evolving = registry.find("User", "Evolving").expect("overwritten skin");
    assert_eq!(
        evolving.targets["Preferences"].get("color_scheme"),
        Some(&json!("new.cs"))
    );
    let keep = registry.find("User", "Keep").expect("untouched skin");
    assert_eq!(
        keep.targets["Preferences"].get("color_scheme"),
        Some(&json!("old.cs"))
    );
}

#[test]
fn delete_removes_from_user_listing_only() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pkgs = tmp.path();
    fs::create_dir_all(pkgs.join("Other")).expect("create package dir");
    fs::write(
        pkgs.join("Other").join("O.skins"),
        r#"{ "X": { "Preferences": { "theme": "t", "color_scheme": "c" } } }"#,
    )
    .expect("write package skins");
    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "A", "theme": "B" }),
    );
    skins::save_user_skin(pkgs, "X").expect("save user skin");

    skins::delete_user_skin(pkgs, "X").expect("delete user skin");

    let registry = skins::scan(pkgs);
    assert!(registry.find("User", "X").is_err());
    // the same-named skin from another package is unaffected
    assert!(registry.find("Other", "X").is_ok());
}

#[test]
fn save_then_apply_roundtrip_restores_settings() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pkgs = tmp.path();
    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "A", "theme": "B", "font_size": 12 }),
    );
    skins::save_user_skin(pkgs, "Snapshot").expect("save skin");

    // drift the live settings away from the snapshot
    seed_settings(
        pkgs,
        "Preferences",
        &json!({ "color_scheme": "Z", "theme": "Z", "font_size": 12 }),
    );

    let registry = skins::scan(pkgs);
    let skin = registry.find("User", "Snapshot").expect("snapshot resolves");
    skinner::settings::apply(pkgs, skin);

    let store = SettingsStore::load(pkgs, "Preferences").expect("load prefs");
    assert_eq!(store.get("color_scheme"), Some(&json!("A")));
    assert_eq!(store.get("theme"), Some(&json!("B")));
    assert_eq!(store.get("font_size"), Some(&json!(12)));
}
