// Chunk: docs/chunks/settings_resolver - Default and per-filetype settings

//! Integration tests for settings documents as users write them.

use std::fs;

use lite_highlight_settings::{
    load, load_or_default, parse_str, FiletypeRegistry, LineNumbers, RenderWhitespace,
    ResolvedSettings, Settings, SettingsError, DEFAULT_FONT_SIZE,
};
use tempfile::TempDir;

#[test]
fn test_partial_override_differs_in_one_key() {
    let resolved = parse_str(
        r#"{
            "editor.tabSize": 2,
            "editor.fontSize": 13,
            "editor.rulers": [100],
            "[python]": { "editor.tabSize": 4 }
        }"#,
    )
    .unwrap();

    let expected = Settings {
        tab_size: 4,
        ..resolved.default.clone()
    };
    assert_eq!(resolved.for_filetype("python"), &expected);
    assert_eq!(resolved.default.tab_size, 2);
    assert_eq!(resolved.default.font_size, 13.0);
}

#[test]
fn test_malformed_leaf_does_not_abort_document() {
    let resolved = parse_str(
        r#"{
            "editor.minimap.enabled": "no",
            "editor.lineNumbers": "relative",
            "editor.fontSize": "big",
            "editor.renderWhitespace": "all"
        }"#,
    )
    .unwrap();

    assert!(resolved.default.minimap_enabled);
    assert_eq!(resolved.default.font_size, DEFAULT_FONT_SIZE);
    assert_eq!(resolved.default.line_numbers, LineNumbers::Relative);
    assert_eq!(resolved.default.render_whitespace, RenderWhitespace::All);
}

#[test]
fn test_last_occurrence_wins() {
    // serde_json keeps the last value for a duplicated key.
    let resolved = parse_str(r#"{ "editor.tabSize": 2, "editor.tabSize": 6 }"#).unwrap();
    assert_eq!(resolved.default.tab_size, 6);
}

#[test]
fn test_non_object_root_is_an_error() {
    let err = parse_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, SettingsError::NotAnObject { found: "array" }));
    assert!(err.to_string().contains("must be a JSON object"));
}

#[test]
fn test_several_filetypes() {
    let resolved = parse_str(
        r#"{
            "workbench.colorTheme": "Gruvbox",
            "[rust]": { "editor.rulers": [100] },
            "[markdown]": { "editor.renderWhitespace": "none", "editor.minimap.enabled": false }
        }"#,
    )
    .unwrap();

    let registry = FiletypeRegistry::new();
    let rust = resolved.for_path(&registry, "src/main.rs".as_ref());
    assert_eq!(rust.rulers, vec![100]);
    assert_eq!(rust.color_theme, "Gruvbox");

    let md = resolved.for_path(&registry, "README.md".as_ref());
    assert_eq!(md.render_whitespace, RenderWhitespace::None);
    assert!(!md.minimap_enabled);
    assert_eq!(md.color_theme, "Gruvbox");
    assert!(md.rulers.is_empty());

    assert_eq!(resolved.filetypes.len(), 2);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "files.exclude": ["dist"], "[go]": { "editor.insertSpaces": false } }"#)
        .unwrap();

    let resolved = load(&path).unwrap();
    assert_eq!(resolved.default.files_exclude, vec!["dist".to_string()]);
    assert!(!resolved.for_filetype("go").insert_spaces);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));

    let resolved = load_or_default(&path).unwrap();
    assert_eq!(resolved, ResolvedSettings::default());
}
