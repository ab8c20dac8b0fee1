#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<EditorConfig, EditorError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    EditorConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, EditorConfig::default());
    assert_eq!(cfg.history_limit, None);
    assert!(!cfg.strict_keys);
    assert_eq!(cfg.defaults.font_size, 24.0);
    assert_eq!(cfg.defaults.font_family, "Poppins");
    assert_eq!(cfg.defaults.color, "#000000");
}

#[test]
fn parses_all_overrides() {
    let cfg = config_from(&[
        ("CERT_EDITOR_HISTORY_LIMIT", "50"),
        ("CERT_EDITOR_STRICT_KEYS", "true"),
        ("CERT_EDITOR_DEFAULT_FONT_SIZE", "18.5"),
        ("CERT_EDITOR_DEFAULT_FONT_FAMILY", "Lora"),
        ("CERT_EDITOR_DEFAULT_COLOR", "#1a1a1a"),
    ])
    .unwrap();
    assert_eq!(cfg.history_limit, Some(50));
    assert!(cfg.strict_keys);
    assert_eq!(cfg.defaults.font_size, 18.5);
    assert_eq!(cfg.defaults.font_family, "Lora");
    assert_eq!(cfg.defaults.color, "#1a1a1a");
}

#[test]
fn strict_keys_accepts_common_spellings() {
    for raw in ["1", "true", "TRUE", "yes", " true "] {
        assert!(config_from(&[("CERT_EDITOR_STRICT_KEYS", raw)]).unwrap().strict_keys, "{raw}");
    }
    for raw in ["0", "false", "no", ""] {
        assert!(!config_from(&[("CERT_EDITOR_STRICT_KEYS", raw)]).unwrap().strict_keys, "{raw}");
    }
}

#[test]
fn rejects_bad_strict_keys() {
    let err = config_from(&[("CERT_EDITOR_STRICT_KEYS", "maybe")]).unwrap_err();
    assert!(matches!(err, EditorError::Config(ref msg) if msg.contains("CERT_EDITOR_STRICT_KEYS")));
}

#[test]
fn rejects_bad_history_limit() {
    for raw in ["-1", "ten", "1.5"] {
        let err = config_from(&[("CERT_EDITOR_HISTORY_LIMIT", raw)]).unwrap_err();
        assert!(matches!(err, EditorError::Config(_)), "{raw}");
    }
}

#[test]
fn rejects_non_positive_font_size() {
    for raw in ["0", "-4", "NaN", "big"] {
        let err = config_from(&[("CERT_EDITOR_DEFAULT_FONT_SIZE", raw)]).unwrap_err();
        assert!(matches!(err, EditorError::Config(_)), "{raw}");
    }
}

#[test]
fn blank_font_family_falls_back() {
    let cfg = config_from(&[("CERT_EDITOR_DEFAULT_FONT_FAMILY", "   ")]).unwrap();
    assert_eq!(cfg.defaults.font_family, "Poppins");
}
