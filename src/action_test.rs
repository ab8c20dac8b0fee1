#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// FieldPatch
// =============================================================

#[test]
fn patch_default_is_empty() {
    assert!(FieldPatch::default().is_empty());
    assert!(!FieldPatch { color: Some("#fff".into()), ..Default::default() }.is_empty());
}

#[test]
fn patch_applies_only_present_attributes() {
    let mut field = TemplateField::new("name", 10.0, 20.0);
    field.font_family = Some("Inter".into());
    field.color = Some("#111111".into());

    let patch = FieldPatch { font_size: Some(40.0), color: Some("#ff0000".into()), ..Default::default() };
    patch.apply_to(&mut field);

    assert_eq!(field.font_size, Some(40.0));
    assert_eq!(field.color.as_deref(), Some("#ff0000"));
    assert_eq!(field.font_family.as_deref(), Some("Inter"));
    assert_eq!(field.key, "name");
    assert_eq!((field.x, field.y), (10.0, 20.0));
}

#[test]
fn patch_sets_label_and_align() {
    let mut field = TemplateField::new("date", 0.0, 0.0);
    let patch = FieldPatch { label: Some("Issued on".into()), align: Some(Align::Right), ..Default::default() };
    patch.apply_to(&mut field);
    assert_eq!(field.display_label(), "Issued on");
    assert_eq!(field.align, Some(Align::Right));
}

#[test]
fn empty_patch_leaves_field_unchanged() {
    let mut field = TemplateField::new("name", 1.0, 2.0).with_label("Name");
    let before = field.clone();
    FieldPatch::default().apply_to(&mut field);
    assert_eq!(field, before);
}

#[test]
fn patch_deserializes_camel_case() {
    let patch: FieldPatch = serde_json::from_value(json!({ "fontSize": 30, "fontFamily": "Lora" })).unwrap();
    assert_eq!(patch.font_size, Some(30.0));
    assert_eq!(patch.font_family.as_deref(), Some("Lora"));
    assert!(patch.color.is_none());
}

// =============================================================
// Action wire format
// =============================================================

#[test]
fn move_field_uses_kebab_case_tag() {
    let action = Action::MoveField { key: "name".into(), x: 150.0, y: 120.0 };
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value, json!({ "type": "move-field", "key": "name", "x": 150.0, "y": 120.0 }));
}

#[test]
fn unit_actions_parse_from_tag_only() {
    let undo: Action = serde_json::from_value(json!({ "type": "undo" })).unwrap();
    let redo: Action = serde_json::from_value(json!({ "type": "redo" })).unwrap();
    assert_eq!(undo, Action::Undo);
    assert_eq!(redo, Action::Redo);
}

#[test]
fn add_field_parses_default_value() {
    let action: Action = serde_json::from_value(json!({
        "type": "add-field",
        "field": { "key": "c", "x": 0, "y": 0 },
        "defaultValue": "hello"
    }))
    .unwrap();
    match action {
        Action::AddField { field, default_value } => {
            assert_eq!(field.key, "c");
            assert_eq!(default_value.as_deref(), Some("hello"));
        }
        other => panic!("expected AddField, got {other:?}"),
    }
}

#[test]
fn select_null_clears() {
    let action: Action = serde_json::from_value(json!({ "type": "select", "key": null })).unwrap();
    assert_eq!(action, Action::Select { key: None });
}

#[test]
fn init_without_values_defaults_empty() {
    let action: Action = serde_json::from_value(json!({
        "type": "init",
        "layout": { "width": 1200, "height": 850, "orientation": "landscape", "fields": [] }
    }))
    .unwrap();
    match action {
        Action::Init { values, .. } => assert!(values.is_empty()),
        other => panic!("expected Init, got {other:?}"),
    }
}

#[test]
fn unknown_action_type_rejected() {
    assert!(serde_json::from_value::<Action>(json!({ "type": "delete-field", "key": "a" })).is_err());
}

// =============================================================
// Classification
// =============================================================

#[test]
fn mutating_classification() {
    let field = TemplateField::new("a", 0.0, 0.0);
    let mutating = [
        Action::SetValue { key: "a".into(), value: "v".into() },
        Action::MoveField { key: "a".into(), x: 1.0, y: 1.0 },
        Action::StyleField { key: "a".into(), patch: FieldPatch::default() },
        Action::AddField { field, default_value: None },
    ];
    for action in &mutating {
        assert!(action.is_mutating(), "{} should be mutating", action.name());
    }

    let non_mutating = [
        Action::Init { layout: LayoutSnapshot::default(), values: FieldValues::new() },
        Action::Select { key: Some("a".into()) },
        Action::Undo,
        Action::Redo,
    ];
    for action in &non_mutating {
        assert!(!action.is_mutating(), "{} should not be mutating", action.name());
    }
}

#[test]
fn names_match_wire_tags() {
    let actions = [
        Action::Select { key: None },
        Action::SetValue { key: "a".into(), value: String::new() },
        Action::Undo,
    ];
    for action in actions {
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], json!(action.name()));
    }
}
