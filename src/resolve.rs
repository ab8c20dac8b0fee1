//! Render-ready view of a layout with consumer defaults applied.
//!
//! Fields store only what the user set. Render collaborators need every
//! attribute filled in, plus the text to draw: the field's value, else its
//! label, else its key. `resolve_fields` produces that view in render order.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use serde::Serialize;

use crate::config::FieldDefaults;
use crate::layout::{Align, FieldValues, LayoutSnapshot, TemplateField};

/// A field with all style attributes resolved and its display text chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub key: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub align: Align,
}

/// Text to draw for `field`: its value, else its label, else its key.
#[must_use]
pub fn display_text<'a>(field: &'a TemplateField, values: &'a FieldValues) -> &'a str {
    values
        .get(&field.key)
        .map_or_else(|| field.display_label(), String::as_str)
}

#[must_use]
pub fn resolve_field(field: &TemplateField, values: &FieldValues, defaults: &FieldDefaults) -> ResolvedField {
    ResolvedField {
        key: field.key.clone(),
        text: display_text(field, values).to_string(),
        x: field.x,
        y: field.y,
        font_size: field.font_size.unwrap_or(defaults.font_size),
        font_family: field
            .font_family
            .clone()
            .unwrap_or_else(|| defaults.font_family.clone()),
        color: field.color.clone().unwrap_or_else(|| defaults.color.clone()),
        align: field.align.unwrap_or_default(),
    }
}

/// Resolve every field of `layout`, in render order.
#[must_use]
pub fn resolve_fields(layout: &LayoutSnapshot, values: &FieldValues, defaults: &FieldDefaults) -> Vec<ResolvedField> {
    layout
        .fields
        .iter()
        .map(|f| resolve_field(f, values, defaults))
        .collect()
}
