//! Layout model: template fields, the canvas snapshot, and the persisted pair.
//!
//! This module defines what sits on a certificate canvas (`TemplateField`,
//! `LayoutSnapshot`) and the `{layout, values}` pair (`Snapshot`) that the
//! editor hands to persistence and rendering collaborators.
//!
//! Data flows into this layer from storage (JSON deserialization) and out of
//! it through [`crate::editor::Editor::snapshot`]. Field order is render
//! order; field identity is the `key`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Current text per field key. Keys need not match the layout's fields.
pub type FieldValues = HashMap<String, String>;

/// Canvas orientation. Informational only; width/height are not constrained by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

/// Horizontal text alignment of a field around its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One placeable text field on a certificate layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    /// Stable identity for selection, value lookup, and canvas node binding.
    pub key: String,
    /// Display name. Consumers fall back to `key` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// CSS color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl TemplateField {
    /// A bare field at `(x, y)` with every optional attribute unset.
    #[must_use]
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            key: key.into(),
            label: None,
            x,
            y,
            font_size: None,
            font_family: None,
            color: None,
            align: None,
        }
    }

    /// Builder-style label setter.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label shown in editor chrome: the label, or the key when unset.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Canvas dimensions, orientation, and the ordered field collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub orientation: Orientation,
    /// Insertion order is render order.
    #[serde(default)]
    pub fields: Vec<TemplateField>,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self { width: 1200.0, height: 850.0, orientation: Orientation::Landscape, fields: Vec::new() }
    }
}

impl LayoutSnapshot {
    /// An empty layout of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64, orientation: Orientation) -> Self {
        Self { width, height, orientation, fields: Vec::new() }
    }

    /// Parse the interchange JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the input does not match the layout shape. The
    /// parsed layout is not validated; call [`Self::validate`] for that.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// First field whose key matches.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.key == key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Check the structural invariants the reducer itself does not enforce.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if width or height is not a positive finite number.
    /// - `EmptyKey` / `DuplicateKey` for bad field keys.
    /// - `InvalidFontSize` for a non-positive or non-finite `fontSize`.
    pub fn validate(&self) -> Result<(), EditorError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(EditorError::InvalidDimensions { width: self.width, height: self.height });
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.key.is_empty() {
                return Err(EditorError::EmptyKey);
            }
            if !seen.insert(field.key.as_str()) {
                return Err(EditorError::DuplicateKey(field.key.clone()));
            }
            if let Some(size) = field.font_size {
                if !positive(size) {
                    return Err(EditorError::InvalidFontSize { key: field.key.clone(), size });
                }
            }
        }
        Ok(())
    }
}

/// Deep copy of a layout: the field list and every field are copied, never shared.
#[must_use]
pub fn clone_layout(layout: &LayoutSnapshot) -> LayoutSnapshot {
    LayoutSnapshot {
        width: layout.width,
        height: layout.height,
        orientation: layout.orientation,
        fields: layout.fields.iter().cloned().collect(),
    }
}

/// The persisted/rendered view of an editing session: layout plus values.
///
/// Selection and history are session-only and never appear here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub layout: LayoutSnapshot,
    #[serde(default)]
    pub values: FieldValues,
}

impl Snapshot {
    /// # Errors
    ///
    /// Returns `Json` if the input is not a `{layout, values}` object.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }
}
