//! Editor actions and sparse style patches.
//!
//! `Action` is the reducer's input vocabulary. It serializes with a kebab-case
//! `type` tag so a host can forward UI gestures as JSON
//! (`{"type": "move-field", "key": "name", "x": 150, "y": 120}`).
//! `FieldPatch` is the sparse update carried by `style-field`: only present
//! attributes are merged into the target field.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::{Deserialize, Serialize};

use crate::layout::{Align, FieldValues, LayoutSnapshot, TemplateField};

/// Sparse style update for a field. Only present attributes are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

impl FieldPatch {
    /// Shallow-merge this patch into `field`.
    pub fn apply_to(&self, field: &mut TemplateField) {
        if let Some(ref label) = self.label {
            field.label = Some(label.clone());
        }
        if let Some(size) = self.font_size {
            field.font_size = Some(size);
        }
        if let Some(ref family) = self.font_family {
            field.font_family = Some(family.clone());
        }
        if let Some(ref color) = self.color {
            field.color = Some(color.clone());
        }
        if let Some(align) = self.align {
            field.align = Some(align);
        }
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.color.is_none()
            && self.align.is_none()
    }
}

/// One editor transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// Hard reset to a new layout and value map. Clears history and selection.
    Init {
        layout: LayoutSnapshot,
        #[serde(default)]
        values: FieldValues,
    },
    /// Change the selected field. `None` clears the selection. Not undoable.
    Select { key: Option<String> },
    /// Set the text for a field key, creating the entry if absent.
    SetValue { key: String, value: String },
    /// Move the field with `key` to `(x, y)`.
    MoveField { key: String, x: f64, y: f64 },
    /// Merge a style patch into the field with `key`.
    StyleField { key: String, patch: FieldPatch },
    /// Append a field, optionally seeding its value, and select it.
    AddField {
        field: TemplateField,
        #[serde(default, rename = "defaultValue", skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
    },
    Undo,
    Redo,
}

impl Action {
    /// Whether this action records a history entry and clears redo.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::SetValue { .. } | Self::MoveField { .. } | Self::StyleField { .. } | Self::AddField { .. }
        )
    }

    /// The wire tag of this action, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Select { .. } => "select",
            Self::SetValue { .. } => "set-value",
            Self::MoveField { .. } => "move-field",
            Self::StyleField { .. } => "style-field",
            Self::AddField { .. } => "add-field",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}
