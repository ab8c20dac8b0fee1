//! Editor state and the pure transition function.
//!
//! DESIGN
//! ======
//! Every mutating action snapshots the whole `{layout, values, selected_key}`
//! triple into `past` before applying the change, and clears `future`. Undo
//! and redo swap whole entries between the stacks. There is no inverse-edit
//! logic; correctness follows from every entry owning its own copy.
//!
//! The reducer takes the state by value and returns the next one. It never
//! fails: unknown keys leave the field list untouched, and undo/redo on an
//! empty stack return the state as-is.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use std::collections::VecDeque;

use crate::action::{Action, FieldPatch};
use crate::layout::{FieldValues, LayoutSnapshot, TemplateField, clone_layout};

// =============================================================================
// STATE
// =============================================================================

/// One undo/redo history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub layout: LayoutSnapshot,
    pub values: FieldValues,
    pub selected_key: Option<String>,
}

/// Full reducer state for one editing session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub layout: LayoutSnapshot,
    pub values: FieldValues,
    /// At most one field is selected.
    pub selected_key: Option<String>,
    /// Prior entries, oldest first.
    pub past: Vec<HistoryEntry>,
    /// Redo entries, most recent undo first.
    pub future: VecDeque<HistoryEntry>,
}

impl EditorState {
    /// Fresh state over a layout and value map, with empty history.
    #[must_use]
    pub fn new(layout: &LayoutSnapshot, values: &FieldValues) -> Self {
        Self {
            layout: clone_layout(layout),
            values: values.clone(),
            selected_key: None,
            past: Vec::new(),
            future: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Deep copy of the live `{layout, values, selected_key}` triple.
    fn capture(&self) -> HistoryEntry {
        HistoryEntry {
            layout: clone_layout(&self.layout),
            values: self.values.clone(),
            selected_key: self.selected_key.clone(),
        }
    }

    /// Replace the live triple with a history entry.
    fn restore(&mut self, entry: HistoryEntry) {
        self.layout = entry.layout;
        self.values = entry.values;
        self.selected_key = entry.selected_key;
    }

    /// Record the pre-edit triple and invalidate redo.
    fn record(&mut self, limit: Option<usize>) {
        let entry = self.capture();
        self.push_past(entry, limit);
        self.future.clear();
    }

    fn push_past(&mut self, entry: HistoryEntry, limit: Option<usize>) {
        self.past.push(entry);
        if let Some(max) = limit {
            if self.past.len() > max {
                let excess = self.past.len() - max;
                self.past.drain(..excess);
            }
        }
    }
}

// =============================================================================
// REDUCER
// =============================================================================

/// Apply `action` to `state` with unbounded history.
#[must_use]
pub fn reduce(state: EditorState, action: Action) -> EditorState {
    reduce_bounded(state, action, None)
}

/// Apply `action` to `state`, keeping at most `limit` entries in `past`.
///
/// With `limit` set, the oldest entries are dropped once the cap is hit and
/// become unrecoverable. `None` keeps every entry.
#[must_use]
pub fn reduce_bounded(mut state: EditorState, action: Action, limit: Option<usize>) -> EditorState {
    match action {
        Action::Init { layout, values } => EditorState::new(&layout, &values),
        Action::Select { key } => {
            state.selected_key = key;
            state
        }
        Action::SetValue { key, value } => {
            state.record(limit);
            state.values.insert(key, value);
            state
        }
        Action::MoveField { key, x, y } => {
            state.record(limit);
            state.layout.fields = move_matching(&state.layout.fields, &key, x, y);
            state
        }
        Action::StyleField { key, patch } => {
            state.record(limit);
            state.layout.fields = style_matching(&state.layout.fields, &key, &patch);
            state
        }
        Action::AddField { field, default_value } => {
            state.record(limit);
            if let Some(value) = default_value {
                state.values.insert(field.key.clone(), value);
            }
            state.selected_key = Some(field.key.clone());
            state.layout.fields.push(field);
            state
        }
        Action::Undo => {
            let Some(previous) = state.past.pop() else {
                return state;
            };
            let current = state.capture();
            state.future.push_front(current);
            state.restore(previous);
            state
        }
        Action::Redo => {
            let Some(next) = state.future.pop_front() else {
                return state;
            };
            let current = state.capture();
            state.push_past(current, limit);
            state.restore(next);
            state
        }
    }
}

/// New field list with every field keyed `key` moved to `(x, y)`.
fn move_matching(fields: &[TemplateField], key: &str, x: f64, y: f64) -> Vec<TemplateField> {
    fields
        .iter()
        .map(|f| {
            if f.key == key {
                TemplateField { x, y, ..f.clone() }
            } else {
                f.clone()
            }
        })
        .collect()
}

/// New field list with `patch` merged into every field keyed `key`.
fn style_matching(fields: &[TemplateField], key: &str, patch: &FieldPatch) -> Vec<TemplateField> {
    fields
        .iter()
        .map(|f| {
            let mut next = f.clone();
            if next.key == key {
                patch.apply_to(&mut next);
            }
            next
        })
        .collect()
}
