//! Editor façade: named operations over the reducer.
//!
//! Hosts call `select`, `set_value`, `move_field`, and friends instead of
//! building [`Action`]s by hand. Each call is a thin dispatch; the reducer
//! does the work. [`Editor::snapshot`] is the only way state leaves the
//! editor for persistence or rendering, and it carries `{layout, values}`
//! only.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use tracing::{debug, info, trace, warn};

use crate::action::{Action, FieldPatch};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::layout::{FieldValues, LayoutSnapshot, Snapshot, TemplateField, clone_layout};
use crate::reducer::{EditorState, reduce_bounded};
use crate::resolve::{ResolvedField, resolve_fields};

/// One editing session over one certificate layout.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    config: EditorConfig,
}

impl Editor {
    /// An editor over an empty default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { state: EditorState::default(), config }
    }

    /// Open an editor on a persisted `{layout, values}` pair.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, config: EditorConfig) -> Self {
        let mut editor = Self::with_config(config);
        editor.init(snapshot.layout, snapshot.values);
        editor
    }

    // --- Dispatch ---

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Only `add-field` can fail, and only in strict-key mode; see
    /// [`Self::add_field`]. The state is unchanged on error.
    pub fn dispatch(&mut self, action: Action) -> Result<(), EditorError> {
        if let Action::AddField { ref field, .. } = action {
            self.check_new_key(&field.key)?;
        }
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        let name = action.name();
        let noop = match action {
            Action::Undo => !self.state.can_undo(),
            Action::Redo => !self.state.can_redo(),
            _ => false,
        };
        if noop {
            trace!(action = name, "nothing to {name}");
            return;
        }

        let state = std::mem::take(&mut self.state);
        self.state = reduce_bounded(state, action, self.config.history_limit);
        debug!(
            action = name,
            past = self.state.past.len(),
            future = self.state.future.len(),
            "editor dispatch"
        );
    }

    fn check_new_key(&self, key: &str) -> Result<(), EditorError> {
        if !self.config.strict_keys {
            return Ok(());
        }
        if key.is_empty() {
            warn!("add_field rejected: empty key");
            return Err(EditorError::EmptyKey);
        }
        if self.state.layout.contains_key(key) {
            warn!(%key, "add_field rejected: duplicate key");
            return Err(EditorError::DuplicateKey(key.to_string()));
        }
        Ok(())
    }

    // --- Operations ---

    /// Hard reset to `layout` and `values`. Clears history and selection.
    pub fn init(&mut self, layout: LayoutSnapshot, values: FieldValues) {
        info!(fields = layout.fields.len(), values = values.len(), "editor init");
        self.apply(Action::Init { layout, values });
    }

    /// Validate `layout` and then [`Self::init`].
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutSnapshot::validate`] failure; the editor is
    /// left untouched.
    pub fn try_init(&mut self, layout: LayoutSnapshot, values: FieldValues) -> Result<(), EditorError> {
        layout.validate()?;
        self.init(layout, values);
        Ok(())
    }

    /// Select a field, or clear the selection with `None`. Not undoable.
    pub fn select(&mut self, key: Option<String>) {
        self.apply(Action::Select { key });
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.apply(Action::SetValue { key: key.into(), value: value.into() });
    }

    pub fn move_field(&mut self, key: impl Into<String>, x: f64, y: f64) {
        self.apply(Action::MoveField { key: key.into(), x, y });
    }

    pub fn style_field(&mut self, key: impl Into<String>, patch: FieldPatch) {
        self.apply(Action::StyleField { key: key.into(), patch });
    }

    /// Append `field`, optionally seed its value, and select it.
    ///
    /// # Errors
    ///
    /// With `strict_keys` enabled, returns `EmptyKey` or `DuplicateKey` and
    /// leaves the state untouched. Without it this never fails, and a
    /// duplicate key is appended as-is.
    pub fn add_field(&mut self, field: TemplateField, default_value: Option<String>) -> Result<(), EditorError> {
        self.dispatch(Action::AddField { field, default_value })
    }

    pub fn undo(&mut self) {
        self.apply(Action::Undo);
    }

    pub fn redo(&mut self) {
        self.apply(Action::Redo);
    }

    // --- Queries ---

    /// The `{layout, values}` pair for persistence and rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { layout: clone_layout(&self.state.layout), values: self.state.values.clone() }
    }

    /// Every field resolved for rendering, using the configured defaults.
    #[must_use]
    pub fn resolved_fields(&self) -> Vec<ResolvedField> {
        resolve_fields(&self.state.layout, &self.state.values, &self.config.defaults)
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.state.layout
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    #[must_use]
    pub fn selected_key(&self) -> Option<&str> {
        self.state.selected_key.as_deref()
    }

    /// The currently selected field, if the selection names one.
    #[must_use]
    pub fn selected_field(&self) -> Option<&TemplateField> {
        self.selected_key().and_then(|key| self.state.layout.field(key))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// `(past, future)` stack lengths.
    #[must_use]
    pub fn history_depths(&self) -> (usize, usize) {
        (self.state.past.len(), self.state.future.len())
    }

    /// Full reducer state, history included.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
