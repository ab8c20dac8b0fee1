//! Layout-editing core for the certificate template editor.
//!
//! This crate owns the state behind the drag-and-drop certificate editor:
//! which text fields sit where on the canvas, what each field currently says,
//! which field is selected, and the undo/redo history of edits. It performs
//! no I/O. Hosts load a stored layout into an [`editor::Editor`], forward
//! user gestures as façade calls (or serialized [`action::Action`]s), and
//! read [`layout::Snapshot`]s back out to persist or render.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Field model, layout snapshot, and the persisted `{layout, values}` pair |
//! | [`action`] | Editor actions and sparse field style patches |
//! | [`reducer`] | Pure `(state, action) -> state` transition function and history stacks |
//! | [`editor`] | Named-operation façade over the reducer |
//! | [`resolve`] | Render-ready field view with consumer defaults applied |
//! | [`sessions`] | Per-document editor registry for concurrent hosts |
//! | [`config`] | Environment-driven editor configuration |
//! | [`error`] | Error types and grepable error codes |
//! | [`consts`] | Shared defaults and environment variable names |

pub mod action;
pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod layout;
pub mod reducer;
pub mod resolve;
pub mod sessions;

pub use action::{Action, FieldPatch};
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, ErrorCode, SessionError};
pub use layout::{Align, FieldValues, LayoutSnapshot, Orientation, Snapshot, TemplateField};
pub use reducer::{EditorState, HistoryEntry, reduce};
pub use sessions::{EditorSessions, SessionId};
