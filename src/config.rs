//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, ENV_DEFAULT_COLOR, ENV_DEFAULT_FONT_FAMILY,
    ENV_DEFAULT_FONT_SIZE, ENV_HISTORY_LIMIT, ENV_STRICT_KEYS,
};
use crate::error::EditorError;

/// Style defaults the render consumer applies to fields that leave them unset.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefaults {
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorConfig {
    /// Maximum `past` depth. `None` keeps every entry.
    pub history_limit: Option<usize>,
    /// Reject empty and duplicate keys in `Editor::add_field`.
    pub strict_keys: bool,
    pub defaults: FieldDefaults,
}

impl EditorConfig {
    /// Build typed editor config from environment variables.
    ///
    /// Optional:
    /// - `CERT_EDITOR_HISTORY_LIMIT`: unbounded when absent
    /// - `CERT_EDITOR_STRICT_KEYS`: `true`/`false`, default `false`
    /// - `CERT_EDITOR_DEFAULT_FONT_SIZE`: default 24
    /// - `CERT_EDITOR_DEFAULT_FONT_FAMILY`: default `Poppins`
    /// - `CERT_EDITOR_DEFAULT_COLOR`: default `#000000`
    ///
    /// # Errors
    ///
    /// Returns `Config` if a present variable cannot be parsed.
    pub fn from_env() -> Result<Self, EditorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let history_limit = lookup(ENV_HISTORY_LIMIT)
            .map(|raw| parse_history_limit(&raw))
            .transpose()?;
        let strict_keys = parse_bool(ENV_STRICT_KEYS, lookup(ENV_STRICT_KEYS).as_deref())?;

        let font_size = match lookup(ENV_DEFAULT_FONT_SIZE) {
            Some(raw) => parse_font_size(&raw)?,
            None => DEFAULT_FONT_SIZE,
        };
        let font_family = non_empty_or(lookup(ENV_DEFAULT_FONT_FAMILY), DEFAULT_FONT_FAMILY);
        let color = non_empty_or(lookup(ENV_DEFAULT_COLOR), DEFAULT_COLOR);

        Ok(Self { history_limit, strict_keys, defaults: FieldDefaults { font_size, font_family, color } })
    }
}

fn parse_history_limit(raw: &str) -> Result<usize, EditorError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| EditorError::Config(format!("invalid {ENV_HISTORY_LIMIT}: {raw}")))
}

fn parse_bool(key: &str, raw: Option<&str>) -> Result<bool, EditorError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(false),
        Some("1" | "true" | "TRUE" | "yes") => Ok(true),
        Some("0" | "false" | "FALSE" | "no") => Ok(false),
        Some(other) => Err(EditorError::Config(format!("invalid {key}: {other} (expected true or false)"))),
    }
}

fn parse_font_size(raw: &str) -> Result<f64, EditorError> {
    match raw.trim().parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(EditorError::Config(format!("invalid {ENV_DEFAULT_FONT_SIZE}: {raw}"))),
    }
}

fn non_empty_or(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}
