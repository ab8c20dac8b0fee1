//! Shared defaults and environment variable names for the editor crate.

// ── Render defaults ─────────────────────────────────────────────

/// Font size applied to fields that leave `fontSize` unset.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

/// Font family applied to fields that leave `fontFamily` unset.
pub const DEFAULT_FONT_FAMILY: &str = "Poppins";

/// Text color applied to fields that leave `color` unset.
pub const DEFAULT_COLOR: &str = "#000000";

// ── Environment ─────────────────────────────────────────────────

/// Maximum `past` depth. Unset means unbounded history.
pub const ENV_HISTORY_LIMIT: &str = "CERT_EDITOR_HISTORY_LIMIT";

/// When `true`, `add_field` rejects empty and duplicate keys.
pub const ENV_STRICT_KEYS: &str = "CERT_EDITOR_STRICT_KEYS";

/// Override for [`DEFAULT_FONT_SIZE`].
pub const ENV_DEFAULT_FONT_SIZE: &str = "CERT_EDITOR_DEFAULT_FONT_SIZE";

/// Override for [`DEFAULT_FONT_FAMILY`].
pub const ENV_DEFAULT_FONT_FAMILY: &str = "CERT_EDITOR_DEFAULT_FONT_FAMILY";

/// Override for [`DEFAULT_COLOR`].
pub const ENV_DEFAULT_COLOR: &str = "CERT_EDITOR_DEFAULT_COLOR";
