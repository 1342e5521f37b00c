//! Boolean coercion rule shared by every `enabled` flag.

use super::{ConfigError, ConfigResult, RawValue};

/// Accepted textual spellings of `true` (compared case-insensitively).
pub const TRUE_LITERALS: &[&str] = &["1", "yes", "true", "on"];
/// Accepted textual spellings of `false` (compared case-insensitively).
pub const FALSE_LITERALS: &[&str] = &["0", "no", "false", "off"];

/// Boolean config value deserializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean;

impl Boolean {
    pub fn new() -> Self {
        Self
    }

    /// Coerces one raw value into `bool`.
    ///
    /// Native booleans pass through, integers `1`/`0` map to `true`/`false`,
    /// and text must match the fixed vocabulary after trimming.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidBoolean` for anything outside that set.
    pub fn deserialize(&self, value: &RawValue) -> ConfigResult<bool> {
        match value {
            RawValue::Bool(flag) => Ok(*flag),
            RawValue::Int(1) => Ok(true),
            RawValue::Int(0) => Ok(false),
            RawValue::Int(other) => Err(ConfigError::InvalidBoolean(other.to_string())),
            RawValue::Text(text) => {
                let normalized = text.trim().to_ascii_lowercase();
                if TRUE_LITERALS.contains(&normalized.as_str()) {
                    Ok(true)
                } else if FALSE_LITERALS.contains(&normalized.as_str()) {
                    Ok(false)
                } else {
                    Err(ConfigError::InvalidBoolean(text.clone()))
                }
            }
        }
    }
}
