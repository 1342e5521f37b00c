//! Read-only configuration view consumed by the extension pipeline.
//!
//! # Responsibility
//! - Model already-parsed configuration sections as typed raw values.
//! - Own the boolean coercion rule used for `enabled` flags.
//! - Describe per-extension config schemas.
//!
//! # Invariants
//! - Nothing in this crate writes to a `ConfigView` after construction.
//! - File parsing is the host's job; any serde format can feed `ConfigView`.

mod boolean;
mod schema;
mod view;

pub use boolean::{Boolean, FALSE_LITERALS, TRUE_LITERALS};
pub use schema::{ExtensionConfigSchema, FieldKind, ENABLED_KEY};
pub use view::{ConfigSection, ConfigView, RawValue};

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration lookup and coercion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingSection(String),
    MissingKey {
        section: String,
        key: String,
    },
    InvalidBoolean(String),
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(section) => write!(f, "config section not found: [{section}]"),
            Self::MissingKey { section, key } => {
                write!(f, "config key not found: [{section}] {key}")
            }
            Self::InvalidBoolean(value) => write!(
                f,
                "invalid boolean value `{value}`; expected one of {} or {}",
                TRUE_LITERALS.join("|"),
                FALSE_LITERALS.join("|")
            ),
            Self::InvalidValue {
                section,
                key,
                message,
            } => write!(f, "invalid config value for [{section}] {key}: {message}"),
        }
    }
}

impl Error for ConfigError {}
