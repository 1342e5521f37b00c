//! Parsed configuration sections keyed by extension name.

use super::{Boolean, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// One raw config value as produced by the host's parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Display for RawValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Key/value pairs of one config section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigSection {
    values: BTreeMap<String, RawValue>,
}

impl ConfigSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read-only mapping from section name to section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigView {
    sections: BTreeMap<String, ConfigSection>,
}

impl ConfigView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by hosts that assemble a view from already-parsed pairs.
    pub fn with_value(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<RawValue>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .values
            .insert(key.into(), value.into());
        self
    }

    pub fn section(&self, name: &str) -> Option<&ConfigSection> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Looks up one raw value.
    ///
    /// # Errors
    /// - `MissingSection` when `section` is absent.
    /// - `MissingKey` when the section exists without `key`.
    pub fn value(&self, section: &str, key: &str) -> ConfigResult<&RawValue> {
        let found = self
            .section(section)
            .ok_or_else(|| ConfigError::MissingSection(section.to_string()))?;
        found.get(key).ok_or_else(|| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Looks up one value and coerces it with the shared boolean rule.
    pub fn boolean(&self, section: &str, key: &str) -> ConfigResult<bool> {
        let raw = self.value(section, key)?;
        Boolean::new()
            .deserialize(raw)
            .map_err(|err| ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigView, RawValue};
    use crate::config::ConfigError;

    #[test]
    fn reports_missing_section_and_key() {
        let view = ConfigView::new().with_value("local", "enabled", "true");

        assert_eq!(
            view.value("http", "enabled"),
            Err(ConfigError::MissingSection("http".to_string()))
        );
        assert_eq!(
            view.value("local", "media_dir"),
            Err(ConfigError::MissingKey {
                section: "local".to_string(),
                key: "media_dir".to_string(),
            })
        );
    }

    #[test]
    fn boolean_lookup_adds_section_context_to_coercion_errors() {
        let view = ConfigView::new().with_value("local", "enabled", "perhaps");
        let err = view
            .boolean("local", "enabled")
            .expect_err("malformed boolean must fail");
        match err {
            ConfigError::InvalidValue {
                section,
                key,
                message,
            } => {
                assert_eq!(section, "local");
                assert_eq!(key, "enabled");
                assert!(message.contains("perhaps"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn with_value_overwrites_existing_key() {
        let view = ConfigView::new()
            .with_value("local", "enabled", "true")
            .with_value("local", "enabled", false);
        assert_eq!(
            view.value("local", "enabled").expect("value"),
            &RawValue::Bool(false)
        );
        assert_eq!(view.section("local").expect("section").len(), 1);
    }
}
