//! Per-extension config validation schema.

use super::{Boolean, ConfigError, ConfigResult, ConfigSection, RawValue};
use std::collections::BTreeMap;

/// Key every extension section must carry.
pub const ENABLED_KEY: &str = "enabled";

/// Declared type of one config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Integer,
    String,
}

/// Config schema keyed by the extension's short name.
///
/// Every schema starts with `enabled: Boolean`; extensions add their own
/// fields on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfigSchema {
    name: String,
    fields: BTreeMap<String, FieldKind>,
}

impl ExtensionConfigSchema {
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(ENABLED_KEY.to_string(), FieldKind::Boolean);
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(key.into(), kind);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, key: &str) -> Option<FieldKind> {
        self.fields.get(key).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.fields.iter().map(|(key, kind)| (key.as_str(), *kind))
    }

    /// Checks that every declared field is present and well-typed.
    ///
    /// Undeclared keys in `section` are ignored.
    pub fn validate(&self, section: &ConfigSection) -> ConfigResult<()> {
        for (key, kind) in &self.fields {
            let value = section.get(key).ok_or_else(|| ConfigError::MissingKey {
                section: self.name.clone(),
                key: key.clone(),
            })?;
            self.check_field(key, *kind, value)?;
        }
        Ok(())
    }

    fn check_field(&self, key: &str, kind: FieldKind, value: &RawValue) -> ConfigResult<()> {
        let invalid = |message: String| ConfigError::InvalidValue {
            section: self.name.clone(),
            key: key.to_string(),
            message,
        };
        match (kind, value) {
            (FieldKind::Boolean, raw) => Boolean::new()
                .deserialize(raw)
                .map(|_| ())
                .map_err(|err| invalid(err.to_string())),
            (FieldKind::Integer, RawValue::Int(_)) => Ok(()),
            (FieldKind::Integer, RawValue::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map(|_| ())
                .map_err(|err| invalid(format!("`{text}` is not an integer: {err}"))),
            (FieldKind::Integer, RawValue::Bool(flag)) => {
                Err(invalid(format!("`{flag}` is not an integer")))
            }
            (FieldKind::String, RawValue::Text(_)) => Ok(()),
            (FieldKind::String, other) => Err(invalid(format!("`{other}` is not a string"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionConfigSchema, FieldKind, ENABLED_KEY};
    use crate::config::{ConfigError, ConfigView};

    #[test]
    fn new_schema_declares_enabled_boolean() {
        let schema = ExtensionConfigSchema::new("local");
        assert_eq!(schema.name(), "local");
        assert_eq!(schema.field(ENABLED_KEY), Some(FieldKind::Boolean));
        assert_eq!(schema.fields().count(), 1);
    }

    #[test]
    fn validates_declared_fields() {
        let schema = ExtensionConfigSchema::new("local")
            .with_field("media_dir", FieldKind::String)
            .with_field("scan_timeout", FieldKind::Integer);
        let view = ConfigView::new()
            .with_value("local", "enabled", "yes")
            .with_value("local", "media_dir", "/srv/music")
            .with_value("local", "scan_timeout", "1000")
            .with_value("local", "unrelated", true);

        schema
            .validate(view.section("local").expect("section"))
            .expect("valid section");
    }

    #[test]
    fn rejects_missing_and_mistyped_fields() {
        let schema = ExtensionConfigSchema::new("local").with_field("scan_timeout", FieldKind::Integer);

        let missing = ConfigView::new().with_value("local", "enabled", "true");
        assert_eq!(
            schema.validate(missing.section("local").expect("section")),
            Err(ConfigError::MissingKey {
                section: "local".to_string(),
                key: "scan_timeout".to_string(),
            })
        );

        let mistyped = ConfigView::new()
            .with_value("local", "enabled", "true")
            .with_value("local", "scan_timeout", "soon");
        let err = schema
            .validate(mistyped.section("local").expect("section"))
            .expect_err("non-integer must fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "scan_timeout"));
    }
}
