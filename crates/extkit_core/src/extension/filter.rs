//! Config-driven enabled/disabled partition.

use crate::config::{ConfigResult, ConfigView, ENABLED_KEY};
use crate::diagnostics::{join_names, Diagnostics};
use crate::extension::discovery::DiscoveredExtension;
use log::Log;

/// Validated extensions split by the operator's `enabled` flags.
///
/// Both halves keep input order; together they hold every input extension
/// exactly once.
#[derive(Debug, Default)]
pub struct EnabledSplit<'r> {
    pub enabled: Vec<DiscoveredExtension<'r>>,
    pub disabled: Vec<DiscoveredExtension<'r>>,
}

impl<'r> EnabledSplit<'r> {
    pub fn enabled_names(&self) -> Vec<&str> {
        self.enabled.iter().map(DiscoveredExtension::name).collect()
    }

    pub fn disabled_names(&self) -> Vec<&str> {
        self.disabled.iter().map(DiscoveredExtension::name).collect()
    }

    pub fn into_enabled(self) -> Vec<DiscoveredExtension<'r>> {
        self.enabled
    }
}

/// Partitions `extensions` by `config[ext_name].enabled`.
///
/// # Side effects
/// - Info log of enabled names and of disabled names (`none` when empty).
///
/// # Errors
/// - Missing section or `enabled` key, or a value outside the boolean
///   vocabulary, propagates as `ConfigError`.
pub fn filter_enabled<'r>(
    config: &ConfigView,
    extensions: Vec<DiscoveredExtension<'r>>,
    log: &dyn Log,
) -> ConfigResult<EnabledSplit<'r>> {
    let mut split = EnabledSplit::default();

    for extension in extensions {
        if config.boolean(extension.name(), ENABLED_KEY)? {
            split.enabled.push(extension);
        } else {
            split.disabled.push(extension);
        }
    }

    let diagnostics = Diagnostics::new(log);
    diagnostics.info(format_args!(
        "Enabled extensions: {}",
        join_names(split.enabled_names())
    ));
    diagnostics.info(format_args!(
        "Disabled extensions: {}",
        join_names(split.disabled_names())
    ));
    Ok(split)
}
