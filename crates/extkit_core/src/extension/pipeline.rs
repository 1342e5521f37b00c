//! One full discover -> validate -> filter pass.

use crate::config::{ConfigError, ConfigView};
use crate::extension::discovery::{discover, DiscoveryError};
use crate::extension::filter::{filter_enabled, EnabledSplit};
use crate::extension::registry::ExtensionRegistry;
use crate::extension::validation::{validate, ValidationError};
use crate::diagnostics::Diagnostics;
use log::Log;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Runs discovery, validation and config filtering in sequence.
///
/// Nothing is cached between calls; every call re-derives the partition from
/// the registry and `config`.
pub fn load_enabled_extensions<'r>(
    registry: &'r dyn ExtensionRegistry,
    config: &ConfigView,
    log: &dyn Log,
) -> Result<EnabledSplit<'r>, PipelineError> {
    let started_at = Instant::now();
    let result = discover(registry, log)
        .map_err(PipelineError::from)
        .and_then(|found| validate(found, log).map_err(PipelineError::from))
        .and_then(|valid| filter_enabled(config, valid, log).map_err(PipelineError::from));

    let diagnostics = Diagnostics::new(log);
    match &result {
        Ok(split) => diagnostics.info(format_args!(
            "event=extensions_load module=ext status=ok enabled={} disabled={} duration_ms={}",
            split.enabled.len(),
            split.disabled.len(),
            started_at.elapsed().as_millis()
        )),
        Err(err) => diagnostics.error(format_args!(
            "event=extensions_load module=ext status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        )),
    }
    result
}

/// Unexpected failures from any pipeline stage.
#[derive(Debug)]
pub enum PipelineError {
    Discovery(DiscoveryError),
    Validation(ValidationError),
    Config(ConfigError),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovery(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Discovery(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<DiscoveryError> for PipelineError {
    fn from(value: DiscoveryError) -> Self {
        Self::Discovery(value)
    }
}

impl From<ValidationError> for PipelineError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ConfigError> for PipelineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}
