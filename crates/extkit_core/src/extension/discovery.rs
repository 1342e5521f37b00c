//! Extension discovery over a registry adapter.
//!
//! # Responsibility
//! - Instantiate every advertised extension in enumeration order.
//! - Attach the originating registration record to each instance.
//!
//! # Invariants
//! - Discovery never checks dependencies; validation owns that.
//! - A failing factory aborts the whole pass.

use crate::diagnostics::{join_names, Diagnostics};
use crate::extension::contract::Extension;
use crate::extension::registry::{ExtensionRegistry, FactoryError, RegistrationRecord};
use log::Log;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Freshly instantiated extension paired with its registration record.
///
/// The record is borrowed from the registry; this value never owns it.
pub struct DiscoveredExtension<'r> {
    extension: Box<dyn Extension>,
    record: &'r dyn RegistrationRecord,
}

impl<'r> DiscoveredExtension<'r> {
    pub fn new(extension: Box<dyn Extension>, record: &'r dyn RegistrationRecord) -> Self {
        Self { extension, record }
    }

    /// Self-reported short name.
    pub fn name(&self) -> &str {
        self.extension.ext_name()
    }

    pub fn extension(&self) -> &dyn Extension {
        self.extension.as_ref()
    }

    pub fn record(&self) -> &'r dyn RegistrationRecord {
        self.record
    }

    pub fn into_extension(self) -> Box<dyn Extension> {
        self.extension
    }
}

impl Debug for DiscoveredExtension<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveredExtension")
            .field("name", &self.name())
            .field("record", &self.record.name())
            .field("version", &self.extension.version())
            .finish()
    }
}

/// Finds all installed extensions.
///
/// # Side effects
/// - Debug log per record loaded and per extension instantiated.
/// - Debug summary of every discovered name.
///
/// # Errors
/// - `DiscoveryError::Instantiate` when any factory fails.
pub fn discover<'r>(
    registry: &'r dyn ExtensionRegistry,
    log: &dyn Log,
) -> Result<Vec<DiscoveredExtension<'r>>, DiscoveryError> {
    let diagnostics = Diagnostics::new(log);
    let mut discovered = vec![];

    for record in registry.records() {
        diagnostics.debug(format_args!("Loading registration record: {}", record.name()));
        let extension = record
            .instantiate()
            .map_err(|source| DiscoveryError::Instantiate {
                name: record.name().to_string(),
                source,
            })?;
        diagnostics.debug(format_args!(
            "Loaded extension: {} {}",
            extension.dist_name(),
            extension.version()
        ));
        discovered.push(DiscoveredExtension::new(extension, record));
    }

    diagnostics.debug(format_args!(
        "Discovered extensions: {}",
        join_names(discovered.iter().map(DiscoveredExtension::name))
    ));
    Ok(discovered)
}

/// Discovery pass errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    Instantiate { name: String, source: FactoryError },
}

impl Display for DiscoveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instantiate { name, source } => {
                write!(f, "failed to instantiate extension `{name}`: {source}")
            }
        }
    }
}

impl Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Instantiate { source, .. } => Some(source),
        }
    }
}
