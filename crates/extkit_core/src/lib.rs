//! Extension discovery and activation core for extkit hosts.
//! This crate decides which installed extensions get to run.

pub mod config;
pub mod diagnostics;
pub mod extension;
pub mod logging;

pub use config::{
    Boolean, ConfigError, ConfigSection, ConfigView, ExtensionConfigSchema, FieldKind, RawValue,
};
pub use diagnostics::{Diagnostics, EXTENSION_LOG_TARGET};
pub use extension::contract::{
    ElementRegistry, ElementRegistryError, EnvironmentError, Extension, Service, ServiceClass,
    ServiceRole,
};
pub use extension::discovery::{discover, DiscoveredExtension, DiscoveryError};
pub use extension::filter::{filter_enabled, EnabledSplit};
pub use extension::pipeline::{load_enabled_extensions, PipelineError};
pub use extension::registry::{
    DependencyNotFound, ExtensionRegistry, FactoryError, RegistrationRecord, RegistryError,
    StaticRecord, StaticRegistry,
};
pub use extension::validation::{check, validate, Rejection, ValidationError};
pub use logging::{default_log_level, init_logging, logging_status};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
