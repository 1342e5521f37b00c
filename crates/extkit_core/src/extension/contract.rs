//! Extension descriptor contract.
//!
//! # Responsibility
//! - Define what every independently authored extension must provide.
//! - Provide no-op defaults for every optional capability hook.
//!
//! # Invariants
//! - Hooks are pure queries; calling them has no side effects.
//! - `default_config` has no default body: an extension without default
//!   configuration does not compile.

use crate::config::ExtensionConfigSchema;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Contract implemented by every discoverable extension.
pub trait Extension: Send + Sync {
    /// Distribution identity, e.g. `Extkit-Local`.
    fn dist_name(&self) -> &str;

    /// Short name used as config section key and expected registry name.
    fn ext_name(&self) -> &str;

    /// Informational version string.
    fn version(&self) -> &str;

    /// Default configuration text; must contain at least `enabled = true`.
    fn default_config(&self) -> String;

    fn config_schema(&self) -> ExtensionConfigSchema {
        ExtensionConfigSchema::new(self.ext_name())
    }

    /// Checks whether the extension can run in the current environment.
    ///
    /// # Errors
    /// - `EnvironmentError::Unsupported` disables the extension.
    /// - `EnvironmentError::Fault` aborts validation.
    fn validate_environment(&self) -> Result<(), EnvironmentError> {
        Ok(())
    }

    fn frontend_classes(&self) -> Vec<ServiceClass> {
        vec![]
    }

    fn backend_classes(&self) -> Vec<ServiceClass> {
        vec![]
    }

    /// Hook for registering custom media processing elements.
    ///
    /// Only the host calls this; the activation pipeline never does.
    fn register_media_elements(&self, _registry: &mut ElementRegistry) {}
}

/// Failure reported by `Extension::validate_environment`.
#[derive(Debug)]
pub enum EnvironmentError {
    /// Expected precondition failure, e.g. a missing external resource.
    Unsupported(String),
    /// Unexpected failure while probing the environment.
    Fault(Box<dyn Error + Send + Sync>),
}

impl EnvironmentError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

impl Display for EnvironmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(message) => write!(f, "{message}"),
            Self::Fault(err) => write!(f, "environment probe failed: {err}"),
        }
    }
}

impl Error for EnvironmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unsupported(_) => None,
            Self::Fault(err) => Some(err.as_ref()),
        }
    }
}

/// Where a service class runs inside the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    Frontend,
    Backend,
}

/// Running service instance created from a `ServiceClass`.
pub trait Service: Send {
    fn service_name(&self) -> &str;
}

/// Named service constructor handed to the host.
#[derive(Clone)]
pub struct ServiceClass {
    name: String,
    role: ServiceRole,
    constructor: Arc<dyn Fn() -> Box<dyn Service> + Send + Sync>,
}

impl ServiceClass {
    pub fn new(
        name: impl Into<String>,
        role: ServiceRole,
        constructor: impl Fn() -> Box<dyn Service> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            constructor: Arc::new(constructor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> ServiceRole {
        self.role
    }

    pub fn create(&self) -> Box<dyn Service> {
        (self.constructor)()
    }
}

impl Debug for ServiceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClass")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Host-side registry of custom media processing elements.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: BTreeMap<String, u32>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one element under `name` with a selection rank.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rank: u32,
    ) -> Result<(), ElementRegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ElementRegistryError::EmptyName);
        }
        if self.elements.contains_key(name.as_str()) {
            return Err(ElementRegistryError::DuplicateElement(name));
        }
        self.elements.insert(name, rank);
        Ok(())
    }

    pub fn rank(&self, name: &str) -> Option<u32> {
        self.elements.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Element registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRegistryError {
    EmptyName,
    DuplicateElement(String),
}

impl Display for ElementRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "element name must not be empty"),
            Self::DuplicateElement(name) => write!(f, "element already registered: {name}"),
        }
    }
}

impl Error for ElementRegistryError {}
