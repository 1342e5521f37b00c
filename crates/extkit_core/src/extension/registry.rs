//! Registry adapter contracts and an in-process implementation.
//!
//! # Responsibility
//! - Enumerate installed extension registration records.
//! - Instantiate extensions without forcing dependency resolution.
//! - Answer "are this record's dependencies installed".
//!
//! # Invariants
//! - `records()` yields records in registration order.
//! - Duplicate record names are accepted; uniqueness is not enforced here.

use crate::extension::contract::Extension;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

static RECORD_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_\-]*$").expect("valid record name regex"));

/// The registry's own record of one installed extension.
pub trait RegistrationRecord {
    /// Name the registry advertises the extension under.
    fn name(&self) -> &str;

    /// Builds a fresh extension instance.
    ///
    /// Must not fail merely because a declared dependency is missing.
    fn instantiate(&self) -> Result<Box<dyn Extension>, FactoryError>;

    /// Verifies every declared dependency is installed.
    fn require(&self) -> Result<(), DependencyNotFound>;
}

/// Enumerable source of registration records.
pub trait ExtensionRegistry {
    fn records(&self) -> Vec<&dyn RegistrationRecord>;
}

type ExtensionFactory = dyn Fn() -> Result<Box<dyn Extension>, FactoryError> + Send + Sync;

/// Record held by `StaticRegistry`.
pub struct StaticRecord {
    name: String,
    requires: Vec<String>,
    installed: Arc<BTreeSet<String>>,
    factory: Arc<ExtensionFactory>,
}

impl StaticRecord {
    pub fn requires(&self) -> &[String] {
        &self.requires
    }
}

impl Debug for StaticRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticRecord")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

impl RegistrationRecord for StaticRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn instantiate(&self) -> Result<Box<dyn Extension>, FactoryError> {
        (self.factory)()
    }

    fn require(&self) -> Result<(), DependencyNotFound> {
        match self
            .requires
            .iter()
            .find(|dependency| !self.installed.contains(dependency.as_str()))
        {
            Some(missing) => Err(DependencyNotFound::new(missing.clone())),
            None => Ok(()),
        }
    }
}

/// In-process registry for first-party extensions and tests.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    records: Vec<StaticRecord>,
    installed: Arc<BTreeSet<String>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry where `installed` dependency names are present.
    pub fn with_installed<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: vec![],
            installed: Arc::new(installed.into_iter().map(Into::into).collect()),
        }
    }

    /// Registers one extension factory under `name`.
    ///
    /// # Errors
    /// - `RegistryError::InvalidName` when `name` is not a lowercase
    ///   identifier (`a-z`, `0-9`, `_`, `-`, leading alphanumeric).
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        requires: &[&str],
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> Result<Box<dyn Extension>, FactoryError> + Send + Sync + 'static,
    {
        let name = name.into();
        if !RECORD_NAME_RE.is_match(&name) {
            return Err(RegistryError::InvalidName(name));
        }
        self.records.push(StaticRecord {
            name,
            requires: requires.iter().map(|value| value.to_string()).collect(),
            installed: Arc::clone(&self.installed),
            factory: Arc::new(factory),
        });
        Ok(())
    }

    pub fn is_installed(&self, dependency: &str) -> bool {
        self.installed.contains(dependency)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn records(&self) -> Vec<&dyn RegistrationRecord> {
        self.records
            .iter()
            .map(|record| record as &dyn RegistrationRecord)
            .collect()
    }
}

/// A declared dependency is not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNotFound {
    requirement: String,
}

impl DependencyNotFound {
    pub fn new(requirement: impl Into<String>) -> Self {
        Self {
            requirement: requirement.into(),
        }
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }
}

impl Display for DependencyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "dependency not found: {}", self.requirement)
    }
}

impl Error for DependencyNotFound {}

/// An extension factory could not build its instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryError {
    message: String,
}

impl FactoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "extension factory failed: {}", self.message)
    }
}

impl Error for FactoryError {}

/// `StaticRegistry` registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(f, "registration name is invalid: `{value}`"),
        }
    }
}

impl Error for RegistryError {}
