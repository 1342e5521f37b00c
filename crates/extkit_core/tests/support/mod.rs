#![allow(dead_code)]

use extkit_core::{
    EnvironmentError, Extension, ExtensionConfigSchema, FactoryError, FieldKind, StaticRegistry,
};
use log::{Level, Log, Metadata, Record};
use std::io;
use std::sync::Mutex;

/// Log sink that keeps every record for assertions.
#[derive(Default)]
pub struct MemoryLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.records.lock().expect("log lock").clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages_at(level)
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl Log for MemoryLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .expect("log lock")
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// How a fixture extension answers its environment check.
#[derive(Debug, Clone, Copy)]
pub enum Env {
    Ready,
    Unsupported(&'static str),
    Fault(&'static str),
}

pub struct Fixture {
    name: &'static str,
    env: Env,
}

impl Extension for Fixture {
    fn dist_name(&self) -> &str {
        "Extkit-Fixture"
    }

    fn ext_name(&self) -> &str {
        self.name
    }

    fn version(&self) -> &str {
        "0.3.1"
    }

    fn default_config(&self) -> String {
        format!("[{}]\nenabled = true\n", self.name)
    }

    fn config_schema(&self) -> ExtensionConfigSchema {
        ExtensionConfigSchema::new(self.name).with_field("media_dir", FieldKind::String)
    }

    fn validate_environment(&self) -> Result<(), EnvironmentError> {
        match self.env {
            Env::Ready => Ok(()),
            Env::Unsupported(message) => Err(EnvironmentError::unsupported(message)),
            Env::Fault(message) => Err(EnvironmentError::Fault(Box::new(io::Error::new(
                io::ErrorKind::Other,
                message,
            )))),
        }
    }
}

/// One registry entry: registered name, self-reported name, deps, env.
pub struct Entry {
    pub registered: &'static str,
    pub reports: &'static str,
    pub requires: &'static [&'static str],
    pub env: Env,
}

impl Entry {
    pub fn ok(name: &'static str) -> Self {
        Self {
            registered: name,
            reports: name,
            requires: &[],
            env: Env::Ready,
        }
    }

    pub fn reporting(mut self, name: &'static str) -> Self {
        self.reports = name;
        self
    }

    pub fn requiring(mut self, requires: &'static [&'static str]) -> Self {
        self.requires = requires;
        self
    }

    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }
}

pub fn registry(entries: Vec<Entry>, installed: &[&str]) -> StaticRegistry {
    let mut registry = StaticRegistry::with_installed(installed.iter().copied());
    for entry in entries {
        let Entry {
            registered,
            reports,
            requires,
            env,
        } = entry;
        registry
            .register(registered, requires, move || {
                Ok(Box::new(Fixture { name: reports, env }) as Box<dyn Extension>)
            })
            .expect("fixture registration");
    }
    registry
}

pub fn register_broken(registry: &mut StaticRegistry, name: &'static str) {
    registry
        .register(name, &[], move || Err(FactoryError::new(format!("{name} exploded"))))
        .expect("broken fixture registration");
}
