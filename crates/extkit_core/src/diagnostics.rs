//! Injected diagnostics sink for pipeline stages.
//!
//! # Responsibility
//! - Route stage events to a caller-provided `log::Log` implementation.
//! - Keep the pipeline free of any dependency on the global logger.
//!
//! # Invariants
//! - Every record carries the `extkit::ext` target.
//! - Records are dropped when the sink reports the level as disabled.

use log::{Level, Log, Metadata, Record};
use std::fmt;

/// Log target used by discovery, validation and config filtering.
pub const EXTENSION_LOG_TARGET: &str = "extkit::ext";

/// Thin handle over an injected log sink.
#[derive(Clone, Copy)]
pub struct Diagnostics<'a> {
    sink: &'a dyn Log,
}

impl<'a> Diagnostics<'a> {
    pub fn new(sink: &'a dyn Log) -> Self {
        Self { sink }
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder()
            .level(level)
            .target(EXTENSION_LOG_TARGET)
            .build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path(Some(module_path!()))
                .file(Some(file!()))
                .build(),
        );
    }
}

/// Joins names for summary lines, rendering an empty list as `none`.
pub(crate) fn join_names<'n>(names: impl IntoIterator<Item = &'n str>) -> String {
    let joined = names.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}
