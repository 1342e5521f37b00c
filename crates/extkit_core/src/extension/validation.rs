//! Validation of discovered extensions.
//!
//! # Responsibility
//! - Drop extensions that are unsafe to activate, logging why.
//! - Keep survivors in input order.
//!
//! # Invariants
//! - Checks run in a fixed order: identity, dependencies, environment.
//! - Each dropped extension fails exactly one check (the first it violates).
//! - Identity mismatches log at warn; the other two rejections log at info.
//! - Only an environment fault is returned as an error.

use crate::diagnostics::{join_names, Diagnostics};
use crate::extension::contract::EnvironmentError;
use crate::extension::discovery::DiscoveredExtension;
use crate::extension::registry::DependencyNotFound;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a discovered extension was excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NameMismatch {
        registered_name: String,
        ext_name: String,
    },
    MissingDependency(DependencyNotFound),
    Environment(String),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameMismatch {
                registered_name,
                ext_name,
            } => write!(
                f,
                "registration name ({registered_name}) does not match extension name ({ext_name})"
            ),
            Self::MissingDependency(missing) => {
                write!(f, "Dependency {} not found", missing.requirement())
            }
            Self::Environment(message) => write!(f, "{message}"),
        }
    }
}

/// Runs every check against one extension, stopping at the first failure.
///
/// Returns `Ok(None)` when the extension passes and `Ok(Some(_))` naming the
/// violated check otherwise.
///
/// # Errors
/// - `ValidationError::Environment` when the environment probe itself faults.
pub fn check(extension: &DiscoveredExtension<'_>) -> Result<Option<Rejection>, ValidationError> {
    let registered_name = extension.record().name();
    if extension.name() != registered_name {
        return Ok(Some(Rejection::NameMismatch {
            registered_name: registered_name.to_string(),
            ext_name: extension.name().to_string(),
        }));
    }

    if let Err(missing) = extension.record().require() {
        return Ok(Some(Rejection::MissingDependency(missing)));
    }

    match extension.extension().validate_environment() {
        Ok(()) => Ok(None),
        Err(EnvironmentError::Unsupported(message)) => Ok(Some(Rejection::Environment(message))),
        Err(EnvironmentError::Fault(source)) => Err(ValidationError::Environment {
            name: extension.name().to_string(),
            source,
        }),
    }
}

/// Verifies each extension's identity, dependencies and environment.
///
/// # Side effects
/// - Debug log per extension checked.
/// - Warn/info log per dropped extension.
/// - Debug summary of surviving names.
pub fn validate<'r>(
    extensions: Vec<DiscoveredExtension<'r>>,
    log: &dyn log::Log,
) -> Result<Vec<DiscoveredExtension<'r>>, ValidationError> {
    let diagnostics = Diagnostics::new(log);
    let mut valid = Vec::with_capacity(extensions.len());

    for extension in extensions {
        diagnostics.debug(format_args!("Validating extension: {}", extension.name()));
        let Some(rejection) = check(&extension)? else {
            valid.push(extension);
            continue;
        };
        match &rejection {
            Rejection::NameMismatch {
                registered_name, ..
            } => diagnostics.warn(format_args!(
                "Disabled extension {registered_name}: {rejection}"
            )),
            _ => diagnostics.info(format_args!(
                "Disabled extension {}: {rejection}",
                extension.name()
            )),
        }
    }

    diagnostics.debug(format_args!(
        "Valid extensions: {}",
        join_names(valid.iter().map(DiscoveredExtension::name))
    ));
    Ok(valid)
}

/// Unexpected validation failures that abort the pass.
#[derive(Debug)]
pub enum ValidationError {
    Environment {
        name: String,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment { name, source } => {
                write!(f, "environment check for extension `{name}` faulted: {source}")
            }
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Environment { source, .. } => Some(source.as_ref()),
        }
    }
}
