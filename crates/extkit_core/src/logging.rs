//! Process-wide logging backend for extkit hosts.
//!
//! # Responsibility
//! - Install the `flexi_logger` rolling file backend behind the `log` facade.
//! - Mirror warnings to stderr so disabled extensions are visible at startup.
//!
//! # Invariants
//! - The backend is installed at most once per process.
//! - Repeating `init_logging` with identical settings is a no-op.
//! - Switching level or directory after initialization is rejected.
//! - Initialization never panics.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "extkit";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static ACTIVE_BACKEND: OnceCell<ActiveBackend> = OnceCell::new();

struct ActiveBackend {
    settings: LogSettings,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &Path) -> Result<Self, LoggingError> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => return Err(LoggingError::UnsupportedLevel(other.to_string())),
        };
        if log_dir.as_os_str().is_empty() || !log_dir.is_absolute() {
            return Err(LoggingError::RelativeDirectory(log_dir.to_path_buf()));
        }
        Ok(Self {
            level,
            log_dir: log_dir.to_path_buf(),
        })
    }
}

/// Installs the logging backend writing into `log_dir`.
///
/// # Errors
/// - `UnsupportedLevel` unless `level` is one of trace|debug|info|warn|error.
/// - `RelativeDirectory` when `log_dir` is empty or not absolute.
/// - `AlreadyInitialized` when a backend with other settings is active.
/// - `Backend` when the directory or the logger cannot be set up.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), LoggingError> {
    let requested = LogSettings::parse(level, log_dir)?;

    let active = ACTIVE_BACKEND.get_or_try_init(|| start_backend(requested.clone()))?;
    if active.settings != requested {
        return Err(LoggingError::AlreadyInitialized {
            active_level: active.settings.level,
            active_dir: active.settings.log_dir.clone(),
        });
    }
    Ok(())
}

fn start_backend(settings: LogSettings) -> Result<ActiveBackend, LoggingError> {
    std::fs::create_dir_all(&settings.log_dir).map_err(|err| {
        LoggingError::Backend(format!(
            "failed to create log directory `{}`: {err}",
            settings.log_dir.display()
        ))
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    log::info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        settings.level,
        settings.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveBackend {
        settings,
        _handle: handle,
    })
}

/// Returns `(level, log_dir)` of the active backend, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_BACKEND
        .get()
        .map(|active| (active.settings.level, active.settings.log_dir.clone()))
}

/// `debug` in debug builds, `info` in release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Logging bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    RelativeDirectory(PathBuf),
    AlreadyInitialized {
        active_level: &'static str,
        active_dir: PathBuf,
    },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeDirectory(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
            Self::AlreadyInitialized {
                active_level,
                active_dir,
            } => write!(
                f,
                "logging already initialized with level `{active_level}` at `{}`; refusing to switch",
                active_dir.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}
