//! Logging System
//!
//! Structured logging through `tracing`. Level, format and destination come from
//! the `[logging]` config table, CLI flags, and `PROPBOOK_LOG*` environment variables.
//! Logging stays off unless enabled, so events never interleave with the prompt.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

pub const ENV_LOG: &str = "PROPBOOK_LOG";
pub const ENV_LOG_FORMAT: &str = "PROPBOOK_LOG_FORMAT";
pub const ENV_LOG_OUTPUT: &str = "PROPBOOK_LOG_OUTPUT";
pub const ENV_LOG_MODULES: &str = "PROPBOOK_LOG_MODULES";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all (default: off)
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path; defaults to the platform data directory
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format on a terminal stream only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// `<data dir>/propbook.log`, e.g. `~/.local/share/propbook/propbook.log` on Linux.
pub fn default_log_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "propbook").map(|dirs| dirs.data_dir().join("propbook.log"))
}

/// CLI path wins over the configured one; fall back to the platform default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    cli_file
        .or(config_file)
        .or_else(default_log_file)
        .ok_or_else(|| {
            ApiError::ConfigError("Cannot determine a log file location; pass --log-file".to_string())
        })
}

type Inner = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Inner> + Send + Sync>;

/// Initialize the logging system. A disabled config installs nothing.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (PROPBOOK_LOG, PROPBOOK_LOG_FORMAT, ...)
/// 2. The given config (already merged with CLI flags and config files)
pub fn init_logging(config: &LoggingConfig) -> Result<(), ApiError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config, std::env::var(ENV_LOG_MODULES).ok().as_deref())?;
    let format = determine_format(config, std::env::var(ENV_LOG_FORMAT).ok().as_deref())?;
    let output = parse_output_destinations(
        std::env::var(ENV_LOG_OUTPUT)
            .ok()
            .as_deref()
            .unwrap_or(&config.output),
    )?;
    let json = format == "json";

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if output.stdout {
        layers.push(build_layer(json, config.color, std::io::stdout));
    }
    if output.stderr {
        layers.push(build_layer(json, config.color, std::io::stderr));
    }
    if output.file {
        let path = resolve_log_file_path(None, config.file.clone())?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::ConfigError(format!("Failed to create log directory: {}", e))
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                ApiError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
            })?;
        layers.push(build_layer(json, false, Mutex::new(file)));
    }

    Registry::default()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn build_layer<W>(json: bool, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    }
}

/// PROPBOOK_LOG wins outright; otherwise the config level plus module directives.
fn build_env_filter(config: &LoggingConfig, env_modules: Option<&str>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env(ENV_LOG) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    let env_directives = env_modules
        .into_iter()
        .flat_map(|s| s.split(','))
        .filter_map(|spec| spec.split_once('='))
        .map(|(module, level)| (module.trim().to_string(), level.trim().to_string()));

    for (module, level) in config.modules.clone().into_iter().chain(env_directives) {
        let directive = format!("{}={}", module, level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive '{}': {}", directive, e)))?,
        );
    }

    Ok(filter)
}

fn determine_format(config: &LoggingConfig, env_format: Option<&str>) -> Result<String, ApiError> {
    if let Some(format) = env_format.filter(|f| *f == "json" || *f == "text") {
        return Ok(format.to_string());
    }

    match config.format.as_str() {
        "json" | "text" => Ok(config.format.clone()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Output destinations
#[derive(Debug, PartialEq, Eq)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ApiError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        _ => {
            return Err(ApiError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', or 'file+stderr')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}

/// Accepted values for `output`, for config validation.
pub fn is_valid_output(output: &str) -> bool {
    parse_output_destinations(output).is_ok()
}
