//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global file
//! (`~/.config/propbook/config.toml`), then an explicit `--config` file, then
//! `PROPBOOK_*` environment variables. Tests included.

use crate::error::ApiError;
use crate::logging::{is_valid_output, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod environment;
    pub mod global_file;
}

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Address book behaviour
    #[serde(default)]
    pub book: BookSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Address book settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSettings {
    /// Start each session with the sample persons loaded
    #[serde(default = "default_true")]
    pub sample_data: bool,

    /// `list` sorts the view by name
    #[serde(default = "default_true")]
    pub sort_on_list: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BookSettings {
    fn default() -> Self {
        Self {
            sample_data: true,
            sort_on_list: true,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl BookConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let logging = &self.logging;

        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "unknown level '{}' (expected one of {})",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if logging.format != "text" && logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}' (expected text or json)",
                logging.format
            )));
        }
        if !is_valid_output(&logging.output) {
            errors.push(ValidationError::Logging(format!(
                "unknown output '{}' (expected stdout, stderr, file or file+stderr)",
                logging.output
            )));
        }
        for (module, level) in &logging.modules {
            if !LOG_LEVELS.contains(&level.as_str()) {
                errors.push(ValidationError::Logging(format!(
                    "module '{}' has unknown level '{}'",
                    module, level
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Builds a [`BookConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, environment.
    pub fn load() -> Result<BookConfig, ApiError> {
        Self::load_with(None)
    }

    /// Defaults, global file, `explicit` (required when given), environment.
    pub fn load_with(explicit: Option<&Path>) -> Result<BookConfig, ApiError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder);
        if let Some(path) = explicit {
            debug!(config_path = %path.display(), "Loading explicit configuration");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = sources::environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults plus a single file; no global file, no environment.
    pub fn load_from_file(path: &Path) -> Result<BookConfig, ApiError> {
        let config = merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path).required(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
