//! Settings loaded from an optional TOML file and the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ntoe_core::{Board, GameError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Driver settings.
///
/// ```toml
/// size = 3
/// seed = 42
/// log_filter = "ntoe=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Board size for every game; asked before each game when unset.
    #[serde(default)]
    size: Option<i64>,

    /// Seed for the computer's RNG; random when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: None,
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults if the file is absent.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line values on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, size: Option<i64>, seed: Option<u64>) -> Self {
        if size.is_some() {
            self.size = size;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks the configured size.
    ///
    /// `Ok(None)` means no size was configured and each game asks for one.
    #[instrument(skip(self))]
    pub fn board_size(&self) -> Result<Option<usize>, GameError> {
        match self.size {
            None => Ok(None),
            Some(size) => {
                let size = Board::check_size(size).inspect_err(|e| {
                    warn!(size, error = %e, "Configured board size rejected");
                })?;
                Ok(Some(size))
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
