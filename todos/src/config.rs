//! Configuration loaded from the process environment.
//!
//! | Variable            | Meaning                                   | Default |
//! |---------------------|-------------------------------------------|---------|
//! | `TODO_MAX_NAME_LEN` | Longest accepted todo name, in characters | 500     |
//! | `TODO_SEED_FILE`    | JSON array of todos to start from         | built-in seed list |
//!
//! Log filtering is configured separately through `RUST_LOG`.

use crate::list::{self, TodoList};
use crate::types::DEFAULT_MAX_NAME_LEN;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the name length limit
pub const MAX_NAME_LEN_VAR: &str = "TODO_MAX_NAME_LEN";

/// Environment variable holding the seed file path
pub const SEED_FILE_VAR: &str = "TODO_SEED_FILE";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// Values parsed but are not usable
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// The seed file could not be read
    #[error("Failed to read seed file {path:?}: {source}")]
    ReadSeed {
        /// Seed file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The seed file is not a valid todo list
    #[error("Failed to parse seed file {path:?}: {source}")]
    ParseSeed {
        /// Seed file path
        path: PathBuf,
        /// Underlying parse error (includes list invariant violations)
        source: serde_json::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Longest accepted todo name, in characters
    pub max_name_len: usize,
    /// Optional JSON file replacing the built-in seed list
    pub seed_file: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            seed_file: None,
        }
    }
}

impl TodoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if a variable is malformed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps variable names to values
    ///
    /// Unset and blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is malformed or validation fails
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(MAX_NAME_LEN_VAR) {
            config.max_name_len = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: MAX_NAME_LEN_VAR,
                value,
            })?;
        }

        config.seed_file = get(SEED_FILE_VAR).map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_name_len == 0 {
            return Err(ConfigError::Validation(format!(
                "{MAX_NAME_LEN_VAR} must be > 0"
            )));
        }
        Ok(())
    }

    /// The list a session starts from
    ///
    /// Reads `seed_file` when set, otherwise returns the built-in seed.
    ///
    /// # Errors
    ///
    /// Returns error if the seed file cannot be read, is not a JSON array of
    /// todos, or breaks the list invariants (duplicate or zero ids, blank
    /// names)
    pub fn load_seed(&self) -> Result<TodoList, ConfigError> {
        let Some(path) = &self.seed_file else {
            return Ok(list::seed());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSeed {
            path: path.clone(),
            source,
        })?;

        let todos = serde_json::from_str(&contents).map_err(|source| ConfigError::ParseSeed {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded seed file");
        Ok(todos)
    }
}
