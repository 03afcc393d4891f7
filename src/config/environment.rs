//! Environment selection for the test suite

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::config::error::ConfigError;

/// Target environment for a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development environment
    Dev,
    /// Shared staging environment
    Stage,
}

impl Environment {
    /// Environment variable name for reading the current environment
    pub const ENV_VAR: &'static str = "TODO_TEST_ENV";

    /// Read the environment from the `TODO_TEST_ENV` environment variable
    ///
    /// An absent or blank variable selects `Dev`. Any other unrecognized
    /// value is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] for unrecognized values
    /// and [`ConfigError::EnvVarError`] when the variable is not valid UTF-8.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => Self::resolve(Some(&value)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::EnvVarError(format!(
                "{} must be valid UTF-8",
                Self::ENV_VAR
            ))),
        }
    }

    /// Resolve an optional discriminator, applying the `dev` default
    ///
    /// `None` and blank strings both select `Dev`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] when the discriminator
    /// names no known environment.
    pub fn resolve(name: Option<&str>) -> Result<Self, ConfigError> {
        match name {
            Some(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }

    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Stage => "stage",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Dev
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Discriminators are matched verbatim; there is no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "stage" => Ok(Environment::Stage),
            _ => Err(ConfigError::unknown_environment(s)),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
