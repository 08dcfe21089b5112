//! Moneymour deployment environments.
//!
//! Identifiers are matched exactly: no aliases, no case folding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::EnvironmentError;

/// Environment used when the caller does not pick one.
pub const DEFAULT_ENVIRONMENT: Environment = Environment::Sandbox;

/// Process environment variable naming the default environment.
pub const ENVIRONMENT_VAR: &str = "MONEYMOUR_ENVIRONMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Sandbox,
    Stage,
    Development,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Production,
        Environment::Sandbox,
        Environment::Stage,
        Environment::Development,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
            Environment::Stage => "stage",
            Environment::Development => "development",
        }
    }

    /// Load the environment from `MONEYMOUR_ENVIRONMENT` (a `.env` file is read first).
    ///
    /// Unset means [`DEFAULT_ENVIRONMENT`]. A value that is set but not one of
    /// the four identifiers is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, EnvironmentError> {
        dotenvy::dotenv().ok();

        match std::env::var(ENVIRONMENT_VAR) {
            Ok(name) => name.parse(),
            Err(_) => {
                tracing::debug!(default = %DEFAULT_ENVIRONMENT, "{ENVIRONMENT_VAR} not set");
                Ok(DEFAULT_ENVIRONMENT)
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        DEFAULT_ENVIRONMENT
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = EnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            "stage" => Ok(Environment::Stage),
            "development" => Ok(Environment::Development),
            _ => Err(EnvironmentError::Invalid(s.to_string())),
        }
    }
}

/// Check that `name` is a known environment identifier.
pub fn validate(name: &str) -> Result<(), EnvironmentError> {
    name.parse::<Environment>().map(|_| ())
}
