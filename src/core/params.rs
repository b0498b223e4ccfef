//! Build parameter resolution.
//!
//! Raw CLI input is validated and normalized here before it reaches the
//! pipelines. This module touches neither the filesystem nor the network.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error while resolving user-supplied build parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing required parameter: --config <configuration>")]
    MissingConfiguration,

    #[error("invalid configuration `{0}`; expected `debug` or `release`")]
    InvalidConfiguration(String),
}

/// Build configuration handed to the generator as its build type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildConfig {
    Debug,
    Release,
}

impl BuildConfig {
    /// The lowercase token used both on the CLI and in generator arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfig::Debug => "debug",
            BuildConfig::Release => "release",
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfig {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(BuildConfig::Debug),
            "release" => Ok(BuildConfig::Release),
            other => Err(ParamError::InvalidConfiguration(other.to_string())),
        }
    }
}

/// A named build target, or every default target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildTarget {
    All,
    Named(String),
}

impl BuildTarget {
    /// Normalize an optional target name. Absence and the literal `all`
    /// both mean every default target.
    pub fn from_option(target: Option<String>) -> BuildTarget {
        match target {
            None => BuildTarget::All,
            Some(name) if name == "all" => BuildTarget::All,
            Some(name) => BuildTarget::Named(name),
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTarget::All => f.write_str("all"),
            BuildTarget::Named(name) => f.write_str(name),
        }
    }
}

/// Resolved parameters for the primary build pipeline.
#[derive(Debug, Clone)]
pub struct BuildParams {
    pub config: BuildConfig,
    pub target: BuildTarget,
}

/// Validate and normalize raw CLI input.
pub fn resolve(config: Option<&str>, target: Option<String>) -> Result<BuildParams, ParamError> {
    let config = match config {
        None => return Err(ParamError::MissingConfiguration),
        Some(raw) => raw.parse::<BuildConfig>()?,
    };

    Ok(BuildParams {
        config,
        target: BuildTarget::from_option(target),
    })
}
