//! Runner settings: defaults, TOML file and command-line overrides.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    BadValue { flag: String, value: String },
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Configuration for a self-play run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before it is recorded as unfinished
    pub max_plies: u32,
    /// Seed for both players; `None` draws from entropy
    pub seed: Option<u64>,
    /// Log every finished game at info level
    pub verbose: bool,
    /// Where to write the JSON results
    pub output: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 400,
            seed: None,
            verbose: true,
            output: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build from command-line arguments (program name excluded).
    ///
    /// `--config FILE` is read first wherever it appears; the remaining flags
    /// override its values.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = match flag_value(args, "--config")? {
            Some(path) => Self::load(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--games" | "-g" => {
                    self.games = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--max-plies" | "-p" => {
                    self.max_plies = parse_value(flag, args.get(i + 1))?;
                    i += 1;
                }
                "--seed" | "-s" => {
                    self.seed = Some(parse_value(flag, args.get(i + 1))?);
                    i += 1;
                }
                "--output" | "-o" => {
                    let path = args
                        .get(i + 1)
                        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                    self.output = Some(PathBuf::from(path));
                    i += 1;
                }
                // consumed by from_args
                "--config" => i += 1,
                "--quiet" | "-q" => self.verbose = false,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 1;
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, ConfigError> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string())),
        None => Ok(None),
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::BadValue {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
