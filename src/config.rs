use crate::args::CliArgs;

use lmr::Result;

use std::{fs, io::ErrorKind, str::FromStr};

use anyhow::Context;

use log::LevelFilter;

use serde::Deserialize;

use simple_logger::SimpleLogger;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown log level: {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    /// Bare `host[:port]` or a full base URL
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_host() -> String {
    "localhost:3000".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        return Self {
            host: default_host(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        return Self {
            level: default_log_level(),
        };
    }
}

impl Config {
    /// Reads the config file named on the command line, if there is one, then applies CLI overrides.
    pub fn load(cli: &CliArgs) -> Result<Self> {
        let mut config = match fs::read_to_string(&cli.config) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("Couldn't parse config file: {:?}", cli.config))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                Err(e).with_context(|| format!("Couldn't read config file: {:?}", cli.config))?
            }
        };

        if let Some(ref host) = cli.host {
            config.backend.host = host.clone();
        }
        if let Some(ref level) = cli.log_level {
            config.logging.level = level.clone();
        }

        return Ok(config);
    }

    pub fn parse(contents: &str) -> Result<Self> {
        return Ok(toml::from_str(contents)?);
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        let level = LevelFilter::from_str(&self.logging.level)
            .map_err(|_| ConfigError::LogLevel(self.logging.level.clone()))?;

        return Ok(level);
    }
}

/// Installs the process-wide logger. `RUST_LOG` wins over the configured level.
pub fn configure_logger(config: &Config) -> Result {
    SimpleLogger::new()
        .with_level(config.log_level()?)
        .env()
        .init()?;

    return Ok(());
}
