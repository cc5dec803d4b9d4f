//! Runtime settings, read from the environment so the binary needs no arguments.
use crate::constants::{DATA_DIR_VAR, DEFAULT_LOG_LEVEL, LOG_LEVEL_VAR};
use log::{LevelFilter, ParseLevelError};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_values(env::var_os(DATA_DIR_VAR), env::var(LOG_LEVEL_VAR).ok())
    }

    /// Unset values fall back to the current directory and info logging
    pub fn from_values(
        data_dir: Option<OsString>,
        log_level: Option<String>,
    ) -> Result<Config, ConfigError> {
        let data_dir = match data_dir {
            Some(d) => PathBuf::from(d),
            None => env::current_dir()?,
        };

        let log_level = match log_level {
            Some(l) => LevelFilter::from_str(l.trim())
                .map_err(|e| ConfigError::InvalidLogLevel(l.clone(), e))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Config {
            data_dir,
            log_level,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to determine the current directory {0}")]
    CurrentDir(#[from] std::io::Error),
    #[error("{0} is not a log level: {1}")]
    InvalidLogLevel(String, ParseLevelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_values(
            Some(OsString::from("/var/lib/hotelbook")),
            Some("debug".to_string()),
        )?;

        assert_eq!(PathBuf::from("/var/lib/hotelbook"), config.data_dir);
        assert_eq!(LevelFilter::Debug, config.log_level);
        Ok(())
    }

    #[test]
    fn test_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_values(None, None)?;

        assert_eq!(env::current_dir()?, config.data_dir);
        assert_eq!(DEFAULT_LOG_LEVEL, config.log_level);
        Ok(())
    }

    #[test]
    fn test_bad_level() {
        match Config::from_values(None, Some("loud".to_string())) {
            Err(ConfigError::InvalidLogLevel(l, _)) => assert_eq!("loud", l),
            other => panic!("Expected an invalid level, got {:?}", other),
        }
    }
}
