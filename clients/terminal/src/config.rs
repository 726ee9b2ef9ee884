use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const PAUSE_MS: &str = "TWENTYONE_PAUSE_MS";
pub const LONG_PAUSE_MS: &str = "TWENTYONE_LONG_PAUSE_MS";
pub const CLEAR_SCREEN: &str = "TWENTYONE_CLEAR_SCREEN";
pub const RULES_FILE: &str = "TWENTYONE_RULES_FILE";
pub const SEED: &str = "TWENTYONE_SEED";
pub const LOG_FILE: &str = "TWENTYONE_LOG_FILE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Could not read rules file {}: {source}", .path.display())]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pause after a hit or stay.
    pub pause: Duration,
    /// Pause after a blackjack is announced.
    pub long_pause: Duration,
    pub clear_screen: bool,
    pub rules_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(1500),
            long_pause: Duration::from_millis(2500),
            clear_screen: true,
            rules_file: None,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let pause = match get(PAUSE_MS) {
            Some(v) => Duration::from_millis(parse_number(PAUSE_MS, &v)?),
            None => defaults.pause,
        };
        let long_pause = match get(LONG_PAUSE_MS) {
            Some(v) => Duration::from_millis(parse_number(LONG_PAUSE_MS, &v)?),
            None => defaults.long_pause,
        };
        let clear_screen = match get(CLEAR_SCREEN) {
            Some(v) => parse_flag(CLEAR_SCREEN, &v)?,
            None => defaults.clear_screen,
        };
        let seed = get(SEED).map(|v| parse_number(SEED, &v)).transpose()?;

        Ok(Config {
            pause,
            long_pause,
            clear_screen,
            rules_file: get(RULES_FILE).map(PathBuf::from),
            seed,
            log_file: get(LOG_FILE).map(PathBuf::from),
        })
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
