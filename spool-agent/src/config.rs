//! Agent configuration
//!
//! The agent is configured from an optional `PrintOSconfig.ini` in the
//! working directory: plain `key=value` lines without a section header.
//! Values are taken literally, with no quoting, escapes, inline comments or
//! variable expansion. The file replaces the built-in defaults as a whole.
//! If it is missing, malformed, incomplete or repeats a key, none of its
//! values are used.

use ini::{Ini, ParseOption};
use spool_core::domain::credentials::Credentials;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "PrintOSconfig.ini";

pub const DEFAULT_LOOKUP_URL: &str = "http://localhost:8083/lookup";
pub const DEFAULT_STATUS_URL: &str = "http://localhost:8083/update";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_USERNAME: &str = "ReceiptPrinterPi";
pub const DEFAULT_PASSWORD: &str = "blueberry";

/// Intervals are whole seconds and never shorter than this
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

const KEY_LOOKUP_URL: &str = "url";
const KEY_STATUS_URL: &str = "statusURL";
const KEY_SLEEP: &str = "sleep";
const KEY_USERNAME: &str = "username";
const KEY_PASSWORD: &str = "password";

/// Reasons a config file is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] ini::ParseError),

    #[error("missing key `{0}`")]
    MissingKey(&'static str),

    #[error("key `{0}` is set more than once")]
    DuplicateKey(String),

    #[error("invalid sleep `{0}`, expected whole seconds")]
    InvalidInterval(String),

    #[error("invalid {key} `{value}`, must start with http:// or https://")]
    InvalidUrl { key: &'static str, value: String },
}

impl ConfigError {
    /// Whether the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Agent configuration
///
/// Built once at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint returning pending print jobs
    pub lookup_url: String,

    /// Endpoint accepting completion reports
    pub status_url: String,

    /// Pause before every poll cycle
    pub poll_interval: Duration,

    /// Device credentials sent with every request
    pub credentials: Credentials,
}

impl Config {
    /// Creates a configuration, raising the interval to the one second minimum
    pub fn new(
        lookup_url: impl Into<String>,
        status_url: impl Into<String>,
        poll_interval_secs: u64,
        credentials: Credentials,
    ) -> Self {
        Self {
            lookup_url: lookup_url.into(),
            status_url: status_url.into(),
            poll_interval: Duration::from_secs(poll_interval_secs.max(MIN_POLL_INTERVAL_SECS)),
            credentials,
        }
    }

    /// Loads `PrintOSconfig.ini` from the working directory, or the defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads the given file, or the defaults if it cannot be used
    ///
    /// Never fails: the reason for falling back is logged as a warning.
    pub fn load_from(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                warn!("No {} found, using default config", path.display());
                Self::default()
            }
            Err(e) => {
                warn!(
                    "Failed to read {}, using default config: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Reads and validates a config file
    ///
    /// All five keys are required. Keys match case-insensitively, unknown
    /// keys are ignored and keys under a `[section]` header do not count.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let ini = Ini::load_from_str_opt(
            &contents,
            ParseOption {
                enabled_quote: false,
                enabled_escape: false,
                ..ParseOption::default()
            },
        )?;

        let mut entries = HashMap::new();
        for (key, value) in ini.general_section().iter() {
            match entries.entry(key.to_ascii_lowercase()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateKey(key.to_string())),
                Entry::Vacant(slot) => {
                    slot.insert(value.to_string());
                }
            }
        }

        let mut take = |key: &'static str| {
            entries
                .remove(&key.to_ascii_lowercase())
                .ok_or(ConfigError::MissingKey(key))
        };

        let lookup_url = take(KEY_LOOKUP_URL)?;
        let status_url = take(KEY_STATUS_URL)?;
        let sleep = take(KEY_SLEEP)?;
        let username = take(KEY_USERNAME)?;
        let password = take(KEY_PASSWORD)?;

        let poll_interval_secs = sleep
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidInterval(sleep.clone()))?;
        if poll_interval_secs < MIN_POLL_INTERVAL_SECS {
            warn!(
                "sleep={} is below the minimum, polling every {}s",
                poll_interval_secs, MIN_POLL_INTERVAL_SECS
            );
        }

        let config = Self::new(
            lookup_url,
            status_url,
            poll_interval_secs,
            Credentials::new(username, password),
        );
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// The interval needs no check: [`Config::new`] already enforces the
    /// minimum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            (KEY_LOOKUP_URL, &self.lookup_url),
            (KEY_STATUS_URL, &self.status_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    key,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOOKUP_URL,
            DEFAULT_STATUS_URL,
            DEFAULT_POLL_INTERVAL_SECS,
            Credentials::new(DEFAULT_USERNAME, DEFAULT_PASSWORD),
        )
    }
}
