//! Configuration for the wizard and the scheduling client.
//!
//! Settings are resolved in layers, later layers winning:
//!
//! 1. Built-in defaults (`http://localhost:5000/api/schedule`, 3 second
//!    notifications, free-text slots, no preferred-count step)
//! 2. A TOML file: the path given to [`ConfigBuilder::with_config_file`], or
//!    `$XDG_CONFIG_HOME/cadence/config.toml` when it exists
//! 3. The `CADENCE_ENDPOINT` environment variable
//! 4. Explicit overrides set on the builder (usually CLI flags)
//!
//! ```toml
//! endpoint = "http://localhost:5000/api/schedule"
//! timeout_secs = 30
//! notification_ttl_secs = 3
//! collect_preferred_count = true
//! slot_mode = "grid"
//! grid_labels = ["07:00", "12:00", "18:00"]
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use jiff::SignedDuration;
use serde::Deserialize;
use url::Url;

use crate::{
    error::{Result, ResultExt, SchedulerError},
    notification::DEFAULT_TTL,
    slots::{default_grid, SlotMode},
};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/schedule";

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV: &str = "CADENCE_ENDPOINT";

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where schedule requests are POSTed
    pub endpoint: Url,
    /// Optional request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Lifetime of each notification
    pub notification_ttl: SignedDuration,
    /// Whether the wizard asks for a preferred workout count
    pub collect_preferred_count: bool,
    /// Time slot input variant
    pub slot_mode: SlotMode,
    /// Labels offered in grid mode
    pub grid_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: None,
            notification_ttl: DEFAULT_TTL,
            collect_preferred_count: false,
            slot_mode: SlotMode::default(),
            grid_labels: default_grid(),
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    notification_ttl_secs: Option<u64>,
    collect_preferred_count: Option<bool>,
    slot_mode: Option<SlotMode>,
    grid_labels: Option<Vec<String>>,
}

/// Builder for resolving a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    endpoint: Option<String>,
    collect_preferred_count: Option<bool>,
    slot_mode: Option<SlotMode>,
    timeout: Option<Duration>,
    read_environment: bool,
}

impl ConfigBuilder {
    /// Creates a new builder that reads the default file location and the
    /// environment.
    pub fn new() -> Self {
        Self {
            read_environment: true,
            ..Self::default()
        }
    }

    /// Sets an explicit configuration file. Unlike the default location, an
    /// explicit file must exist.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the backend endpoint.
    pub fn with_endpoint(mut self, endpoint: Option<impl Into<String>>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Forces the preferred-count step on or off.
    pub fn with_preferred_count(mut self, enabled: Option<bool>) -> Self {
        if enabled.is_some() {
            self.collect_preferred_count = enabled;
        }
        self
    }

    /// Overrides the time slot input variant.
    pub fn with_slot_mode(mut self, mode: Option<SlotMode>) -> Self {
        if mode.is_some() {
            self.slot_mode = mode;
        }
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if timeout.is_some() {
            self.timeout = timeout;
        }
        self
    }

    /// Skip the default file location and `CADENCE_ENDPOINT`.
    pub fn isolated(mut self) -> Self {
        self.read_environment = false;
        self
    }

    /// Resolves all layers into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::FileSystem` if an explicit file cannot be read
    /// and `SchedulerError::Configuration` for unparsable files, endpoints or
    /// values, including a zero timeout.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        let file = match (&self.config_file, self.read_environment) {
            (Some(path), _) => Some(load_file(path)?),
            (None, true) => match default_config_path() {
                Some(path) => Some(load_file(&path)?),
                None => None,
            },
            (None, false) => None,
        };

        if let Some(file) = file {
            apply_file(&mut config, file)?;
        }

        if self.read_environment {
            if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
                if !endpoint.trim().is_empty() {
                    config.endpoint = parse_endpoint(&endpoint)?;
                }
            }
        }

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = parse_endpoint(endpoint)?;
        }
        if let Some(enabled) = self.collect_preferred_count {
            config.collect_preferred_count = enabled;
        }
        if let Some(mode) = self.slot_mode {
            config.slot_mode = mode;
        }
        if self.timeout.is_some() {
            config.timeout = self.timeout;
        }
        if config.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(SchedulerError::Configuration {
                message: "timeout must be at least one second".to_string(),
            });
        }

        log::debug!("resolved configuration: {config:?}");
        Ok(config)
    }
}

/// Location of the per-user configuration file, if one exists.
pub fn default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("cadence").find_config_file("config.toml")
}

fn load_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| SchedulerError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&contents).with_context(format!("Invalid config file {}", path.display()))
}

fn apply_file(config: &mut Config, file: ConfigFile) -> Result<()> {
    if let Some(endpoint) = file.endpoint {
        config.endpoint = parse_endpoint(&endpoint)?;
    }
    if let Some(secs) = file.timeout_secs {
        config.timeout = Some(Duration::from_secs(secs));
    }
    if let Some(secs) = file.notification_ttl_secs {
        let secs = i64::try_from(secs).map_err(|_| SchedulerError::Configuration {
            message: format!("notification_ttl_secs is too large: {secs}"),
        })?;
        config.notification_ttl = SignedDuration::from_secs(secs);
    }
    if let Some(enabled) = file.collect_preferred_count {
        config.collect_preferred_count = enabled;
    }
    if let Some(mode) = file.slot_mode {
        config.slot_mode = mode;
    }
    if let Some(labels) = file.grid_labels {
        if labels.is_empty() {
            return Err(SchedulerError::Configuration {
                message: "grid_labels must not be empty".to_string(),
            });
        }
        config.grid_labels = labels;
    }
    Ok(())
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(format!("Invalid endpoint '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SchedulerError::Configuration {
            message: format!("Endpoint must use http or https, got '{other}'"),
        }),
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|_| unreachable!("default endpoint is valid"))
}
