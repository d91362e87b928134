use crate::error::{FlightXmlError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const HOME_ENV: &str = "FLIGHTXML_HOME";

pub const DEFAULT_WSDL_URL: &str = "https://flightxml.flightaware.com/soap/FlightXML2/wsdl";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, stored in `<config dir>/config.json`.
///
/// Credentials are never read from here; they come from flags or the
/// environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FlightXmlConfig {
    /// Location of the service description
    #[serde(default = "default_wsdl_url")]
    pub wsdl_url: String,

    /// Timeout for each HTTP round-trip, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pretty-print result JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_wsdl_url() -> String {
    DEFAULT_WSDL_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_pretty() -> bool {
    true
}

impl Default for FlightXmlConfig {
    fn default() -> Self {
        Self {
            wsdl_url: default_wsdl_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pretty: true,
        }
    }
}

impl FlightXmlConfig {
    /// `$FLIGHTXML_HOME` if set, otherwise the platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }
        ProjectDirs::from("com", "flightxml", "flightxml")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| FlightXmlError::Config("Could not determine config dir".into()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FlightXmlConfig = serde_json::from_str(&content)?;
        config.validated()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validated(self) -> Result<Self> {
        if self.wsdl_url.trim().is_empty() {
            return Err(FlightXmlError::Config("wsdl_url cannot be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(FlightXmlError::Config(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(self)
    }
}
