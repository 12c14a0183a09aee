//! Configuration for the console and the development backend
//!
//! [`SessionConfig`] is the record sent to the session-start endpoint. It is
//! built once from fixed defaults and never edited. [`AppConfig`] carries
//! everything around it: backend URL, UI preferences, logging and server
//! settings, loaded from an optional TOML file plus environment overrides.

use crate::{Result, VaaniError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default backend when `PIPECAT_API_URL` is unset
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "PIPECAT_API_URL";

/// Provider selection sent to the session-start endpoint
///
/// Values are free-form labels; nothing here checks them against what the
/// platform accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Locale tag, e.g. `hi-IN`
    pub language: String,
    /// Speech-to-text provider
    pub stt: String,
    /// Text-to-speech provider
    pub tts: String,
    /// Language-model provider
    pub llm: String,
    /// Speaker voice identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: "hi-IN".to_string(),
            stt: "sarvam".to_string(),
            tts: "sarvam".to_string(),
            llm: "sarvam".to_string(),
            speaker: None,
        }
    }
}

impl SessionConfig {
    /// Label/value pairs in display order
    pub fn display_rows(&self) -> Vec<(&'static str, &str)> {
        let mut rows = vec![
            ("Language", self.language.as_str()),
            ("STT", self.stt.as_str()),
            ("TTS", self.tts.as_str()),
            ("LLM", self.llm.as_str()),
        ];
        if let Some(speaker) = &self.speaker {
            rows.push(("Speaker", speaker.as_str()));
        }
        rows
    }
}

/// Which presentation the window opens with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Visualizer, connect button and audio control around the config
    Console,
    /// Full status page with config grid and cost estimate
    #[default]
    Custom,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Console => write!(f, "Console"),
            ViewMode::Custom => write!(f, "Custom"),
        }
    }
}

/// Color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// UI preferences
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Initial tab
    #[serde(default)]
    pub mode: ViewMode,
    /// Color scheme
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Open with the debug panel expanded
    #[serde(default)]
    pub show_debug_panel: bool,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Development backend settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Daily REST API base
    #[serde(default = "default_daily_api_url")]
    pub daily_api_url: String,
    /// Bearer key for Daily; room creation is refused without it
    #[serde(default)]
    pub daily_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            daily_api_url: default_daily_api_url(),
            daily_api_key: None,
        }
    }
}

/// Top-level application configuration
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Base URL of the session backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Optional limit on the session-start request; unset means wait forever
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: None,
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_log_level() -> String {
    "vaani=debug,info".to_string()
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
}

fn default_port() -> u16 {
    8000
}

fn default_daily_api_url() -> String {
    "https://api.daily.co/v1".to_string()
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| VaaniError::Config(e.to_string()))
    }

    /// Load from a TOML file, then apply environment overrides
    ///
    /// A missing file at the default location is not an error; an explicit
    /// path that cannot be read is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            VaaniError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Apply overrides from a variable lookup
    ///
    /// Takes the lookup as a closure so tests don't have to touch the
    /// process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(BACKEND_URL_ENV) {
            self.backend_url = url;
        }
        if let Some(level) = non_empty("VAANI_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = non_empty("VAANI_LOG_JSON") {
            self.logging.json = matches!(json.as_str(), "1" | "true" | "TRUE" | "yes");
        }
        if let Some(host) = non_empty("VAANI_HOST") {
            self.server.host = host
                .parse()
                .map_err(|e| VaaniError::Config(format!("VAANI_HOST: {}", e)))?;
        }
        if let Some(port) = non_empty("VAANI_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| VaaniError::Config(format!("VAANI_PORT: {}", e)))?;
        }
        if let Some(key) = non_empty("DAILY_API_KEY") {
            self.server.daily_api_key = Some(key);
        }
        if let Some(secs) = non_empty("VAANI_REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .parse()
                .map_err(|e| VaaniError::Config(format!("VAANI_REQUEST_TIMEOUT_SECS: {}", e)))?;
            self.request_timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Session-start endpoint derived from the backend URL
    pub fn start_session_url(&self) -> String {
        format!("{}/api/start-session", self.backend_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `$VAANI_CONFIG`, else `<config_dir>/vaani/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("VAANI_CONFIG") {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("vaani").join("config.toml"))
}
