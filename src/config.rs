use std::env;
use std::time::Duration;

use crate::error::ConfigError;
use crate::session::{DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGenConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub camera_enabled: bool,
    pub session_ttl: Duration,
    pub max_sessions: usize,
    pub text_gen: Option<TextGenConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            camera_enabled: true,
            session_ttl: DEFAULT_IDLE_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
            text_gen: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("ACEAI_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("ACEAI_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { var: "ACEAI_PORT", raw })?,
            None => defaults.port,
        };

        let camera_enabled = match lookup("ACEAI_CAMERA") {
            Some(raw) => !matches!(raw.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"),
            None => defaults.camera_enabled,
        };

        let session_ttl = match lookup("ACEAI_SESSION_TTL_MINUTES") {
            Some(raw) => match raw.trim().parse::<u64>().ok().filter(|m| *m > 0) {
                Some(minutes) => Duration::from_secs(minutes.saturating_mul(60)),
                None => return Err(ConfigError::InvalidValue { var: "ACEAI_SESSION_TTL_MINUTES", raw }),
            },
            None => defaults.session_ttl,
        };

        let max_sessions = match lookup("ACEAI_MAX_SESSIONS") {
            Some(raw) => match raw.trim().parse::<usize>().ok().filter(|m| *m > 0) {
                Some(max) => max,
                None => return Err(ConfigError::InvalidValue { var: "ACEAI_MAX_SESSIONS", raw }),
            },
            None => defaults.max_sessions,
        };

        let text_gen = lookup("ACEAI_TEXTGEN_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|base_url| TextGenConfig {
                base_url,
                api_key: lookup("ACEAI_TEXTGEN_API_KEY").filter(|key| !key.trim().is_empty()),
                model: lookup("ACEAI_TEXTGEN_MODEL").unwrap_or_else(|| "gpt2".into()),
            });

        Ok(Self {
            host,
            port,
            camera_enabled,
            session_ttl,
            max_sessions,
            text_gen,
        })
    }
}
