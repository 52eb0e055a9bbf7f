use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

/// Process configuration, read once at startup and passed to the gateway.
#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub openrouter_api_key: String,
    pub openrouter_url: String,
    pub model: String,
    pub fetch_timeout: Duration,
    pub summary_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_addr", &self.server_addr)
            .field("openrouter_api_key", &"<redacted>")
            .field("openrouter_url", &self.openrouter_url)
            .field("model", &self.model)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("summary_timeout", &self.summary_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openrouter_api_key = lookup("OPENROUTER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("OPENROUTER_API_KEY is not set".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?,
            None => DEFAULT_PORT,
        };
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            openrouter_api_key,
            openrouter_url: lookup("OPENROUTER_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_URL.to_string()),
            model: lookup("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            fetch_timeout: secs(&lookup, "FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?,
            summary_timeout: secs(&lookup, "SUMMARY_TIMEOUT_SECS", DEFAULT_SUMMARY_TIMEOUT_SECS)?,
            request_timeout: secs(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }

    /// Defaults for everything except the API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            server_addr: SocketAddr::new(IpAddr::from([127, 0, 0, 1]), DEFAULT_PORT),
            openrouter_api_key: api_key.into(),
            openrouter_url: DEFAULT_OPENROUTER_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            summary_timeout: Duration::from_secs(DEFAULT_SUMMARY_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

fn secs<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", key, e))),
        None => Ok(Duration::from_secs(default)),
    }
}
