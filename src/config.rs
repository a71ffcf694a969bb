use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_HTTP_ADDRESS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_IDLE_TIMEOUT_SECS,
};

/// Deployment environment, selects log format and verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => Err(format!("Invalid ENV: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub storage_path: String,
    pub http_address: String,
    pub http_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// When `CONFIG_PATH` is set the dotenv file it names is loaded first and
    /// must exist. Otherwise a `.env` in the working directory is used if present.
    pub fn from_env() -> Result<Self, String> {
        match env::var("CONFIG_PATH") {
            Ok(config_path) => {
                if !Path::new(&config_path).exists() {
                    return Err(format!("CONFIG_PATH {} does not exist", config_path));
                }
                dotenvy::from_path(&config_path)
                    .map_err(|e| format!("failed to read config: {}", e))?;
            }
            // Load .env file if it exists (development)
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let environment = match lookup("ENV") {
            Some(v) => v.parse()?,
            None => Environment::Local,
        };

        let storage_path = lookup("STORAGE_PATH")
            .filter(|s| !s.trim().is_empty())
            .ok_or("STORAGE_PATH must be set")?;

        let http_address =
            lookup("HTTP_ADDRESS").unwrap_or_else(|| DEFAULT_HTTP_ADDRESS.to_string());

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(v) => v.parse().map_err(|_| "Invalid HTTP_TIMEOUT_SECS")?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let idle_timeout_secs = match lookup("HTTP_IDLE_TIMEOUT_SECS") {
            Some(v) => v.parse().map_err(|_| "Invalid HTTP_IDLE_TIMEOUT_SECS")?,
            None => DEFAULT_IDLE_TIMEOUT_SECS,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            environment,
            storage_path,
            http_address,
            http_timeout_secs,
            idle_timeout_secs,
            allowed_origins,
        })
    }

    /// Per-request timeout
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Idle timeout for pooled storage connections
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
