//! Process configuration, read from the environment once at startup.

use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_DATABASE_PATH: &str = "mods.sqlite";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the process needs from its environment.
///
/// `DATABASE_URL` is the path of the SQLite file holding the `mods` table.
/// `OPENAI_BASE_URL` exists so tests and proxies can point the client at a
/// different host; the trailing slash is normalized by the client itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub database_path: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let api_base =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let database_path =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let request_timeout = match env::var("OPENAI_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    name: "OPENAI_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            api_key,
            api_base,
            request_timeout,
            database_path,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test touches the process environment; keeping it single avoids
    // races between parallel test threads.
    #[test]
    fn from_env_reads_overrides_then_defaults() {
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("OPENAI_BASE_URL", "http://127.0.0.1:9099/v1");
        env::set_var("DATABASE_URL", "/tmp/mods-test.sqlite");
        env::set_var("HOST", "0.0.0.0");
        env::set_var("PORT", "9090");
        env::set_var("OPENAI_TIMEOUT_SECS", "5");

        let config = AppConfig::from_env().expect("config with overrides");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_base, "http://127.0.0.1:9099/v1");
        assert_eq!(config.database_path, "/tmp/mods-test.sqlite");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("DATABASE_URL");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("OPENAI_TIMEOUT_SECS");

        let config = AppConfig::from_env().expect("config with defaults");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );

        env::set_var("PORT", "not-a-port");
        assert!(AppConfig::from_env().is_err());
        env::remove_var("PORT");
    }
}
