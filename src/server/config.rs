//! Environment-based server configuration.

use std::{net::SocketAddr, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

/// Frontend origins allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset.
pub static DEFAULT_CORS_ALLOWED_ORIGINS: [&str; 2] = [
    "https://wonderful-smoke-0751a6310.6.azurestaticapps.net",
    "https://wonderful-smoke-0751a6310-preview.centralus.6.azurestaticapps.net",
];

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database URL, either `DATABASE_URL` or composed from the `DB_*` variables
    pub database_url: String,
    /// Timeout for establishing database connections
    pub db_connect_timeout: Duration,
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,
    /// Origins allowed by the CORS policy
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration using `lookup` to resolve variable names.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => compose_database_url(
                &require("DB_USERNAME")?,
                &require("DB_PASSWORD")?,
                &require("DB_SERVER")?,
                &require("DB_NAME")?,
            )?,
        };

        let db_connect_timeout = match get("DB_CONNECT_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "DB_CONNECT_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
        };

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(|origin| origin.trim_end_matches('/').to_string())
                .collect(),
            None => DEFAULT_CORS_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Ok(Self {
            database_url,
            db_connect_timeout,
            bind_address,
            cors_allowed_origins,
        })
    }
}

/// Build a PostgreSQL URL from its parts, percent-encoding the credentials.
fn compose_database_url(
    username: &str,
    password: &str,
    server: &str,
    name: &str,
) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "DB_SERVER".to_string(),
        reason,
    };

    let mut url =
        Url::parse(&format!("postgres://{}", server)).map_err(|e| invalid(e.to_string()))?;
    // `Url` leaves `%` untouched in userinfo, so encode the credentials up front
    url.set_username(&urlencoding::encode(username))
        .map_err(|_| invalid("server cannot carry credentials".to_string()))?;
    url.set_password(Some(&urlencoding::encode(password)))
        .map_err(|_| invalid("server cannot carry credentials".to_string()))?;
    url.set_path(name);

    Ok(url.to_string())
}
