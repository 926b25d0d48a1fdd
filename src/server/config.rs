use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

/// Requests allowed per client within one rate limit window.
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;

/// Length of the rate limit window, 15 minutes.
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 900;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// The only origin allowed to make cross-origin requests.
    pub host: String,

    pub rate_limit_max_requests: u32,
    pub rate_limit_window: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            host: required_var("HOST")?,
            rate_limit_max_requests: optional_var(
                "RATE_LIMIT_MAX_REQUESTS",
                DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            )?,
            rate_limit_window: Duration::from_secs(optional_var(
                "RATE_LIMIT_WINDOW_SECS",
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )?),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a numeric variable, falling back to `default` when it is unset.
///
/// Zero is rejected since neither the request budget nor the window may be empty.
fn optional_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + From<u8>,
{
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };

    let value = raw.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' is not a number", raw),
    })?;

    if value == T::from(0) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(value)
}
