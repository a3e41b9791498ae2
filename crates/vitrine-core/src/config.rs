use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let storefront_api_url = require("VITRINE_STOREFRONT_API_URL")?;
    let storefront_api_token = require("VITRINE_STOREFRONT_API_TOKEN")?;

    let env = parse_environment(&or_default("VITRINE_ENV", "development"));

    let bind_addr = parse_addr("VITRINE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");
    let default_locale = or_default("VITRINE_DEFAULT_LOCALE", "en-US");
    let locales_path = PathBuf::from(or_default("VITRINE_LOCALES_PATH", "./config/locales.yaml"));

    let revalidate_secs = parse_u64("VITRINE_REVALIDATE_SECS", "10")?;
    let fetch_timeout_secs = parse_u64("VITRINE_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_max_retries = parse_u32("VITRINE_FETCH_MAX_RETRIES", "3")?;
    let fetch_retry_backoff_base_ms = parse_u64("VITRINE_FETCH_RETRY_BACKOFF_BASE_MS", "500")?;
    let user_agent = or_default("VITRINE_USER_AGENT", "vitrine/0.1 (storefront)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        storefront_api_url,
        storefront_api_token,
        default_locale,
        locales_path,
        revalidate_secs,
        fetch_timeout_secs,
        fetch_max_retries,
        fetch_retry_backoff_base_ms,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
