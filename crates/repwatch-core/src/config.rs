use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, for tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Parsing is decoupled from the real environment so it
/// can be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_ratio = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(var, format!("{value} is outside [0, 1]")));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("REPWATCH_ENV", "development"));
    let bind_addr = parse_addr("REPWATCH_BIND_ADDR", "0.0.0.0:8001")?;
    let log_level = or_default("REPWATCH_LOG_LEVEL", "info");

    let neg_alert_ratio = parse_ratio("REPWATCH_NEG_ALERT_RATIO", "0.30")?;
    let neg_alert_min_mentions = parse_usize("REPWATCH_NEG_ALERT_MIN_MENTIONS", "10")?;
    let top_k_keywords = parse_usize("REPWATCH_TOP_K_KEYWORDS", "10")?;

    let support_contact = or_default("REPWATCH_SUPPORT_CONTACT", "support@example.com");
    let generation_timeout_secs = parse_u64("REPWATCH_GENERATION_TIMEOUT_SECS", "10")?;
    if generation_timeout_secs == 0 {
        return Err(invalid(
            "REPWATCH_GENERATION_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }
    let draft_concurrency = parse_usize("REPWATCH_DRAFT_CONCURRENCY", "4")?.max(1);

    let openai_api_key = lookup("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let openai_model = or_default("OPENAI_MODEL", "gpt-4o-mini");
    let openai_base_url = or_default("REPWATCH_OPENAI_BASE_URL", "https://api.openai.com/v1");

    let rate_limit_per_minute = parse_usize("REPWATCH_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        neg_alert_ratio,
        neg_alert_min_mentions,
        top_k_keywords,
        support_contact,
        generation_timeout_secs,
        draft_concurrency,
        openai_api_key,
        openai_model,
        openai_base_url,
        rate_limit_per_minute,
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

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
