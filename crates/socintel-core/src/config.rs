use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_count = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let env = parse_environment(&or_default("SOCINTEL_ENV", "development"))?;
    let log_level = or_default("SOCINTEL_LOG_LEVEL", "info");
    let posts_path = PathBuf::from(or_default("SOCINTEL_POSTS_PATH", "./data/posts.json"));

    let tei_url = lookup("SOCINTEL_TEI_URL")
        .ok()
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty());

    let inference_timeout_secs = parse_u64("SOCINTEL_INFERENCE_TIMEOUT_SECS", "10")?;
    let lexicon_enabled = parse_bool("SOCINTEL_LEXICON_ENABLED", "true")?;
    let max_input_chars = parse_count("SOCINTEL_MAX_INPUT_CHARS", "512")?;
    let topics_per_post = parse_count("SOCINTEL_TOPICS_PER_POST", "5")?;
    let top_topics_limit = parse_count("SOCINTEL_TOP_TOPICS", "10")?;
    let trend_window = parse_count("SOCINTEL_TREND_WINDOW", "10")?;

    Ok(AppConfig {
        env,
        log_level,
        posts_path,
        tei_url,
        inference_timeout_secs,
        lexicon_enabled,
        max_input_chars,
        topics_per_post,
        top_topics_limit,
        trend_window,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SOCINTEL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
