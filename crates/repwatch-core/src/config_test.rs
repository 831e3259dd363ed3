use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8001");
    assert_eq!(cfg.log_level, "info");
    assert!((cfg.neg_alert_ratio - 0.30).abs() < f64::EPSILON);
    assert_eq!(cfg.neg_alert_min_mentions, 10);
    assert_eq!(cfg.top_k_keywords, 10);
    assert_eq!(cfg.support_contact, "support@example.com");
    assert_eq!(cfg.generation_timeout_secs, 10);
    assert_eq!(cfg.draft_concurrency, 4);
    assert!(cfg.openai_api_key.is_none());
    assert!(!cfg.generation_enabled());
    assert_eq!(cfg.openai_model, "gpt-4o-mini");
    assert_eq!(cfg.openai_base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPWATCH_BIND_ADDR"),
        "expected InvalidEnvVar(REPWATCH_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn neg_alert_ratio_override() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_NEG_ALERT_RATIO", "0.45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.neg_alert_ratio - 0.45).abs() < f64::EPSILON);
}

#[test]
fn neg_alert_ratio_out_of_range_is_rejected() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_NEG_ALERT_RATIO", "1.5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPWATCH_NEG_ALERT_RATIO"),
        "expected InvalidEnvVar(REPWATCH_NEG_ALERT_RATIO), got: {result:?}"
    );
}

#[test]
fn neg_alert_min_mentions_invalid() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_NEG_ALERT_MIN_MENTIONS", "ten");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPWATCH_NEG_ALERT_MIN_MENTIONS"),
        "expected InvalidEnvVar(REPWATCH_NEG_ALERT_MIN_MENTIONS), got: {result:?}"
    );
}

#[test]
fn top_k_keywords_override() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_TOP_K_KEYWORDS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.top_k_keywords, 25);
}

#[test]
fn zero_generation_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_GENERATION_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REPWATCH_GENERATION_TIMEOUT_SECS"),
        "expected InvalidEnvVar(REPWATCH_GENERATION_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn draft_concurrency_is_at_least_one() {
    let mut map = HashMap::new();
    map.insert("REPWATCH_DRAFT_CONCURRENCY", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.draft_concurrency, 1);
}

#[test]
fn blank_openai_key_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.openai_api_key.is_none());
    assert!(!cfg.generation_enabled());
}

#[test]
fn openai_key_enables_generation() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "sk-test");
    map.insert("OPENAI_MODEL", "gpt-4");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.generation_enabled());
    assert_eq!(cfg.openai_model, "gpt-4");
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "sk-very-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("[redacted]"));
}
