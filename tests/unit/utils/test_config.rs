use ahrefs_client::prelude::*;
use ahrefs_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none, parse_flag};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("AHREFS_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("AHREFS_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("AHREFS_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("AHREFS_TEST_MISSING_VAR");
    }
    let result: u64 = get_env_or_default("AHREFS_TEST_MISSING_VAR", 30);
    assert_eq!(result, 30);
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("AHREFS_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("AHREFS_TEST_VAR_INVALID", 3);
        assert_eq!(result, 3);
        env::remove_var("AHREFS_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("AHREFS_TEST_VAR_OPTION", "0.25");
        let present: Option<f64> = get_env_or_none("AHREFS_TEST_VAR_OPTION");
        assert_eq!(present, Some(0.25));
        env::remove_var("AHREFS_TEST_VAR_OPTION");
    }
    let absent: Option<f64> = get_env_or_none("AHREFS_TEST_VAR_OPTION");
    assert_eq!(absent, None);
}

#[test]
fn test_parse_flag_only_one_and_true() {
    assert!(parse_flag("1"));
    assert!(parse_flag("true"));
    assert!(parse_flag("True"));
    for value in ["0", "false", "no", "off", "yes", ""] {
        assert!(!parse_flag(value), "{value:?}");
    }
}

#[test]
fn test_get_env_flag() {
    unsafe {
        env::set_var("AHREFS_TEST_FLAG", "off");
        assert_eq!(get_env_flag("AHREFS_TEST_FLAG"), Some(false));
        env::set_var("AHREFS_TEST_FLAG", "TRUE");
        assert_eq!(get_env_flag("AHREFS_TEST_FLAG"), Some(true));
        env::remove_var("AHREFS_TEST_FLAG");
    }
    assert_eq!(get_env_flag("AHREFS_TEST_FLAG"), None);
}

#[test]
fn test_client_config_from_env() {
    unsafe {
        env::set_var("AHREFS_API_KEY", "env-key");
        env::set_var("AHREFS_BASE_URL", "http://localhost:9999");
        env::set_var("AHREFS_TIMEOUT_S", "7");
        env::set_var("AHREFS_RATE_LIMIT_PER_MIN", "12");
        env::set_var("AHREFS_AUTH_IN_HEADER", "0");
        env::set_var("AHREFS_API_KEY_QUERY_PARAM", "api_key");
        env::set_var("AHREFS_API_KEY_PREFIX", "Ahrefs ");
        env::set_var("AHREFS_MAX_RETRIES", "5");
        env::set_var("AHREFS_BACKOFF_FACTOR", "1.5");
    }

    let config = ClientConfig::from_env();

    unsafe {
        env::set_var("AHREFS_AUTH_IN_HEADER", "no");
    }
    let negated = ClientConfig::from_env();
    unsafe {
        env::remove_var("AHREFS_AUTH_IN_HEADER");
    }
    let unset = ClientConfig::from_env();

    unsafe {
        for var in [
            "AHREFS_API_KEY",
            "AHREFS_BASE_URL",
            "AHREFS_TIMEOUT_S",
            "AHREFS_RATE_LIMIT_PER_MIN",
            "AHREFS_AUTH_IN_HEADER",
            "AHREFS_API_KEY_QUERY_PARAM",
            "AHREFS_API_KEY_PREFIX",
            "AHREFS_MAX_RETRIES",
            "AHREFS_BACKOFF_FACTOR",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.credential.as_deref(), Some("env-key"));
    assert_eq!(config.base_url, "http://localhost:9999");
    assert_eq!(config.timeout_secs, 7);
    assert_eq!(config.rate_limiter.max_requests, 12);
    assert_eq!(config.auth_mode, AuthMode::QueryParam);
    assert_eq!(config.api_key_query_param, "api_key");
    assert_eq!(config.api_key_prefix, "Ahrefs ");
    assert_eq!(config.api_key_header, "Authorization");
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_factor, 1.5);
    assert_eq!(negated.auth_mode, AuthMode::QueryParam);
    assert_eq!(unset.auth_mode, AuthMode::Header);
}

#[test]
fn test_client_config_serde_skips_credential() {
    let config = ClientConfig::new().with_credential("secret");
    let value = serde_json::to_value(&config).unwrap();
    assert!(value.get("credential").is_none());
    assert_eq!(value["auth_mode"], "header");

    let back: ClientConfig = serde_json::from_value(value).unwrap();
    assert!(back.credential.is_none());
    assert_eq!(back.base_url, config.base_url);
}
