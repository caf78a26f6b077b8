use quorum_dns_domain::config::{MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};
use quorum_dns_domain::{CliOverrides, Config};

#[test]
fn test_default_config_has_nine_resolvers() {
    let config = Config::default();
    assert_eq!(config.resolvers.len(), 9);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_timeouts() {
    let config = Config::default();
    assert_eq!(config.query.timeout_ms, 500);
    assert_eq!(config.query.debug_timeout_ms, 2000);
    assert!(config.query.timeout_ms >= MIN_TIMEOUT_MS);
    assert!(config.query.debug_timeout_ms <= MAX_TIMEOUT_MS);
}

#[test]
fn test_parse_minimal_toml() {
    let config: Config = toml::from_str(
        r#"
        [[resolvers]]
        name = "Cloudflare"
        endpoint = "https://cloudflare-dns.com/dns-query"
        "#,
    )
    .unwrap();

    assert_eq!(config.resolvers.len(), 1);
    assert_eq!(config.resolvers[0].name, "Cloudflare");
    assert_eq!(config.query.timeout_ms, 500);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_full_toml() {
    let config: Config = toml::from_str(
        r#"
        [[resolvers]]
        name = "Google"
        endpoint = "https://dns.google/dns-query"

        [[resolvers]]
        name = "Quad9"
        endpoint = "https://dns.quad9.net/dns-query"

        [query]
        timeout_ms = 750
        debug_timeout_ms = 3000

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.resolvers.len(), 2);
    assert_eq!(config.query.timeout_ms, 750);
    assert_eq!(config.query.debug_timeout_ms, 3000);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_resolver_set() {
    let mut config = Config::default();
    config.resolvers.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_non_https_endpoint() {
    let mut config = Config::default();
    config.resolvers[0].endpoint = "http://doh.pub/dns-query".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_out_of_range_timeout() {
    let mut config = Config::default();
    config.query.timeout_ms = 50;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.query.timeout_ms = 20_000;
    assert!(config.validate().is_err());
}

#[test]
fn test_cli_override_applies_to_both_timeouts() {
    let overrides = CliOverrides {
        timeout_ms: Some(1200),
        log_level: Some("trace".to_string()),
    };

    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.query.timeout_ms, 1200);
    assert_eq!(config.query.debug_timeout_ms, 1200);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_cli_override_out_of_range_timeout_fails_validation() {
    let overrides = CliOverrides {
        timeout_ms: Some(50),
        log_level: None,
    };
    assert!(Config::load(None, overrides).is_err());
}

#[test]
fn test_load_missing_explicit_file_is_error() {
    let result = Config::load(
        Some("/nonexistent/quorum-dns.toml"),
        CliOverrides::default(),
    );
    assert!(result.is_err());
}
