use super::*;

// =============================================================
// BuildMode::parse
// =============================================================

#[test]
fn parse_accepts_long_and_short_names() {
    assert_eq!(BuildMode::parse(Some("development")), Ok(BuildMode::Development));
    assert_eq!(BuildMode::parse(Some("dev")), Ok(BuildMode::Development));
    assert_eq!(BuildMode::parse(Some("production")), Ok(BuildMode::Production));
    assert_eq!(BuildMode::parse(Some(" PROD ")), Ok(BuildMode::Production));
}

#[test]
fn parse_missing_or_blank_uses_profile_default() {
    let expected = if cfg!(debug_assertions) { BuildMode::Development } else { BuildMode::Production };
    assert_eq!(BuildMode::parse(None), Ok(expected));
    assert_eq!(BuildMode::parse(Some("  ")), Ok(expected));
}

#[test]
fn parse_rejects_unknown_mode() {
    assert_eq!(BuildMode::parse(Some("staging")), Err(ConfigError::UnknownMode("staging".to_owned())));
}

// =============================================================
// AppConfig::resolve
// =============================================================

#[test]
fn development_points_at_local_servers() {
    let config = AppConfig::resolve(Some("development"), None).unwrap();
    assert_eq!(config.identity_url, "http://localhost:4000");
    assert_eq!(config.api_base_url, "http://localhost:4000/api");
}

#[test]
fn production_uses_relative_api_and_hosted_identity() {
    let config = AppConfig::resolve(Some("production"), None).unwrap();
    assert_eq!(config.identity_url, PROD_IDENTITY_URL);
    assert_eq!(config.api_base_url, "/api");
}

#[test]
fn identity_override_wins_and_drops_trailing_slash() {
    let config = AppConfig::resolve(Some("production"), Some("https://id.example.com/")).unwrap();
    assert_eq!(config.identity_url, "https://id.example.com");
    assert_eq!(config.api_base_url, "/api");
}

#[test]
fn blank_identity_override_is_rejected() {
    assert_eq!(AppConfig::resolve(None, Some("   ")), Err(ConfigError::EmptyIdentityUrl));
}

// =============================================================
// Derived endpoints
// =============================================================

#[test]
fn login_and_userinfo_urls_share_identity_base() {
    let config = AppConfig::resolve(Some("dev"), None).unwrap();
    assert_eq!(config.login_url(), "http://localhost:4000/auth/google");
    assert_eq!(config.userinfo_url(), "http://localhost:4000/auth/userinfo");
}

#[test]
fn todo_urls_use_api_base() {
    let config = AppConfig::resolve(Some("production"), None).unwrap();
    assert_eq!(config.todos_url(), "/api/todos");
    assert_eq!(config.todo_url("65f0c0ffee"), "/api/todos/65f0c0ffee");
}

#[test]
fn default_matches_resolve_without_values() {
    assert_eq!(AppConfig::default(), AppConfig::resolve(None, None).unwrap());
}
