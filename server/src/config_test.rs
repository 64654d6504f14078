use super::*;

#[test]
fn defaults_to_development_on_port_8000() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn reads_production_and_port() {
    let config = ServerConfig::from_values(Some("production"), Some(" 4000 ")).unwrap();
    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.port, 4000);
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(ServerConfig::from_values(None, Some("")).unwrap().port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("eighty")),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_values(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn unknown_environment_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("staging"), None),
        Err(ConfigError::UnknownEnvironment("staging".to_owned()))
    );
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig::from_values(None, Some("8123")).unwrap();
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8123");
}
