//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is compiled once per deployment target, so endpoint selection is
//! resolved from build-time environment values rather than runtime lookups.
//! Every URL the client talks to (identity server, todo API) derives from the
//! single `AppConfig` built here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEV_IDENTITY_URL: &str = "http://localhost:4000";
pub const PROD_IDENTITY_URL: &str = "https://usual-chrissie-sojborg-72e46f20.koyeb.app";
pub const DEV_API_BASE_URL: &str = "http://localhost:4000/api";
/// Relative to the page origin: production expects a reverse proxy routing
/// `/api` to the todo API and everything else to the web host.
pub const PROD_API_BASE_URL: &str = "/api";

/// Configuration errors raised while resolving build-time values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown build mode '{0}' (expected 'development' or 'production')")]
    UnknownMode(String),
    #[error("identity server url must not be empty")]
    EmptyIdentityUrl,
}

/// Deployment target the bundle was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Parse a mode name. `None` selects the profile default: development for
    /// debug builds, production otherwise.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            None => Ok(Self::profile_default()),
            Some(mode) => match mode.as_str() {
                "" => Ok(Self::profile_default()),
                "development" | "dev" => Ok(Self::Development),
                "production" | "prod" => Ok(Self::Production),
                _ => Err(ConfigError::UnknownMode(mode)),
            },
        }
    }

    fn profile_default() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }
}

/// Resolved endpoints for one build of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub identity_url: String,
    pub api_base_url: String,
}

impl AppConfig {
    /// Build config from raw values.
    ///
    /// - `mode`: `development` / `production`, see [`BuildMode::parse`]
    /// - `identity_override`: replaces the per-mode identity server base URL
    pub fn resolve(mode: Option<&str>, identity_override: Option<&str>) -> Result<Self, ConfigError> {
        let mode = BuildMode::parse(mode)?;
        let identity_url = match identity_override {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyIdentityUrl);
                }
                trimmed.to_owned()
            }
            None => match mode {
                BuildMode::Development => DEV_IDENTITY_URL.to_owned(),
                BuildMode::Production => PROD_IDENTITY_URL.to_owned(),
            },
        };
        let api_base_url = match mode {
            BuildMode::Development => DEV_API_BASE_URL,
            BuildMode::Production => PROD_API_BASE_URL,
        }
        .to_owned();

        Ok(Self { identity_url, api_base_url })
    }

    /// Config baked into this build from `DAILY_TASKS_ENV` and
    /// `DAILY_TASKS_IDENTITY_URL`. Invalid values fall back to the profile
    /// defaults with a warning.
    pub fn current() -> Self {
        let mode = option_env!("DAILY_TASKS_ENV");
        let identity = option_env!("DAILY_TASKS_IDENTITY_URL");
        Self::resolve(mode, identity).unwrap_or_else(|e| {
            log::warn!("invalid build configuration, using defaults: {e}");
            Self::default()
        })
    }

    /// Identity server entry point that starts the Google login flow.
    pub fn login_url(&self) -> String {
        format!("{}/auth/google", self.identity_url)
    }

    /// Identity server endpoint returning the user behind a bearer token.
    pub fn userinfo_url(&self) -> String {
        format!("{}/auth/userinfo", self.identity_url)
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.api_base_url)
    }

    pub fn todo_url(&self, id: &str) -> String {
        format!("{}/todos/{id}", self.api_base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mode = BuildMode::profile_default();
        let (identity_url, api_base_url) = match mode {
            BuildMode::Development => (DEV_IDENTITY_URL, DEV_API_BASE_URL),
            BuildMode::Production => (PROD_IDENTITY_URL, PROD_API_BASE_URL),
        };
        Self { identity_url: identity_url.to_owned(), api_base_url: api_base_url.to_owned() }
    }
}
