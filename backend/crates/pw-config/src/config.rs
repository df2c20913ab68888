use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    /// `NAME=value` of env overrides that did not parse; fails validate()
    #[serde(skip)]
    pub rejected_overrides: Vec<String>,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. PW_CONFIG_DIR env var, else ./.pw/
    /// 2. Auto-create the config directory
    /// 3. config.toml if present, else defaults
    /// 4. PW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: PW_CONFIG_DIR env var > ./.pw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.rejected_overrides.is_empty() {
            return Err(ConfigError::config(format!(
                "unparseable environment overrides: {}",
                self.rejected_overrides.join(", ")
            )));
        }

        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&config_dir)?;
        self.session.validate()?;
        self.rate_limit.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_secs(self.auth.timeout_secs)
    }

    pub fn session_secure(&self) -> bool {
        self.session.secure_for(self.server.environment)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        if !self.server.cors_origins.is_empty() {
            info!("  cors: {}", self.server.cors_origins.join(", "));
        }
        info!("  database: {}", self.database.path);
        info!(
            "  auth: project={} api={} ({}, confirmation={}, timeout={}s)",
            self.auth.project_id,
            self.auth.api_url,
            self.auth.algorithm_name(),
            self.auth.account_confirmation,
            self.auth.timeout_secs
        );
        info!(
            "  session: max_age={}s secure={}",
            self.session.max_age_secs,
            self.session_secure()
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PW_SERVER_HOST", &mut self.server.host);
        Self::apply_env_list("PW_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);
        Self::apply_env_parse(
            "PW_SERVER_PORT",
            &mut self.server.port,
            &mut self.rejected_overrides,
        );
        Self::apply_env_parse(
            "PW_ENV",
            &mut self.server.environment,
            &mut self.rejected_overrides,
        );

        // Database
        Self::apply_env_string("PW_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_string("PW_AUTH_PROJECT_ID", &mut self.auth.project_id);
        Self::apply_env_string("PW_AUTH_API_URL", &mut self.auth.api_url);
        Self::apply_env_option_string("PW_AUTH_API_KEY", &mut self.auth.api_key);
        Self::apply_env_option_string("PW_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "PW_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("PW_AUTH_TOKEN_ISSUER", &mut self.auth.token_issuer);
        Self::apply_env_option_string("PW_AUTH_SESSION_ISSUER", &mut self.auth.session_issuer);
        Self::apply_env_parse(
            "PW_AUTH_ACCOUNT_CONFIRMATION",
            &mut self.auth.account_confirmation,
            &mut self.rejected_overrides,
        );
        Self::apply_env_parse(
            "PW_AUTH_TIMEOUT_SECS",
            &mut self.auth.timeout_secs,
            &mut self.rejected_overrides,
        );

        // Session
        Self::apply_env_parse(
            "PW_SESSION_MAX_AGE_SECS",
            &mut self.session.max_age_secs,
            &mut self.rejected_overrides,
        );
        Self::apply_env_option_bool("PW_SESSION_SECURE", &mut self.session.secure);

        // Logging
        Self::apply_env_parse(
            "PW_LOG_LEVEL",
            &mut self.logging.level,
            &mut self.rejected_overrides,
        );
        Self::apply_env_bool("PW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PW_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "PW_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
            &mut self.rejected_overrides,
        );
        Self::apply_env_parse(
            "PW_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
            &mut self.rejected_overrides,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_option_bool(var_name: &str, target: &mut Option<bool>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val == "true" || val == "1");
        }
    }

    /// Unparseable values leave the target untouched and are recorded
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &str,
        target: &mut T,
        rejected: &mut Vec<String>,
    ) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => rejected.push(format!("{}={}", var_name, val)),
            }
        }
    }

    /// Comma-separated; blank entries are dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
