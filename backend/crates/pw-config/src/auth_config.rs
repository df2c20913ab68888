use crate::{
    AccountConfirmationMode, ConfigError, ConfigErrorResult, DEFAULT_API_URL,
    DEFAULT_AUTH_TIMEOUT_SECS, MAX_AUTH_TIMEOUT_SECS, MIN_AUTH_TIMEOUT_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Identity provider settings.
///
/// Tokens are verified with either an HS256 `jwt_secret` or the RS256 public
/// key at `jwt_public_key_path` (relative to the config directory).
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub project_id: String,
    pub api_url: String,
    pub api_key: Option<String>,
    pub jwt_secret: Option<String>,
    pub jwt_public_key_path: Option<String>,
    /// Defaults to the provider's issuer for `project_id`
    pub token_issuer: Option<String>,
    pub session_issuer: Option<String>,
    pub account_confirmation: AccountConfirmationMode,
    /// Deadline for each identity provider call
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_url: String::from(DEFAULT_API_URL),
            api_key: None,
            jwt_secret: None,
            jwt_public_key_path: None,
            token_issuer: None,
            session_issuer: None,
            account_confirmation: AccountConfirmationMode::default(),
            timeout_secs: DEFAULT_AUTH_TIMEOUT_SECS,
        }
    }
}

// Secrets stay out of Debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("project_id", &self.project_id)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_public_key_path", &self.jwt_public_key_path)
            .field("token_issuer", &self.token_issuer)
            .field("session_issuer", &self.session_issuer)
            .field("account_confirmation", &self.account_confirmation)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::auth("auth.project_id is required"));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::auth(format!(
                "auth.api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth requires either jwt_secret or jwt_public_key_path",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
                ));
            }
            (Some(secret), None) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(key_path)) => {
                if Path::new(key_path).is_absolute() || key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative and cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
            }
        }

        if self.timeout_secs < MIN_AUTH_TIMEOUT_SECS || self.timeout_secs > MAX_AUTH_TIMEOUT_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.timeout_secs must be {}-{}, got {}",
                MIN_AUTH_TIMEOUT_SECS, MAX_AUTH_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Read the RS256 public key, if one is configured
    pub fn read_public_key(&self, config_dir: &Path) -> ConfigErrorResult<Option<String>> {
        let Some(key_path) = &self.jwt_public_key_path else {
            return Ok(None);
        };

        let full_path: PathBuf = config_dir.join(key_path);
        std::fs::read_to_string(&full_path)
            .map(Some)
            .map_err(|e| ConfigError::Io {
                path: full_path,
                source: e,
            })
    }

    pub fn algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
