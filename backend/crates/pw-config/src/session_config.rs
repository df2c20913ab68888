use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_MAX_AGE_SECS, Environment,
    MAX_SESSION_MAX_AGE_SECS, MIN_SESSION_MAX_AGE_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session cookie lifetime; also the TTL requested from the provider
    pub max_age_secs: u64,
    /// Overrides the environment-derived `Secure` flag
    pub secure: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            secure: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_age_secs < MIN_SESSION_MAX_AGE_SECS
            || self.max_age_secs > MAX_SESSION_MAX_AGE_SECS
        {
            return Err(ConfigError::session(format!(
                "session.max_age_secs must be {}-{}, got {}",
                MIN_SESSION_MAX_AGE_SECS, MAX_SESSION_MAX_AGE_SECS, self.max_age_secs
            )));
        }

        Ok(())
    }

    pub fn secure_for(&self, environment: Environment) -> bool {
        self.secure.unwrap_or(environment.is_production())
    }
}
