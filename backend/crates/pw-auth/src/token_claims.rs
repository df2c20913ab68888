use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_UID_LENGTH: usize = 128;

/// Claims carried by identity tokens and session cookies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (uid)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Audience (the project id)
    pub aud: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// When the user last authenticated; defaults to `iat` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TokenClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_UID_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(auth_time) = self.auth_time
            && auth_time > self.exp
        {
            return Err(AuthError::InvalidClaim {
                claim: "auth_time".to_string(),
                message: "auth_time is after token expiry".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn auth_time(&self) -> i64 {
        self.auth_time.unwrap_or(self.iat)
    }
}
