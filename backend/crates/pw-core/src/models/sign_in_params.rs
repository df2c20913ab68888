use crate::models::email::validate_email;
use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-declared email plus the identity token obtained from the provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInParams {
    pub email: String,
    #[serde(rename = "idToken", alias = "identityToken")]
    pub identity_token: String,
}

impl SignInParams {
    pub fn new(email: impl Into<String>, identity_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            identity_token: identity_token.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_email("email", &self.email)?;

        if self.identity_token.trim().is_empty() {
            return Err(CoreError::validation(
                "idToken",
                "identity token cannot be empty",
            ));
        }

        Ok(())
    }
}

// Tokens are bearer credentials and must not reach the logs.
impl fmt::Debug for SignInParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInParams")
            .field("email", &self.email)
            .field("identity_token", &"<redacted>")
            .finish()
    }
}
