use crate::models::email::validate_email;
use crate::{CoreError, Result as CoreErrorResult, UserProfile};

use serde::{Deserialize, Serialize};

pub const MAX_UID_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 100;

/// Request to create the profile for an identity that already exists upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpParams {
    pub uid: String,
    pub name: String,
    pub email: String,
}

impl SignUpParams {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.uid.is_empty() {
            return Err(CoreError::validation("uid", "uid cannot be empty"));
        }
        if self.uid.len() > MAX_UID_LENGTH {
            return Err(CoreError::validation("uid", "uid exceeds maximum length"));
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(CoreError::validation(
                "name",
                format!("name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }

        validate_email("email", &self.email)
    }

    /// Profile fields to persist; the uid is the record key, not a field.
    pub fn profile(&self) -> UserProfile {
        UserProfile::new(self.name.trim(), self.email.clone())
    }
}
