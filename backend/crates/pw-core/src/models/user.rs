//! User entity - the identity resolved from a session.

use crate::UserProfile;

use serde::{Deserialize, Serialize};

/// An authenticated user.
/// `id` is the identity provider's uid and never changes after sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Combine a stored profile with the uid it is keyed under
    pub fn from_profile(id: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            id: id.into(),
            name: profile.name,
            email: profile.email,
        }
    }
}
