use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "session";

/// One week.
pub const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;

/// Attributes of the `session` cookie delivered after sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookiePolicy {
    pub max_age_secs: u64,
    /// Only send over HTTPS; on in production
    pub secure: bool,
}

impl Default for SessionCookiePolicy {
    fn default() -> Self {
        Self {
            max_age_secs: SESSION_TTL_SECS,
            secure: true,
        }
    }
}

impl SessionCookiePolicy {
    pub fn for_environment(production: bool) -> Self {
        Self {
            secure: production,
            ..Self::default()
        }
    }

    /// Lifetime requested from the identity provider for the session credential
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    pub fn build(&self, value: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.max_age_secs as i64))
            .build()
    }

    /// Cookie to hand to `CookieJar::remove`; path must match the issued cookie
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, ""))
            .path("/")
            .build()
    }
}
