use crate::provider_call::with_timeout;
use crate::{AuthContext, Result as AuthErrorResult, SESSION_COOKIE_NAME};

use pw_core::User;

use axum_extra::extract::cookie::CookieJar;
use log::debug;

/// Resolves the `session` cookie of a request to the signed-in user.
pub struct SessionResolver {
    context: AuthContext,
}

impl SessionResolver {
    pub fn new(context: AuthContext) -> Self {
        Self { context }
    }

    /// The signed-in user, or `None`. Every failure counts as signed out.
    pub async fn get_current_user(&self, jar: &CookieJar) -> Option<User> {
        let cookie = jar.get(SESSION_COOKIE_NAME)?;

        match self.resolve(cookie.value()).await {
            Ok(user) => user,
            Err(e) => {
                debug!("Session rejected: {}", e);
                None
            }
        }
    }

    pub async fn is_authenticated(&self, jar: &CookieJar) -> bool {
        self.get_current_user(jar).await.is_some()
    }

    /// Verify the credential with revocation checking and load its profile.
    /// `Ok(None)` when the uid has no profile.
    pub async fn resolve(&self, session_cookie: &str) -> AuthErrorResult<Option<User>> {
        let claims = with_timeout(
            "verify_session_cookie",
            self.context.call_timeout,
            self.context
                .provider
                .verify_session_cookie(session_cookie, true),
        )
        .await?;

        let profile = self.context.directory.get(&claims.uid).await?;
        if profile.is_none() {
            debug!("Session for uid '{}' has no profile", claims.uid);
        }

        Ok(profile.map(|profile| User::from_profile(claims.uid, profile)))
    }
}
