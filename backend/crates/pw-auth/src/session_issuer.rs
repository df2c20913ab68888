use crate::messages::{SIGNED_IN, sign_in_message};
use crate::provider_call::with_timeout;
use crate::{
    AccountConfirmation, AuthContext, AuthError, AuthErrorKind, IdentityClaims,
    Result as AuthErrorResult,
};

use pw_core::{ActionResult, SignInParams};

use std::panic::Location;

use axum_extra::extract::cookie::{Cookie, CookieJar};
use error_location::ErrorLocation;
use log::{info, warn};

/// Exchanges a verified identity token for a session cookie.
///
/// Every step is a gate; the cookie is only added once all of them pass.
pub struct SessionIssuer {
    context: AuthContext,
}

impl SessionIssuer {
    pub fn new(context: AuthContext) -> Self {
        Self { context }
    }

    /// Sign in and report the outcome as a form result, along with the
    /// failure kind when it failed. On failure the jar is returned untouched.
    pub async fn sign_in(
        &self,
        jar: CookieJar,
        params: &SignInParams,
    ) -> (CookieJar, ActionResult, Option<AuthErrorKind>) {
        match self.issue(params).await {
            Ok(cookie) => (jar.add(cookie), ActionResult::ok(SIGNED_IN), None),
            Err(e) => {
                warn!("Sign-in failed for '{}': {}", params.email, e);
                (jar, ActionResult::failed(sign_in_message(&e)), Some(e.kind()))
            }
        }
    }

    /// Run the gates and build the `session` cookie
    pub async fn issue(&self, params: &SignInParams) -> AuthErrorResult<Cookie<'static>> {
        params.validate()?;

        let limit = self.context.call_timeout;
        let provider = &self.context.provider;

        let claims = with_timeout(
            "verify_id_token",
            limit,
            provider.verify_id_token(&params.identity_token),
        )
        .await?;

        if !claims.email_matches(&params.email) {
            return Err(AuthError::email_mismatch());
        }

        if self.context.account_confirmation == AccountConfirmation::Upstream {
            self.confirm_upstream_account(&claims, &params.email).await?;
        }

        let policy = &self.context.cookie_policy;
        let session = with_timeout(
            "create_session_cookie",
            limit,
            provider.create_session_cookie(&params.identity_token, policy.ttl()),
        )
        .await?;

        info!("Issued session for uid '{}'", claims.uid);
        Ok(policy.build(session))
    }

    async fn confirm_upstream_account(
        &self,
        claims: &IdentityClaims,
        email: &str,
    ) -> AuthErrorResult<()> {
        let account = with_timeout(
            "get_user_by_email",
            self.context.call_timeout,
            self.context.provider.get_user_by_email(email),
        )
        .await?;

        if account.disabled {
            return Err(AuthError::UserDisabled {
                message: format!("account '{}' is disabled", account.uid),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if account.uid != claims.uid {
            return Err(AuthError::email_mismatch());
        }

        Ok(())
    }
}
