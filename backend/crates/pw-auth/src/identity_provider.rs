use crate::{IdentityClaims, ProviderUser, Result as AuthErrorResult};

use std::time::Duration;

use async_trait::async_trait;

/// Verification API of the external identity service.
///
/// Every method is network-bound; callers wrap them in a timeout.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a freshly issued identity token
    async fn verify_id_token(&self, id_token: &str) -> AuthErrorResult<IdentityClaims>;

    /// Exchange a verified identity token for a session cookie valid for `ttl`
    async fn create_session_cookie(&self, id_token: &str, ttl: Duration)
    -> AuthErrorResult<String>;

    /// Verify a session cookie; with `check_revoked` the provider is asked
    /// whether the account was disabled or its sessions revoked
    async fn verify_session_cookie(
        &self,
        session_cookie: &str,
        check_revoked: bool,
    ) -> AuthErrorResult<IdentityClaims>;

    async fn get_user_by_email(&self, email: &str) -> AuthErrorResult<ProviderUser>;
}
