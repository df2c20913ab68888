use crate::{
    AccountConfirmation, AccountRegistrar, IdentityProvider, SessionCookiePolicy, SessionIssuer,
    SessionResolver,
};

use pw_core::UserDirectory;

use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Handles and policy shared by the authentication actions.
/// Cheap to clone; built once at startup and passed to every request.
#[derive(Clone)]
pub struct AuthContext {
    pub provider: Arc<dyn IdentityProvider>,
    pub directory: Arc<dyn UserDirectory>,
    pub cookie_policy: SessionCookiePolicy,
    pub account_confirmation: AccountConfirmation,
    /// Deadline for each identity-provider call
    pub call_timeout: Duration,
}

impl AuthContext {
    pub fn new(provider: Arc<dyn IdentityProvider>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            provider,
            directory,
            cookie_policy: SessionCookiePolicy::default(),
            account_confirmation: AccountConfirmation::default(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_cookie_policy(mut self, policy: SessionCookiePolicy) -> Self {
        self.cookie_policy = policy;
        self
    }

    pub fn with_account_confirmation(mut self, confirmation: AccountConfirmation) -> Self {
        self.account_confirmation = confirmation;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn registrar(&self) -> AccountRegistrar {
        AccountRegistrar::new(self.clone())
    }

    pub fn issuer(&self) -> SessionIssuer {
        SessionIssuer::new(self.clone())
    }

    pub fn resolver(&self) -> SessionResolver {
        SessionResolver::new(self.clone())
    }
}
