use crate::{
    AuthContext, AuthError, IdentityClaims, IdentityProvider, ProviderUser,
    Result as AuthErrorResult,
};

use pw_core::{CreateOutcome, Result as CoreErrorResult, UserDirectory, UserProfile};

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub const PROJECT: &str = "demo-project";

pub fn claims(uid: &str, email: &str) -> IdentityClaims {
    let now = chrono::Utc::now().timestamp();
    IdentityClaims {
        uid: uid.to_string(),
        email: Some(email.to_string()),
        issuer: format!("https://securetoken.google.com/{}", PROJECT),
        issued_at: now,
        auth_time: now,
        expires_at: now + 3600,
    }
}

pub fn account(uid: &str, email: &str) -> ProviderUser {
    ProviderUser {
        uid: uid.to_string(),
        email: Some(email.to_string()),
        disabled: false,
        valid_since: None,
    }
}

/// In-process identity provider. Tokens are opaque keys into a table.
#[derive(Default)]
pub struct FakeIdentityProvider {
    id_tokens: Mutex<HashMap<String, IdentityClaims>>,
    sessions: Mutex<HashMap<String, IdentityClaims>>,
    revoked: Mutex<HashSet<String>>,
    accounts: Mutex<HashMap<String, ProviderUser>>,
    last_ttl: Mutex<Option<Duration>>,
    delay: Mutex<Option<Duration>>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl FakeIdentityProvider {
    pub fn with_id_token(self, token: &str, claims: IdentityClaims) -> Self {
        self.id_tokens.lock().unwrap().insert(token.to_string(), claims);
        self
    }

    pub fn with_session(self, cookie: &str, claims: IdentityClaims) -> Self {
        self.sessions.lock().unwrap().insert(cookie.to_string(), claims);
        self
    }

    pub fn with_account(self, account: ProviderUser) -> Self {
        if let Some(email) = account.email.clone() {
            self.accounts.lock().unwrap().insert(email, account);
        }
        self
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn offline(self) -> Self {
        self.offline.store(true, Ordering::SeqCst);
        self
    }

    pub fn revoke(&self, uid: &str) {
        self.revoked.lock().unwrap().insert(uid.to_string());
    }

    pub fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> AuthErrorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(AuthError::network("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn verify_id_token(&self, id_token: &str) -> AuthErrorResult<IdentityClaims> {
        self.enter().await?;
        self.id_tokens
            .lock()
            .unwrap()
            .get(id_token)
            .cloned()
            .ok_or_else(|| AuthError::invalid_token("unknown token"))
    }

    async fn create_session_cookie(
        &self,
        id_token: &str,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        self.enter().await?;
        let claims = self
            .id_tokens
            .lock()
            .unwrap()
            .get(id_token)
            .cloned()
            .ok_or_else(|| AuthError::invalid_token("unknown token"))?;

        *self.last_ttl.lock().unwrap() = Some(ttl);
        let cookie = format!("session-{}", claims.uid);
        self.sessions.lock().unwrap().insert(cookie.clone(), claims);
        Ok(cookie)
    }

    async fn verify_session_cookie(
        &self,
        session_cookie: &str,
        check_revoked: bool,
    ) -> AuthErrorResult<IdentityClaims> {
        self.enter().await?;
        let claims = self
            .sessions
            .lock()
            .unwrap()
            .get(session_cookie)
            .cloned()
            .ok_or_else(|| AuthError::invalid_session("unknown session"))?;

        if claims.expires_at < chrono::Utc::now().timestamp() {
            return Err(AuthError::invalid_session("expired"));
        }
        if check_revoked && self.revoked.lock().unwrap().contains(&claims.uid) {
            return Err(AuthError::invalid_session("revoked"));
        }
        Ok(claims)
    }

    async fn get_user_by_email(&self, email: &str) -> AuthErrorResult<ProviderUser> {
        self.enter().await?;
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or_else(|| AuthError::user_not_found("no account"))
    }
}

#[derive(Default)]
pub struct MemoryDirectory {
    users: Mutex<HashMap<String, UserProfile>>,
    broken: AtomicBool,
}

impl MemoryDirectory {
    pub fn with_user(self, uid: &str, name: &str, email: &str) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(uid.to_string(), UserProfile::new(name, email));
        self
    }

    pub fn broken(self) -> Self {
        self.broken.store(true, Ordering::SeqCst);
        self
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn profile(&self, uid: &str) -> Option<UserProfile> {
        self.users.lock().unwrap().get(uid).cloned()
    }

    fn check(&self) -> CoreErrorResult<()> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(pw_core::CoreError::storage("disk I/O error"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn get(&self, uid: &str) -> CoreErrorResult<Option<UserProfile>> {
        self.check()?;
        Ok(self.users.lock().unwrap().get(uid).cloned())
    }

    async fn create_if_absent(
        &self,
        uid: &str,
        profile: &UserProfile,
    ) -> CoreErrorResult<CreateOutcome> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(uid) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        users.insert(uid.to_string(), profile.clone());
        Ok(CreateOutcome::Created)
    }
}

pub fn context(
    provider: FakeIdentityProvider,
    directory: MemoryDirectory,
) -> (AuthContext, Arc<FakeIdentityProvider>, Arc<MemoryDirectory>) {
    let provider = Arc::new(provider);
    let directory = Arc::new(directory);
    let context = AuthContext::new(provider.clone(), directory.clone());
    (context, provider, directory)
}
