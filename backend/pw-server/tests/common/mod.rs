#![allow(dead_code)]

//! Test infrastructure for pw-server API tests

use pw_auth::{
    AuthContext, AuthError, AuthRateLimiter, IdentityClaims, IdentityProvider, ProviderUser,
    RateLimitConfig, Result as AuthErrorResult,
};
use pw_db::UserRepository;
use pw_server::AppState;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, extract::ConnectInfo, http::Request, response::Response};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// Identity provider double: identity tokens are keys into a table and
/// session cookies are `session-<uid>`.
#[derive(Default)]
pub struct FakeIdentityProvider {
    id_tokens: Mutex<HashMap<String, IdentityClaims>>,
    sessions: Mutex<HashMap<String, IdentityClaims>>,
    offline: AtomicBool,
}

impl FakeIdentityProvider {
    pub fn add_token(&self, token: &str, uid: &str, email: &str) {
        let now = chrono::Utc::now().timestamp();
        self.id_tokens.lock().unwrap().insert(
            token.to_string(),
            IdentityClaims {
                uid: uid.to_string(),
                email: Some(email.to_string()),
                issuer: "https://securetoken.google.com/demo-project".to_string(),
                issued_at: now,
                auth_time: now,
                expires_at: now + 3600,
            },
        );
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn revoke_all(&self) {
        self.sessions.lock().unwrap().clear();
    }

    fn check_online(&self) -> AuthErrorResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AuthError::network("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn verify_id_token(&self, id_token: &str) -> AuthErrorResult<IdentityClaims> {
        self.check_online()?;
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
        _ttl: Duration,
    ) -> AuthErrorResult<String> {
        let claims = self.verify_id_token(id_token).await?;
        let cookie = format!("session-{}", claims.uid);
        self.sessions.lock().unwrap().insert(cookie.clone(), claims);
        Ok(cookie)
    }

    async fn verify_session_cookie(
        &self,
        session_cookie: &str,
        _check_revoked: bool,
    ) -> AuthErrorResult<IdentityClaims> {
        self.check_online()?;
        self.sessions
            .lock()
            .unwrap()
            .get(session_cookie)
            .cloned()
            .ok_or_else(|| AuthError::invalid_session("unknown session"))
    }

    async fn get_user_by_email(&self, _email: &str) -> AuthErrorResult<ProviderUser> {
        self.check_online()?;
        Err(AuthError::user_not_found("no account"))
    }
}

pub struct TestApp {
    pub state: AppState,
    pub provider: Arc<FakeIdentityProvider>,
    _dir: TempDir,
}

/// AppState backed by an on-disk SQLite database in a temp dir
pub async fn create_test_app() -> TestApp {
    create_test_app_with_limit(RateLimitConfig {
        max_requests: 1000,
        window_secs: 60,
    })
    .await
}

pub async fn create_test_app_with_limit(limit: RateLimitConfig) -> TestApp {
    let dir = TempDir::new().unwrap();
    let pool = pw_db::connect(&dir.path().join("test.db"))
        .await
        .expect("Failed to create test database");
    let users = UserRepository::new(pool);

    let provider = Arc::new(FakeIdentityProvider::default());
    let auth = AuthContext::new(provider.clone(), Arc::new(users.clone()));

    TestApp {
        state: AppState::new(auth, users, AuthRateLimiter::new(limit)),
        provider,
        _dir: dir,
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(session) = session {
        builder = builder.header("cookie", format!("session={}", session));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(state: &AppState, request: Request<Body>) -> Response {
    pw_server::build_router(state.clone(), &[])
        .oneshot(request)
        .await
        .unwrap()
}

/// Send as if the request arrived on a connection from `ip`
pub async fn send_from(state: &AppState, ip: [u8; 4], mut request: Request<Body>) -> Response {
    let addr = SocketAddr::from((ip, 40_000));
    request.extensions_mut().insert(ConnectInfo(addr));
    send(state, request).await
}

/// Send through a router that allows credentialed calls from `origins`
pub async fn send_with_cors(
    state: &AppState,
    origins: &[String],
    request: Request<Body>,
) -> Response {
    pw_server::build_router(state.clone(), origins)
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
