use pw_auth::{AuthContext, AuthRateLimiter};
use pw_db::UserRepository;

use std::sync::Arc;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthContext,
    /// Same store the auth context resolves profiles from; used by readiness
    pub users: UserRepository,
    pub rate_limiter: Arc<AuthRateLimiter>,
}

impl AppState {
    pub fn new(auth: AuthContext, users: UserRepository, rate_limiter: AuthRateLimiter) -> Self {
        Self {
            auth,
            users,
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}
